// ABOUTME: Bounded TTL cache for fetched export bodies.
// ABOUTME: An explicit object callers pass into the cached fetch path instead of a process singleton.

use std::collections::HashMap;
use std::time::{Duration, Instant};

struct CacheEntry {
    inserted: Instant,
    // Instant can tie across back-to-back inserts; seq breaks the tie.
    seq: u64,
    body: String,
}

/// A bounded, TTL-expiring cache of export bodies keyed by URL.
///
/// Entries expire after the TTL and the stalest entry is evicted once
/// the capacity is reached. The cache is plain owned state: callers
/// decide where it lives (per handler, per worker), which keeps
/// multi-instance deployments honest about what is actually shared.
pub struct DocCache {
    ttl: Duration,
    capacity: usize,
    next_seq: u64,
    entries: HashMap<String, CacheEntry>,
}

impl DocCache {
    /// Creates a cache holding up to `capacity` bodies for `ttl` each.
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            ttl,
            capacity: capacity.max(1),
            next_seq: 0,
            entries: HashMap::new(),
        }
    }

    /// Returns the cached body for `url` if present and still fresh.
    /// Expired entries are removed on access.
    pub fn get(&mut self, url: &str) -> Option<String> {
        let fresh = match self.entries.get(url) {
            Some(entry) => entry.inserted.elapsed() < self.ttl,
            None => return None,
        };
        if !fresh {
            self.entries.remove(url);
            return None;
        }
        self.entries.get(url).map(|e| e.body.clone())
    }

    /// Stores a body, evicting the stalest entry when at capacity.
    pub fn insert(&mut self, url: impl Into<String>, body: impl Into<String>) {
        let url = url.into();
        if !self.entries.contains_key(&url) && self.entries.len() >= self.capacity {
            self.evict_stalest();
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(
            url,
            CacheEntry {
                inserted: Instant::now(),
                seq,
                body: body.into(),
            },
        );
    }

    /// Number of entries currently held, including any not yet expired-on-access.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_stalest(&mut self) {
        let stalest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| (entry.inserted, entry.seq))
            .map(|(url, _)| url.clone());
        if let Some(url) = stalest {
            self.entries.remove(&url);
        }
    }
}
