// ABOUTME: HTTP fetching of a document's HTML export.
// ABOUTME: Validates the URL, caps body size, and decodes the body charset.

use std::collections::HashMap;

use bytes::Bytes;

use crate::error::FetchError;

/// Maximum allowed export body size (10 MB).
pub const MAX_BODY_LENGTH: usize = 10 * 1024 * 1024;

/// Per-request options for fetching an export.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub headers: HashMap<String, String>,
}

/// A fetched export body with its advertised content type.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    /// Decode the body to text, using charset hints from the content-type header.
    pub fn text(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

/// Fetches an export document from the given URL.
///
/// Only http/https URLs are accepted. Bodies larger than
/// [`MAX_BODY_LENGTH`] and non-success statuses are errors.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    opts: &FetchOptions,
) -> Result<FetchResult, FetchError> {
    if url.is_empty() {
        return Err(FetchError::invalid_url("empty URL"));
    }

    let parsed = url::Url::parse(url)
        .map_err(|e| FetchError::invalid_url(format!("{}: {}", url, e)))?;
    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(FetchError::invalid_url(format!(
            "scheme must be http or https, got {}",
            scheme
        )));
    }

    let mut request = client.get(url);
    for (key, value) in &opts.headers {
        request = request.header(key, value);
    }

    let response = request.send().await?;

    if let Some(len) = response.content_length() {
        if len as usize > MAX_BODY_LENGTH {
            return Err(FetchError::TooLarge(len as usize));
        }
    }

    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    let body = response.bytes().await?;
    if body.len() > MAX_BODY_LENGTH {
        return Err(FetchError::TooLarge(body.len()));
    }

    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }

    Ok(FetchResult {
        url: url.to_string(),
        status,
        content_type,
        body,
    })
}

/// Decode body bytes to a String using the header charset or detection.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract the charset value from a Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}
