// ABOUTME: Async client for fetching a document's HTML export and parsing it into sections.
// ABOUTME: Re-exports Client, ClientBuilder, Options, DocCache, and FetchError.

//! Fetch layer for the docpage section parser.
//!
//! The parser itself is pure; this crate owns the one suspension point
//! in a page render: fetching the remote document's "export as HTML"
//! endpoint. A failed fetch yields `None` from [`Client::page_sections`]
//! rather than an error, so templates fall back to their empty state.
//!
//! # Example
//!
//! ```no_run
//! use docpage_client::Client;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::builder().build();
//!     match client.page_sections("https://docs.example.com/export?format=html").await {
//!         Some(sections) => println!("{} sections", sections.len()),
//!         None => println!("render fallback"),
//!     }
//! }
//! ```

pub mod cache;
pub mod client;
pub mod error;
pub mod fetch;
pub mod options;

pub use crate::cache::DocCache;
pub use crate::client::Client;
pub use crate::error::FetchError;
pub use crate::options::{ClientBuilder, Options};
