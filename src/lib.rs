//! T411 tracker scraping client core
//!
//! This crate turns the tracker's semi-structured HTML pages into typed
//! records (listing rows and torrent detail pages), encodes search intent
//! into the query-string grammars the site accepts, and repairs a known
//! malformation in raw search payloads before deserialization.
//!
//! Network transport and session handling live behind the narrow
//! [`fetch::TextFetcher`] seam; the extraction and encoding layers are
//! synchronous, hold no shared mutable state, and are safe to call
//! concurrently on independent inputs.

// Module declarations
pub mod client;
pub mod domain;
pub mod fetch;
pub mod parsing;
pub mod query;
pub mod sanitize;

// Re-export the main entry points for easier access
pub use client::{ClientError, T411Client};
pub use domain::{QueryOptions, QueryResult, SortColumn, SortOrder, Torrent, TorrentDetails};
pub use parsing::{ParseError, TorrentDetailParser, TorrentListParser};
pub use query::{QueryError, QueryProfile, encode_query, escape_query_text};
pub use sanitize::sanitize_payload;
