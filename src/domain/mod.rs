//! Domain module - torrent records and search query values
//!
//! Value objects only: every record is constructed fresh per extraction
//! call and carries no identity beyond field equality.

pub mod query;
pub mod torrent;

// Re-export commonly used items
pub use query::{QueryOptions, SortColumn, SortOrder, Term};
pub use torrent::{Privacy, QueryResult, Torrent, TorrentDetails};
