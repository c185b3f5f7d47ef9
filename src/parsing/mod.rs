//! HTML parsing infrastructure for the tracker's pages
//!
//! Selector-driven parsers in the style of a document pipeline: selectors
//! are compiled once per parser instance, listing extraction isolates
//! faults per row, and detail extraction tolerates absent optional nodes.

pub mod category;
pub mod detail_parser;
pub mod error;
pub mod list_parser;
pub mod size;

// Re-export public types
pub use category::map_category;
pub use detail_parser::TorrentDetailParser;
pub use error::{ParseError, ParseResult};
pub use list_parser::TorrentListParser;
pub use size::parse_size;
