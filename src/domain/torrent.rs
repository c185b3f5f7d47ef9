//! Torrent records extracted from listing and detail pages

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One row of a torrent listing page.
///
/// `added` is UTC-normalized at the source; the page strips the offset
/// marker rather than converting, so no timezone is attached here.
/// `is_verified` keeps the wire format's 0/1 encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Torrent {
    /// Torrent identifier; 0 when the row carries no nfo link.
    pub id: i64,
    pub name: String,
    pub category: i64,
    /// Size in bytes, never negative; 0 for a missing size cell.
    pub size: i64,
    pub added: NaiveDateTime,
    pub times_completed: i64,
    pub seeders: i64,
    pub leechers: i64,
    pub comments: i64,
    pub is_verified: i64,
}

/// Privacy tier of a torrent. Detail pages do not encode this, so
/// extraction always yields the default tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Privacy {
    Low,
    #[default]
    Normal,
    Strong,
}

/// Rich record parsed from a single torrent detail page.
///
/// `id` is filled by the caller, not by parsing. `owner` is always 0 and
/// `privacy` is always [`Privacy::Normal`]: the detail document simply
/// does not carry that information.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TorrentDetails {
    pub id: i64,
    pub name: String,
    pub category: i64,
    pub category_name: String,
    /// Raw inner markup of the description block.
    pub description: String,
    pub username: String,
    pub owner: i64,
    pub privacy: Privacy,
    pub is_verified: bool,
}

/// One page of search results, echoing the originating query intent.
///
/// `total` is the upstream heuristic `limit * 20`, a documented
/// approximation rather than a true count.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryResult {
    pub query: String,
    pub offset: u32,
    pub limit: u32,
    pub total: u32,
    pub torrents: Vec<Torrent>,
}
