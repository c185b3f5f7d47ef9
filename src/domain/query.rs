//! Search query intent: pagination, filters and sort

use serde::{Deserialize, Serialize};

/// Column a search can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortColumn {
    Category,
    Name,
    Comments,
    Added,
    Size,
    TimesCompleted,
    Seeders,
    Leechers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// One term filter: a term-type id paired with the selected term id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub term_type_id: u32,
    pub id: u32,
}

/// Client-side search intent, encoded for the remote service by
/// [`crate::query::encode_query`].
///
/// `category_ids` preserves input order and allows duplicates; both carry
/// through to the encoded parameter sequence unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryOptions {
    pub offset: u32,
    pub limit: u32,
    pub category_ids: Vec<u32>,
    pub terms: Vec<Term>,
    pub sort_column: Option<SortColumn>,
    pub sort_direction: Option<SortOrder>,
}
