//! Query-string encoding for the two backend grammars
//!
//! The HTML site paginates with a page index; the JSON API paginates with
//! offset/limit and supports term filters. Both grammars are emitted from
//! one entry point, and parameter order is part of the contract: the
//! remote service is sensitive to it.

use thiserror::Error;

use crate::domain::{QueryOptions, SortColumn, SortOrder};

/// Named encoding strategy for one backend's accepted grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryProfile {
    /// Page-index style: `page=`, repeated `subcat=`, optional `type=`,
    /// mandatory `order=`.
    PageIndex,
    /// Offset/limit style: conditional `offset=`/`limit=`, repeated
    /// `cid=`, bracketed term tokens. No sort support.
    OffsetLimit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The page-index grammar always ends with an `order=` parameter, so a
    /// sort column is a caller precondition, not a recoverable state.
    #[error("the page-index profile requires a sort column")]
    MissingSortColumn,
}

/// Encode query options into the parameter string for the given profile.
pub fn encode_query(options: &QueryOptions, profile: QueryProfile) -> Result<String, QueryError> {
    match profile {
        QueryProfile::PageIndex => encode_page_index(options),
        QueryProfile::OffsetLimit => Ok(encode_offset_limit(options)),
    }
}

/// Replace literal spaces with `%20` for embedding free text in the path
/// portion of a search URL. Deliberately not full percent-encoding.
pub fn escape_query_text(text: &str) -> String {
    text.replace(' ', "%20")
}

fn encode_page_index(options: &QueryOptions) -> Result<String, QueryError> {
    let mut parameters = Vec::new();

    if options.limit > 0 {
        parameters.push(format!("page={}", options.offset / options.limit));
    }
    for category_id in &options.category_ids {
        parameters.push(format!("subcat={}", category_id));
    }
    match options.sort_direction {
        Some(SortOrder::Asc) => parameters.push("type=asc".to_string()),
        Some(SortOrder::Desc) => parameters.push("type=desc".to_string()),
        None => {}
    }

    let column = options.sort_column.ok_or(QueryError::MissingSortColumn)?;
    parameters.push(format!("order={}", sort_token(column)));

    Ok(parameters.join("&"))
}

fn encode_offset_limit(options: &QueryOptions) -> String {
    let mut parameters = Vec::new();

    if options.offset > 0 {
        parameters.push(format!("offset={}", options.offset));
    }
    if options.limit > 0 {
        parameters.push(format!("limit={}", options.limit));
    }
    for category_id in &options.category_ids {
        parameters.push(format!("cid={}", category_id));
    }
    for term in &options.terms {
        parameters.push(format!("[{}][]={}", term.term_type_id, term.id));
    }

    parameters.join("&")
}

fn sort_token(column: SortColumn) -> &'static str {
    match column {
        SortColumn::Category => "category",
        SortColumn::Name => "name",
        SortColumn::Comments => "comments",
        SortColumn::Added => "added",
        SortColumn::Size => "size",
        SortColumn::TimesCompleted => "times_completed",
        SortColumn::Seeders => "seeders",
        SortColumn::Leechers => "leechers",
    }
}
