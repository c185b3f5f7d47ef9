//! Torrent detail page parser
//!
//! Unlike listing extraction there is no empty-result fallback here: an
//! absent document is an invalid-input error. Absent optional nodes inside
//! a present document are tolerated and yield empty fields.

use anyhow::Result;
use scraper::{Html, Selector};
use tracing::debug;

use super::category::map_category;
use super::error::{ParseError, ParseResult};
use crate::domain::{Privacy, TorrentDetails};

/// Parser for a single torrent's detail page.
pub struct TorrentDetailParser {
    description_selector: Selector,
    name_selector: Selector,
    category_selector: Selector,
    username_selector: Selector,
    verified_marker_selector: Selector,
}

impl TorrentDetailParser {
    /// Create a parser with the tracker's detail-page selectors compiled.
    ///
    /// Name, category label and owner name sit at fixed positions inside
    /// the first accordion sub-block; the description block carries the
    /// markup blob and the verified marker.
    pub fn new() -> Result<Self> {
        Ok(Self {
            description_selector: compile("div.block.description article")?,
            name_selector: compile(
                "div.accordion div:nth-of-type(1) table tr:nth-of-type(1) td",
            )?,
            category_selector: compile(
                "div.accordion div:nth-of-type(1) table tr:nth-of-type(3) td",
            )?,
            username_selector: compile(
                "div.accordion div:nth-of-type(1) table tr:nth-of-type(6) td",
            )?,
            verified_marker_selector: compile("div.block.description .torrent-status.verify")?,
        })
    }

    /// Parse a detail page into a [`TorrentDetails`] record.
    ///
    /// The identifier is left at 0 for the caller to fill. Owner id and
    /// privacy tier are not encoded in the document; they stay at their
    /// defaults (0 and [`Privacy::Normal`]) rather than being derived.
    pub fn parse_details(&self, page: Option<&str>) -> ParseResult<TorrentDetails> {
        let Some(page) = page else {
            return Err(ParseError::invalid_input("detail page"));
        };

        let document = Html::parse_document(page);

        let description = document
            .select(&self.description_selector)
            .next()
            .map(|e| e.inner_html())
            .unwrap_or_default();
        let name = self.first_text(&document, &self.name_selector);
        let category_name = self.first_text(&document, &self.category_selector);
        let username = self.first_text(&document, &self.username_selector);
        let category = map_category(&category_name);
        let is_verified = document
            .select(&self.verified_marker_selector)
            .next()
            .is_some();

        debug!("Extracted detail record for '{}'", name);

        Ok(TorrentDetails {
            id: 0,
            name,
            category,
            category_name,
            description,
            username,
            owner: 0,
            privacy: Privacy::Normal,
            is_verified,
        })
    }

    fn first_text(&self, document: &Html, selector: &Selector) -> String {
        document
            .select(selector)
            .next()
            .map(|e| e.text().collect::<String>().trim().to_string())
            .unwrap_or_default()
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| anyhow::anyhow!("invalid selector '{}': {}", selector, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_PAGE: &str = "<html><body>\
        <div class=\"accordion\"><div><table>\
        <tr><td>Le Grand Film</td></tr>\
        <tr><td>1.2 GB</td></tr>\
        <tr><td>Film</td></tr>\
        <tr><td>2016-02-06</td></tr>\
        <tr><td>12</td></tr>\
        <tr><td>uploader42</td></tr>\
        </table></div></div>\
        <div class=\"block description\">\
        <span class=\"torrent-status verify\"></span>\
        <article><p>Une <b>description</b></p></article>\
        </div>\
        </body></html>";

    #[test]
    fn parses_a_full_detail_page() {
        let parser = TorrentDetailParser::new().unwrap();

        let details = parser.parse_details(Some(DETAIL_PAGE)).unwrap();

        assert_eq!(details.id, 0);
        assert_eq!(details.name, "Le Grand Film");
        assert_eq!(details.category_name, "Film");
        assert_eq!(details.category, 631);
        assert_eq!(details.username, "uploader42");
        assert_eq!(details.description, "<p>Une <b>description</b></p>");
        assert!(details.is_verified);
        assert_eq!(details.owner, 0);
        assert_eq!(details.privacy, Privacy::Normal);
    }

    #[test]
    fn absent_optional_nodes_yield_empty_fields() {
        let parser = TorrentDetailParser::new().unwrap();

        let details = parser
            .parse_details(Some("<html><body><p>bare</p></body></html>"))
            .unwrap();

        assert_eq!(details.name, "");
        assert_eq!(details.category_name, "");
        assert_eq!(details.category, 0);
        assert_eq!(details.description, "");
        assert_eq!(details.username, "");
        assert!(!details.is_verified);
    }

    #[test]
    fn missing_document_is_an_invalid_input_error() {
        let parser = TorrentDetailParser::new().unwrap();

        let err = parser.parse_details(None).unwrap_err();

        assert!(matches!(err, ParseError::InvalidInput { .. }));
    }
}
