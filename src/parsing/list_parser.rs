//! Torrent listing page parser
//!
//! Extracts one [`Torrent`] per result row with per-row fault isolation:
//! a malformed row is logged and skipped, the rest of the page still
//! parses, and row order is preserved.

use anyhow::Result;
use chrono::NaiveDateTime;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::error::{ParseError, ParseResult};
use super::size::parse_size;
use crate::domain::Torrent;

const CATEGORY_HREF_PREFIX: &str = "/torrents/search/?subcat=";
const NFO_HREF_PREFIX: &str = "/torrents/nfo/?id=";
const UTC_OFFSET_SUFFIX: &str = " (+00:00)";
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parser for torrent listing pages (search results and top lists).
pub struct TorrentListParser {
    row_selector: Selector,
    category_link_selector: Selector,
    title_link_selector: Selector,
    verified_marker_selector: Selector,
    nfo_link_selector: Selector,
    comments_cell_selector: Selector,
    size_cell_selector: Selector,
    completed_cell_selector: Selector,
    seeders_cell_selector: Selector,
    leechers_cell_selector: Selector,
    date_cell_selector: Selector,
}

impl TorrentListParser {
    /// Create a parser with the tracker's listing selectors compiled.
    pub fn new() -> Result<Self> {
        Ok(Self {
            row_selector: compile("div.content div.block table.results tbody tr")?,
            category_link_selector: compile("td:nth-of-type(1) > a")?,
            title_link_selector: compile("td:nth-of-type(2) > a:nth-of-type(1)")?,
            verified_marker_selector: compile("td:nth-child(2) > a:nth-child(1) > span.up")?,
            nfo_link_selector: compile("td:nth-of-type(3) > a.nfo")?,
            comments_cell_selector: compile("td:nth-of-type(4)")?,
            size_cell_selector: compile("td:nth-of-type(6)")?,
            completed_cell_selector: compile("td:nth-of-type(7)")?,
            seeders_cell_selector: compile("td:nth-of-type(8)")?,
            leechers_cell_selector: compile("td:nth-of-type(9)")?,
            date_cell_selector: compile("td:nth-of-type(2) > dl dd:nth-of-type(1)")?,
        })
    }

    /// Parse a listing page into the rows that extracted cleanly.
    ///
    /// `None` and empty input yield an empty list. Row-level failures never
    /// cross the batch boundary: the row is dropped and logged, extraction
    /// continues with the next one.
    pub fn parse_listing(&self, page: Option<&str>) -> ParseResult<Vec<Torrent>> {
        let Some(page) = page else {
            return Ok(Vec::new());
        };
        if page.trim().is_empty() {
            return Ok(Vec::new());
        }

        let document = Html::parse_document(page);
        let row_count = document.select(&self.row_selector).count();
        let mut torrents = Vec::with_capacity(row_count);

        for index in 0..row_count {
            // Re-resolve the row from the document for each extraction
            // instead of holding handles across iterations.
            let Some(row) = document.select(&self.row_selector).nth(index) else {
                break;
            };

            match self.extract_torrent(&row) {
                Ok(torrent) => torrents.push(torrent),
                Err(e) => {
                    warn!("Skipping listing row {}: {}", index, e);
                }
            }
        }

        debug!("Extracted {} of {} listing rows", torrents.len(), row_count);
        Ok(torrents)
    }

    fn extract_torrent(&self, row: &ElementRef) -> ParseResult<Torrent> {
        let category = self.extract_category_id(row)?;
        let (name, is_verified) = self.extract_title(row)?;
        let id = self.extract_torrent_id(row)?;
        let size = parse_size(self.cell_text(row, &self.size_cell_selector).as_deref())?;
        let comments = self.extract_count(row, &self.comments_cell_selector, "comments")?;
        let times_completed =
            self.extract_count(row, &self.completed_cell_selector, "times_completed")?;
        let seeders = self.extract_count(row, &self.seeders_cell_selector, "seeders")?;
        let leechers = self.extract_count(row, &self.leechers_cell_selector, "leechers")?;
        let added = self.extract_added(row)?;

        Ok(Torrent {
            id,
            name,
            category,
            size,
            added,
            times_completed,
            seeders,
            leechers,
            comments,
            is_verified,
        })
    }

    /// Column 1 links to the category search; the id is the href remainder.
    fn extract_category_id(&self, row: &ElementRef) -> ParseResult<i64> {
        let link = row
            .select(&self.category_link_selector)
            .next()
            .ok_or_else(|| ParseError::row_field("category", "category link not found"))?;
        let href = link
            .value()
            .attr("href")
            .ok_or_else(|| ParseError::row_field("category", "category link has no href"))?;
        let raw = href.strip_prefix(CATEGORY_HREF_PREFIX).ok_or_else(|| {
            ParseError::row_field("category", format!("unexpected category href '{}'", href))
        })?;

        raw.parse()
            .map_err(|_| ParseError::invalid_number("category", raw))
    }

    /// Display name prefers the link's title attribute over its text; the
    /// nested "up" marker node sets the verified flag.
    fn extract_title(&self, row: &ElementRef) -> ParseResult<(String, i64)> {
        let link = row
            .select(&self.title_link_selector)
            .next()
            .ok_or_else(|| ParseError::row_field("name", "title link not found"))?;

        let name = match link.value().attr("title") {
            Some(title) => title.trim().to_string(),
            None => link.text().collect::<String>().trim().to_string(),
        };
        let is_verified = i64::from(row.select(&self.verified_marker_selector).next().is_some());

        Ok((name, is_verified))
    }

    /// The nfo link is optional; its absence is a valid state (id 0), but a
    /// present link with an unexpected href is a row error.
    fn extract_torrent_id(&self, row: &ElementRef) -> ParseResult<i64> {
        let Some(link) = row.select(&self.nfo_link_selector).next() else {
            return Ok(0);
        };
        let href = link.value().attr("href").unwrap_or_default();
        if href.is_empty() {
            return Ok(0);
        }

        let raw = href.strip_prefix(NFO_HREF_PREFIX).ok_or_else(|| {
            ParseError::row_field("id", format!("unexpected nfo href '{}'", href))
        })?;

        raw.parse().map_err(|_| ParseError::invalid_number("id", raw))
    }

    fn extract_count(&self, row: &ElementRef, selector: &Selector, field: &str) -> ParseResult<i64> {
        let text = self
            .cell_text(row, selector)
            .ok_or_else(|| ParseError::row_field(field, "cell not found"))?;

        text.parse()
            .map_err(|_| ParseError::invalid_number(field, &text))
    }

    /// Timestamps are UTC-normalized upstream; the offset marker is
    /// stripped, not converted.
    fn extract_added(&self, row: &ElementRef) -> ParseResult<NaiveDateTime> {
        let text = self
            .cell_text(row, &self.date_cell_selector)
            .ok_or_else(|| ParseError::row_field("added", "date cell not found"))?;
        let cleaned = text.replace(UTC_OFFSET_SUFFIX, "");
        let cleaned = cleaned.trim();

        NaiveDateTime::parse_from_str(cleaned, DATE_FORMAT)
            .map_err(|_| ParseError::invalid_date(cleaned))
    }

    fn cell_text(&self, row: &ElementRef, selector: &Selector) -> Option<String> {
        row.select(selector)
            .next()
            .map(|e| e.text().collect::<String>().trim().to_string())
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| anyhow::anyhow!("invalid selector '{}': {}", selector, e))
}
