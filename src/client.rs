//! Client orchestration: fetch a page, parse it, shape the result
//!
//! Composes the transport seam with the parsers. Callers needing
//! concurrency (for instance several result pages at once) parallelize at
//! their own layer; every call here is one fetch and one parse.

use anyhow::Result;
use tracing::debug;

use crate::domain::{QueryOptions, QueryResult, SortColumn, Torrent, TorrentDetails};
use crate::fetch::{FetchError, TextFetcher};
use crate::parsing::{ParseError, TorrentDetailParser, TorrentListParser};
use crate::query::{QueryError, QueryProfile, encode_query, escape_query_text};

const DEFAULT_SEARCH_LIMIT: u32 = 50;

/// Number of result pages the site is assumed to hold per search; the
/// total in a [`QueryResult`] is `limit` times this factor, a documented
/// approximation rather than a true count.
const TOTAL_ESTIMATE_FACTOR: u32 = 20;

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Scraping client for the tracker's HTML pages.
pub struct T411Client<F> {
    fetcher: F,
    list_parser: TorrentListParser,
    detail_parser: TorrentDetailParser,
}

impl<F: TextFetcher> T411Client<F> {
    pub fn new(fetcher: F) -> Result<Self> {
        Ok(Self {
            fetcher,
            list_parser: TorrentListParser::new()?,
            detail_parser: TorrentDetailParser::new()?,
        })
    }

    pub async fn get_top_100(&self) -> Result<Vec<Torrent>, ClientError> {
        self.get_top("/top/100/").await
    }

    pub async fn get_top_today(&self) -> Result<Vec<Torrent>, ClientError> {
        self.get_top("/top/today/").await
    }

    pub async fn get_top_week(&self) -> Result<Vec<Torrent>, ClientError> {
        self.get_top("/top/week/").await
    }

    pub async fn get_top_month(&self) -> Result<Vec<Torrent>, ClientError> {
        self.get_top("/top/month/").await
    }

    async fn get_top(&self, path: &str) -> Result<Vec<Torrent>, ClientError> {
        let page = self.fetcher.fetch_text(path).await?;
        Ok(self.list_parser.parse_listing(Some(&page))?)
    }

    /// Fetch and parse one torrent's detail page. The detail document does
    /// not repeat the identifier, so it is filled in here.
    pub async fn get_torrent_details(&self, id: i64) -> Result<TorrentDetails, ClientError> {
        let path = format!("/torrents/?id={}", id);
        let page = self.fetcher.fetch_text(&path).await?;
        let mut details = self.detail_parser.parse_details(Some(&page))?;
        details.id = id;
        Ok(details)
    }

    /// Search with default options: first page of 50, sorted by date added.
    pub async fn search(&self, query: &str) -> Result<QueryResult, ClientError> {
        let options = QueryOptions {
            offset: 0,
            limit: DEFAULT_SEARCH_LIMIT,
            sort_column: Some(SortColumn::Added),
            ..Default::default()
        };
        self.search_with_options(query, &options).await
    }

    /// Search the HTML site with explicit options (page-index grammar).
    pub async fn search_with_options(
        &self,
        query: &str,
        options: &QueryOptions,
    ) -> Result<QueryResult, ClientError> {
        let parameters = encode_query(options, QueryProfile::PageIndex)?;
        let path = format!(
            "/torrents/search/?search={}&{}",
            escape_query_text(query),
            parameters
        );
        debug!("Searching via {}", path);

        let page = self.fetcher.fetch_text(&path).await?;
        let torrents = self.list_parser.parse_listing(Some(&page))?;

        Ok(QueryResult {
            query: query.to_string(),
            offset: options.offset,
            limit: options.limit,
            total: options.limit * TOTAL_ESTIMATE_FACTOR,
            torrents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortOrder;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Stub fetcher returning one canned page and recording requested paths.
    struct StubFetcher {
        page: String,
        requests: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        fn new(page: &str) -> Self {
            Self {
                page: page.to_string(),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requested_paths(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextFetcher for StubFetcher {
        async fn fetch_text(&self, relative_path: &str) -> Result<String, FetchError> {
            self.requests.lock().unwrap().push(relative_path.to_string());
            Ok(self.page.clone())
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl TextFetcher for FailingFetcher {
        async fn fetch_text(&self, _relative_path: &str) -> Result<String, FetchError> {
            Err(FetchError::upstream("connection reset"))
        }
    }

    const LISTING_PAGE: &str = "<html><body><div class=\"content\"><div class=\"block\">\
        <table class=\"results\"><tbody>\
        <tr>\
        <td><a href=\"/torrents/search/?subcat=433\">cat</a></td>\
        <td><a href=\"/torrents/x\" title=\"Une Série\"><span class=\"up\"></span>Une Série</a>\
        <dl><dd>2016-02-06 21:32:13 (+00:00)</dd></dl></td>\
        <td><a class=\"nfo\" href=\"/torrents/nfo/?id=77\">nfo</a></td>\
        <td>1</td><td>dl</td><td>350 MB</td><td>10</td><td>5</td><td>2</td>\
        </tr>\
        </tbody></table></div></div></body></html>";

    const DETAIL_PAGE: &str = "<html><body>\
        <div class=\"accordion\"><div><table>\
        <tr><td>Une Série</td></tr><tr><td></td></tr>\
        <tr><td>Série TV</td></tr><tr><td></td></tr><tr><td></td></tr>\
        <tr><td>uploader42</td></tr>\
        </table></div></div>\
        <div class=\"block description\"><article>desc</article></div>\
        </body></html>";

    #[tokio::test]
    async fn search_builds_path_and_echoes_query_intent() {
        let fetcher = StubFetcher::new(LISTING_PAGE);
        let client = T411Client::new(fetcher).unwrap();
        let options = QueryOptions {
            offset: 40,
            limit: 20,
            category_ids: vec![433],
            sort_column: Some(SortColumn::Added),
            sort_direction: Some(SortOrder::Desc),
            ..Default::default()
        };

        let result = client
            .search_with_options("une série", &options)
            .await
            .unwrap();

        assert_eq!(result.query, "une série");
        assert_eq!(result.offset, 40);
        assert_eq!(result.limit, 20);
        assert_eq!(result.total, 400);
        assert_eq!(result.torrents.len(), 1);
        assert_eq!(result.torrents[0].id, 77);
        assert_eq!(
            client.fetcher.requested_paths(),
            vec![
                "/torrents/search/?search=une%20série&page=2&subcat=433&type=desc&order=added"
                    .to_string()
            ]
        );
    }

    #[tokio::test]
    async fn search_without_sort_column_is_a_configuration_error() {
        let fetcher = StubFetcher::new(LISTING_PAGE);
        let client = T411Client::new(fetcher).unwrap();
        let options = QueryOptions {
            limit: 20,
            ..Default::default()
        };

        let err = client
            .search_with_options("x", &options)
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Query(QueryError::MissingSortColumn)));
    }

    #[tokio::test]
    async fn default_search_asks_for_the_first_page_sorted_by_added() {
        let fetcher = StubFetcher::new(LISTING_PAGE);
        let client = T411Client::new(fetcher).unwrap();

        let result = client.search("une série").await.unwrap();

        assert_eq!(result.limit, 50);
        assert_eq!(result.offset, 0);
        assert_eq!(result.total, 1000);
        assert_eq!(
            client.fetcher.requested_paths(),
            vec!["/torrents/search/?search=une%20série&page=0&order=added".to_string()]
        );
    }

    #[tokio::test]
    async fn details_carry_the_caller_supplied_id() {
        let fetcher = StubFetcher::new(DETAIL_PAGE);
        let client = T411Client::new(fetcher).unwrap();

        let details = client.get_torrent_details(4242).await.unwrap();

        assert_eq!(details.id, 4242);
        assert_eq!(details.category, 433);
        assert_eq!(client.fetcher.requested_paths(), vec!["/torrents/?id=4242"]);
    }

    #[tokio::test]
    async fn top_lists_hit_their_fixed_paths() {
        let fetcher = StubFetcher::new(LISTING_PAGE);
        let client = T411Client::new(fetcher).unwrap();

        client.get_top_100().await.unwrap();
        client.get_top_today().await.unwrap();
        client.get_top_week().await.unwrap();
        client.get_top_month().await.unwrap();

        assert_eq!(
            client.fetcher.requested_paths(),
            vec!["/top/100/", "/top/today/", "/top/week/", "/top/month/"]
        );
    }

    #[tokio::test]
    async fn fetch_failures_surface_as_client_errors() {
        let client = T411Client::new(FailingFetcher).unwrap();

        let err = client.get_top_today().await.unwrap_err();

        assert!(matches!(err, ClientError::Fetch(FetchError::Upstream { .. })));
    }
}
