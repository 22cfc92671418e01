use std::rc::Rc;

use gospel_model::prelude::*;
use url::Url;

use super::Backend;
use crate::error::{ApiError, ApiErrorForStatus};

/// Client for the hymn endpoints.
pub struct HymnService {
    backend: Rc<Backend>,
    client: reqwest::Client,
}

impl HymnService {
    pub fn new(backend: Rc<Backend>) -> Self {
        Self {
            backend,
            client: reqwest::Client::new(),
        }
    }

    /// One page of search results for a keyword.
    pub async fn pagination(
        &self,
        page_num: usize,
        keyword: &str,
    ) -> Result<Pagination<HymnSummary>, ApiError> {
        let response = self
            .client
            .get(self.pagination_url(page_num, keyword)?)
            .send()
            .await?;

        Ok(response.api_error_for_status().await?.json().await?)
    }

    /// An unpaginated, random selection of hymns for a keyword.
    pub async fn random_retrieve(&self, keyword: &str) -> Result<Vec<HymnSummary>, ApiError> {
        let response = self
            .client
            .get(self.random_retrieve_url(keyword)?)
            .send()
            .await?;

        Ok(response.api_error_for_status().await?.json().await?)
    }

    /// Where the score of a hymn can be fetched from.
    pub fn score_download_url(&self, id: i64) -> Result<Url, ApiError> {
        Ok(self
            .backend
            .join(&format!("/hymns/score-download?scoreId={id}"))?)
    }

    fn pagination_url(&self, page_num: usize, keyword: &str) -> Result<Url, ApiError> {
        Ok(self.backend.join(&format!(
            "/hymns/pagination?pageNum={page_num}&keyword={keyword}",
            keyword = urlencoding::encode(keyword)
        ))?)
    }

    fn random_retrieve_url(&self, keyword: &str) -> Result<Url, ApiError> {
        Ok(self.backend.join(&format!(
            "/hymns/random-retrieve?keyword={keyword}",
            keyword = urlencoding::encode(keyword)
        ))?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn service() -> HymnService {
        HymnService::new(Rc::new(Backend {
            url: Url::parse("https://hymns.example.com").unwrap(),
        }))
    }

    #[test]
    fn pagination_url() {
        let url = service().pagination_url(1, "abc").unwrap();
        assert_eq!(
            url.as_str(),
            "https://hymns.example.com/hymns/pagination?pageNum=1&keyword=abc"
        );
    }

    #[test]
    fn pagination_url_encodes_keyword() {
        let url = service().pagination_url(1, "主の 祈り&x").unwrap();
        assert_eq!(
            url.as_str(),
            "https://hymns.example.com/hymns/pagination?pageNum=1&keyword=%E4%B8%BB%E3%81%AE%20%E7%A5%88%E3%82%8A%26x"
        );
    }

    #[test]
    fn random_retrieve_url() {
        let url = service().random_retrieve_url("찬송").unwrap();
        assert_eq!(
            url.as_str(),
            "https://hymns.example.com/hymns/random-retrieve?keyword=%EC%B0%AC%EC%86%A1"
        );
    }

    #[test]
    fn score_download_url() {
        let url = service().score_download_url(42).unwrap();
        assert_eq!(
            url.as_str(),
            "https://hymns.example.com/hymns/score-download?scoreId=42"
        );
    }
}
