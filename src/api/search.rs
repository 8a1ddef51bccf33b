//! Cross-entity search.

use reqwest::Method;

use crate::client::HarborClient;
use crate::error::Result;
use crate::models::SearchResult;

pub const SEARCH_PATH: &str = "api/search";

pub struct SearchApi<'a> {
    pub(crate) client: &'a HarborClient,
}

impl SearchApi<'_> {
    /// Search projects, repositories and charts in one call.
    pub async fn query(&self, q: &str) -> Result<SearchResult> {
        self.client.ensure_authenticated().await?;
        let mut url = self.client.endpoint(SEARCH_PATH)?;
        url.query_pairs_mut().append_pair("q", q);
        let request = self.client.build_request(Method::GET, url);
        self.client.execute_json(request).await
    }
}
