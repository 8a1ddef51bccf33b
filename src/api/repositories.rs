//! Repository and tag calls.

use reqwest::Method;

use crate::client::HarborClient;
use crate::error::Result;
use crate::models::{Repository, Tag};

pub const REPOSITORIES_PATH: &str = "api/repositories";

pub struct RepositoryApi<'a> {
    pub(crate) client: &'a HarborClient,
}

impl RepositoryApi<'_> {
    /// List the repositories of one project.
    pub async fn list(&self, project_id: i64) -> Result<Vec<Repository>> {
        self.client.ensure_authenticated().await?;
        let mut url = self.client.endpoint(REPOSITORIES_PATH)?;
        url.query_pairs_mut()
            .append_pair("project_id", &project_id.to_string());
        let request = self.client.build_request(Method::GET, url);
        self.client.execute_json(request).await
    }

    /// Delete a repository. The name keeps its project prefix, e.g.
    /// `library/nginx`.
    pub async fn delete(&self, name: &str) -> Result<()> {
        self.client.ensure_authenticated().await?;
        let url = self
            .client
            .endpoint(&format!("{}/{}", REPOSITORIES_PATH, name))?;
        let request = self.client.build_request(Method::DELETE, url);
        self.client.execute(request).await?;
        Ok(())
    }

    /// Delete one tag of a repository.
    pub async fn delete_tag(&self, repo_name: &str, tag_name: &str) -> Result<()> {
        self.client.ensure_authenticated().await?;
        let url = self.client.endpoint(&format!(
            "{}/{}/tags/{}",
            REPOSITORIES_PATH, repo_name, tag_name
        ))?;
        let request = self.client.build_request(Method::DELETE, url);
        self.client.execute(request).await?;
        Ok(())
    }

    /// List the tags of a repository.
    pub async fn tags(&self, name: &str) -> Result<Vec<Tag>> {
        self.client.ensure_authenticated().await?;
        let url = self
            .client
            .endpoint(&format!("{}/{}/tags", REPOSITORIES_PATH, name))?;
        let request = self.client.build_request(Method::GET, url);
        self.client.execute_json(request).await
    }
}
