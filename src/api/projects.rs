//! Project management calls.

use reqwest::Method;

use crate::client::HarborClient;
use crate::error::Result;
use crate::models::{Project, ProjectRequest};

pub const PROJECTS_PATH: &str = "api/projects";

pub struct ProjectApi<'a> {
    pub(crate) client: &'a HarborClient,
}

impl ProjectApi<'_> {
    /// Create a new project.
    pub async fn create(&self, project: &ProjectRequest) -> Result<()> {
        self.client.ensure_authenticated().await?;
        let url = self.client.endpoint(PROJECTS_PATH)?;
        let request = self.client.build_json_request(Method::POST, url, project)?;
        self.client.execute(request).await?;
        Ok(())
    }

    /// Check whether a project name is already taken.
    ///
    /// HEAD request; the service answers 200 when the name exists and
    /// 404 otherwise, so "not taken" arrives as an [`Error::Status`]
    /// for which [`Error::is_not_found`] is true.
    ///
    /// [`Error::Status`]: crate::Error::Status
    /// [`Error::is_not_found`]: crate::Error::is_not_found
    pub async fn check_name_exists(&self, name: &str) -> Result<()> {
        self.client.ensure_authenticated().await?;
        let mut url = self.client.endpoint(PROJECTS_PATH)?;
        url.query_pairs_mut().append_pair("project_name", name);
        let request = self.client.build_request(Method::HEAD, url);
        self.client.execute(request).await?;
        Ok(())
    }

    /// Fetch one project by id.
    pub async fn get(&self, id: i64) -> Result<Project> {
        self.client.ensure_authenticated().await?;
        let url = self.client.endpoint(&format!("{}/{}", PROJECTS_PATH, id))?;
        let request = self.client.build_request(Method::GET, url);
        self.client.execute_json(request).await
    }

    /// Update a project by id.
    pub async fn update(&self, id: i64, project: &ProjectRequest) -> Result<()> {
        self.client.ensure_authenticated().await?;
        let url = self.client.endpoint(&format!("{}/{}", PROJECTS_PATH, id))?;
        let request = self.client.build_json_request(Method::PUT, url, project)?;
        self.client.execute(request).await?;
        Ok(())
    }

    /// Delete a project by id.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.ensure_authenticated().await?;
        let url = self.client.endpoint(&format!("{}/{}", PROJECTS_PATH, id))?;
        let request = self.client.build_request(Method::DELETE, url);
        self.client.execute(request).await?;
        Ok(())
    }

    /// List projects whose name matches the filter.
    pub async fn list(&self, name: &str) -> Result<Vec<Project>> {
        self.client.ensure_authenticated().await?;
        let mut url = self.client.endpoint(PROJECTS_PATH)?;
        url.query_pairs_mut().append_pair("name", name);
        let request = self.client.build_request(Method::GET, url);
        self.client.execute_json(request).await
    }
}
