//! Per-resource API facades.
//!
//! Each facade borrows the client and maps one domain concept onto a
//! small set of REST calls. Every operation runs the authentication
//! probe first; a probe failure is surfaced immediately and the primary
//! request is never issued.

pub mod projects;
pub mod repositories;
pub mod search;

pub use projects::ProjectApi;
pub use repositories::RepositoryApi;
pub use search::SearchApi;

use crate::client::HarborClient;

impl HarborClient {
    pub fn projects(&self) -> ProjectApi<'_> {
        ProjectApi { client: self }
    }

    pub fn repositories(&self) -> RepositoryApi<'_> {
        RepositoryApi { client: self }
    }

    pub fn search(&self) -> SearchApi<'_> {
        SearchApi { client: self }
    }
}
