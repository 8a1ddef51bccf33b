//! Harbor Client Library
//!
//! This file serves as the library root for the harbor-client crate,
//! organizing and exposing the modules that make up the client: the
//! transport core, the cookie-based session manager, the typed data
//! models and the per-resource API facades.

pub mod api;
pub mod client;
pub mod error;
pub mod models;
pub mod session;

pub use api::{ProjectApi, RepositoryApi, SearchApi};
pub use client::{Credentials, HarborClient, HarborClientBuilder};
pub use error::{Error, Result};
pub use models::{Project, ProjectRequest, Repository, SearchResult, Tag};
pub use session::SessionState;
