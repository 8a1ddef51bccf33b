//! Data records mirroring the service's JSON payloads.
//!
//! These are pass-through DTOs: snake_case field names map directly to
//! the documented JSON keys, timestamps stay in the service's string
//! form, and missing fields fall back to defaults so older Harbor
//! releases decode cleanly.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A project as returned by `api/projects`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub project_id: i64,
    #[serde(default)]
    pub owner_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub current_user_role_id: i64,
    #[serde(default)]
    pub repo_count: i64,
    #[serde(default)]
    pub chart_count: i64,
    #[serde(default)]
    pub metadata: Option<HashMap<String, String>>,
}

/// Body of project create and update calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectRequest {
    pub project_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_limit: Option<i64>,
}

impl ProjectRequest {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            ..Self::default()
        }
    }

    /// Marks the project public ("true") or private ("false") through
    /// the metadata map, the way the web console does.
    pub fn public(mut self, public: bool) -> Self {
        self.metadata
            .get_or_insert_with(HashMap::new)
            .insert("public".to_string(), public.to_string());
        self
    }
}

/// A repository record from `api/repositories`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub project_id: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pull_count: i64,
    #[serde(default)]
    pub star_count: i64,
    #[serde(default)]
    pub tags_count: i64,
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
}

/// A tag record from `api/repositories/{name}/tags`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub digest: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub created: Option<String>,
}

/// Composite result of `api/search`.
///
/// Repository entries are left as raw JSON maps: the service does not
/// document a stable schema for them and different releases disagree on
/// the fields present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, rename = "project")]
    pub projects: Vec<Project>,
    #[serde(default, rename = "repository")]
    pub repositories: Vec<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<Vec<serde_json::Value>>,
}
