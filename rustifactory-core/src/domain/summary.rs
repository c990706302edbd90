//! Repository summaries
//!
//! The list endpoint returns a short record per repository instead of the
//! full configuration.

use serde::{Deserialize, Serialize};

use super::class::RepositoryClass;

/// Summary of a repository as returned by `GET /api/repositories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleRepository {
    /// Unique repository key
    pub key: String,

    /// Repository class
    #[serde(rename = "type")]
    pub repo_type: RepositoryClass,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Browsable URL of the repository
    pub url: String,

    /// Package format, as reported by the server (e.g. "Docker", "maven")
    pub package_type: String,
}
