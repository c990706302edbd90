//! Local repository DTOs

use serde::{Deserialize, Serialize};

use super::{ConfirmedRepository, RepositoryDefinition, default_includes_pattern, default_repo_layout_ref, default_true};
use crate::domain::class::{
    LocalChecksumPolicy, PackageType, RepositoryClass, SnapshotVersionBehavior,
};

/// Definition of a local (hosted) repository
///
/// Only `key` is required on the wire; every other field falls back to the
/// server's default when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalRepository {
    /// Unique repository key
    pub key: String,

    /// Always `local` for this definition
    #[serde(default = "local_class")]
    pub rclass: RepositoryClass,

    #[serde(default)]
    pub package_type: PackageType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Free-form internal notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Ant-style pattern of paths accepted by the repository
    #[serde(default = "default_includes_pattern")]
    pub includes_pattern: String,

    /// Ant-style pattern of paths rejected by the repository
    #[serde(default)]
    pub excludes_pattern: String,

    /// Name of the layout used to parse artifact paths
    #[serde(default = "default_repo_layout_ref")]
    pub repo_layout_ref: String,

    #[serde(default)]
    pub checksum_policy_type: LocalChecksumPolicy,

    #[serde(default = "default_true")]
    pub handle_releases: bool,

    #[serde(default = "default_true")]
    pub handle_snapshots: bool,

    /// Number of unique snapshots to keep, 0 keeps all of them
    #[serde(default)]
    pub max_unique_snapshots: u32,

    /// Number of unique tags to keep, 0 keeps all of them
    #[serde(default)]
    pub max_unique_tags: u32,

    #[serde(default)]
    pub snapshot_version_behavior: SnapshotVersionBehavior,

    #[serde(default)]
    pub suppress_pom_consistency_checks: bool,

    /// When set, artifacts can neither be resolved nor deployed
    #[serde(default)]
    pub blacked_out: bool,

    #[serde(default)]
    pub xray_index: bool,

    #[serde(default)]
    pub property_sets: Vec<String>,

    #[serde(default)]
    pub archive_browsing_enabled: bool,

    #[serde(default)]
    pub download_redirect: bool,
}

fn local_class() -> RepositoryClass {
    RepositoryClass::Local
}

impl LocalRepository {
    /// Create a definition with default settings for the given key
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            rclass: RepositoryClass::Local,
            package_type: PackageType::default(),
            description: None,
            notes: None,
            includes_pattern: default_includes_pattern(),
            excludes_pattern: String::new(),
            repo_layout_ref: default_repo_layout_ref(),
            checksum_policy_type: LocalChecksumPolicy::default(),
            handle_releases: true,
            handle_snapshots: true,
            max_unique_snapshots: 0,
            max_unique_tags: 0,
            snapshot_version_behavior: SnapshotVersionBehavior::default(),
            suppress_pom_consistency_checks: false,
            blacked_out: false,
            xray_index: false,
            property_sets: Vec::new(),
            archive_browsing_enabled: false,
            download_redirect: false,
        }
    }

    pub fn with_package_type(mut self, package_type: PackageType) -> Self {
        self.package_type = package_type;
        self
    }
}

impl RepositoryDefinition for LocalRepository {
    const CLASS: RepositoryClass = RepositoryClass::Local;
    type Response = LocalRepositoryResponse;

    fn key(&self) -> &str {
        &self.key
    }
}

/// Local repository configuration as confirmed by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalRepositoryResponse {
    #[serde(flatten)]
    pub repository: LocalRepository,

    #[serde(default)]
    pub enable_docker_support: bool,

    #[serde(default)]
    pub enable_npm_support: bool,

    #[serde(default)]
    pub enable_pypi_support: bool,

    #[serde(default)]
    pub enable_debian_support: bool,
}

impl ConfirmedRepository for LocalRepositoryResponse {
    fn key(&self) -> &str {
        &self.repository.key
    }

    fn class(&self) -> RepositoryClass {
        self.repository.rclass
    }
}

impl From<LocalRepository> for LocalRepositoryResponse {
    fn from(repository: LocalRepository) -> Self {
        Self {
            repository,
            enable_docker_support: false,
            enable_npm_support: false,
            enable_pypi_support: false,
            enable_debian_support: false,
        }
    }
}
