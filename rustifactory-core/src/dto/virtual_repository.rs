//! Virtual repository DTOs

use serde::{Deserialize, Serialize};

use super::{ConfirmedRepository, RepositoryDefinition, default_includes_pattern, default_repo_layout_ref};
use crate::domain::class::{PackageType, PomCleanupPolicy, RepositoryClass};

/// Definition of a virtual repository aggregating other repositories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualRepository {
    /// Unique repository key
    pub key: String,

    /// Always `virtual` for this definition
    #[serde(default = "virtual_class")]
    pub rclass: RepositoryClass,

    #[serde(default)]
    pub package_type: PackageType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default = "default_includes_pattern")]
    pub includes_pattern: String,

    #[serde(default)]
    pub excludes_pattern: String,

    #[serde(default = "default_repo_layout_ref")]
    pub repo_layout_ref: String,

    /// Keys of the aggregated repositories, in resolution order
    #[serde(default)]
    pub repositories: Vec<String>,

    /// Whether requests coming from another server may resolve through the
    /// remote repositories aggregated here
    #[serde(default)]
    pub artifactory_requests_can_retrieve_remote_artifacts: bool,

    #[serde(default)]
    pub pom_repository_references_cleanup_policy: PomCleanupPolicy,

    /// Aggregated local repository receiving deployments made to this key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_deployment_repo: Option<String>,

    #[serde(default)]
    pub force_maven_authentication: bool,
}

fn virtual_class() -> RepositoryClass {
    RepositoryClass::Virtual
}

impl VirtualRepository {
    /// Create a definition with default settings for the given key
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            rclass: RepositoryClass::Virtual,
            package_type: PackageType::default(),
            description: None,
            notes: None,
            includes_pattern: default_includes_pattern(),
            excludes_pattern: String::new(),
            repo_layout_ref: default_repo_layout_ref(),
            repositories: Vec::new(),
            artifactory_requests_can_retrieve_remote_artifacts: false,
            pom_repository_references_cleanup_policy: PomCleanupPolicy::default(),
            default_deployment_repo: None,
            force_maven_authentication: false,
        }
    }

    pub fn with_repositories<I, S>(mut self, repositories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.repositories = repositories.into_iter().map(Into::into).collect();
        self
    }
}

impl RepositoryDefinition for VirtualRepository {
    const CLASS: RepositoryClass = RepositoryClass::Virtual;
    type Response = VirtualRepositoryResponse;

    fn key(&self) -> &str {
        &self.key
    }
}

/// Virtual repository configuration as confirmed by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualRepositoryResponse {
    #[serde(flatten)]
    pub repository: VirtualRepository,

    /// How long metadata computed for the aggregate is cached, in seconds
    #[serde(default = "default_virtual_retrieval_cache_period_secs")]
    pub virtual_retrieval_cache_period_secs: u64,

    #[serde(default)]
    pub enable_docker_support: bool,

    #[serde(default)]
    pub enable_npm_support: bool,
}

fn default_virtual_retrieval_cache_period_secs() -> u64 {
    7200
}

impl ConfirmedRepository for VirtualRepositoryResponse {
    fn key(&self) -> &str {
        &self.repository.key
    }

    fn class(&self) -> RepositoryClass {
        self.repository.rclass
    }
}

impl From<VirtualRepository> for VirtualRepositoryResponse {
    fn from(repository: VirtualRepository) -> Self {
        Self {
            repository,
            virtual_retrieval_cache_period_secs: default_virtual_retrieval_cache_period_secs(),
            enable_docker_support: false,
            enable_npm_support: false,
        }
    }
}
