//! Remote repository DTOs

use serde::{Deserialize, Serialize};

use super::{ConfirmedRepository, RepositoryDefinition, default_includes_pattern, default_repo_layout_ref, default_true};
use crate::domain::class::{PackageType, RemoteChecksumPolicy, RepositoryClass};

/// Definition of a remote repository proxying and caching an upstream URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRepository {
    /// Unique repository key
    pub key: String,

    /// Always `remote` for this definition
    #[serde(default = "remote_class")]
    pub rclass: RepositoryClass,

    /// Upstream URL
    pub url: String,

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

    /// Credentials used against the upstream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Password>,

    /// Key of a proxy configured on the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,

    #[serde(default)]
    pub remote_repo_checksum_policy_type: RemoteChecksumPolicy,

    #[serde(default = "default_true")]
    pub handle_releases: bool,

    #[serde(default = "default_true")]
    pub handle_snapshots: bool,

    /// Fail resolution instead of falling back when the upstream errors
    #[serde(default)]
    pub hard_fail: bool,

    /// Serve only cached artifacts, never contact the upstream
    #[serde(default)]
    pub offline: bool,

    #[serde(default)]
    pub blacked_out: bool,

    #[serde(default = "default_true")]
    pub store_artifacts_locally: bool,

    #[serde(default = "default_socket_timeout_millis")]
    pub socket_timeout_millis: u64,

    #[serde(default = "default_retrieval_cache_period_secs")]
    pub retrieval_cache_period_secs: u64,

    #[serde(default = "default_missed_retrieval_cache_period_secs")]
    pub missed_retrieval_cache_period_secs: u64,

    #[serde(default = "default_assumed_offline_period_secs")]
    pub assumed_offline_period_secs: u64,

    #[serde(default)]
    pub bypass_head_requests: bool,

    #[serde(default)]
    pub enable_cookie_management: bool,
}

fn remote_class() -> RepositoryClass {
    RepositoryClass::Remote
}

fn default_socket_timeout_millis() -> u64 {
    15_000
}

fn default_retrieval_cache_period_secs() -> u64 {
    7200
}

fn default_missed_retrieval_cache_period_secs() -> u64 {
    1800
}

fn default_assumed_offline_period_secs() -> u64 {
    300
}

impl RemoteRepository {
    /// Create a definition with default settings for the given key and upstream URL
    pub fn new(key: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            rclass: RepositoryClass::Remote,
            url: url.into(),
            package_type: PackageType::default(),
            description: None,
            notes: None,
            includes_pattern: default_includes_pattern(),
            excludes_pattern: String::new(),
            repo_layout_ref: default_repo_layout_ref(),
            username: None,
            password: None,
            proxy: None,
            remote_repo_checksum_policy_type: RemoteChecksumPolicy::default(),
            handle_releases: true,
            handle_snapshots: true,
            hard_fail: false,
            offline: false,
            blacked_out: false,
            store_artifacts_locally: true,
            socket_timeout_millis: default_socket_timeout_millis(),
            retrieval_cache_period_secs: default_retrieval_cache_period_secs(),
            missed_retrieval_cache_period_secs: default_missed_retrieval_cache_period_secs(),
            assumed_offline_period_secs: default_assumed_offline_period_secs(),
            bypass_head_requests: false,
            enable_cookie_management: false,
        }
    }

    /// Authenticate against the upstream with the given credentials
    pub fn with_upstream_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(Password::new(password));
        self
    }
}

impl RepositoryDefinition for RemoteRepository {
    const CLASS: RepositoryClass = RepositoryClass::Remote;
    type Response = RemoteRepositoryResponse;

    fn key(&self) -> &str {
        &self.key
    }
}

/// Upstream password
///
/// Serialized as a plain string, but never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(****)")
    }
}

/// Remote repository configuration as confirmed by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRepositoryResponse {
    #[serde(flatten)]
    pub repository: RemoteRepository,

    #[serde(default)]
    pub content_synchronisation: ContentSynchronisation,
}

/// Smart remote synchronisation with another server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSynchronisation {
    #[serde(default)]
    pub enabled: bool,
}

impl ConfirmedRepository for RemoteRepositoryResponse {
    fn key(&self) -> &str {
        &self.repository.key
    }

    fn class(&self) -> RepositoryClass {
        self.repository.rclass
    }
}

impl From<RemoteRepository> for RemoteRepositoryResponse {
    fn from(repository: RemoteRepository) -> Self {
        Self {
            repository,
            content_synchronisation: ContentSynchronisation::default(),
        }
    }
}
