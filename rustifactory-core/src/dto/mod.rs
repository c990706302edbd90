//! Data Transfer Objects for repository definitions
//!
//! Each repository class has a definition (what the caller asks the server to
//! store) and a response (the configuration the server confirms, including
//! fields it populates itself). Both are keyed by the repository `key`, which
//! is the only identifier used in URL paths.

pub mod local_repository;
pub mod remote_repository;
pub mod virtual_repository;

pub use local_repository::{LocalRepository, LocalRepositoryResponse};
pub use remote_repository::{ContentSynchronisation, RemoteRepository, RemoteRepositoryResponse};
pub use virtual_repository::{VirtualRepository, VirtualRepositoryResponse};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::class::RepositoryClass;

/// A repository definition that can be sent to the server
///
/// Ties a definition type to its repository class and to the response type
/// the server answers with, so that client operations can be written once
/// for every class.
pub trait RepositoryDefinition: Serialize + Send + Sync {
    /// Class this definition describes
    const CLASS: RepositoryClass;

    /// Server-confirmed form of this definition
    type Response: ConfirmedRepository;

    /// Unique repository key
    fn key(&self) -> &str;
}

/// A repository configuration as returned by the server
pub trait ConfirmedRepository: DeserializeOwned + Send {
    /// Unique repository key
    fn key(&self) -> &str;

    /// Class reported by the server in `rclass`
    fn class(&self) -> RepositoryClass;
}

/// A repository definition of any class
///
/// On the wire the class is selected by the `rclass` field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "rclass", rename_all = "lowercase")]
pub enum Repository {
    Local(LocalRepository),
    Virtual(VirtualRepository),
    Remote(RemoteRepository),
}

impl Repository {
    pub fn key(&self) -> &str {
        match self {
            Repository::Local(repo) => &repo.key,
            Repository::Virtual(repo) => &repo.key,
            Repository::Remote(repo) => &repo.key,
        }
    }

    pub fn class(&self) -> RepositoryClass {
        match self {
            Repository::Local(_) => RepositoryClass::Local,
            Repository::Virtual(_) => RepositoryClass::Virtual,
            Repository::Remote(_) => RepositoryClass::Remote,
        }
    }
}

// The inner definitions already carry `rclass`, so serialize them as-is.
impl Serialize for Repository {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Repository::Local(repo) => repo.serialize(serializer),
            Repository::Virtual(repo) => repo.serialize(serializer),
            Repository::Remote(repo) => repo.serialize(serializer),
        }
    }
}

/// A server-confirmed repository configuration of any class
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "rclass", rename_all = "lowercase")]
pub enum RepositoryResponse {
    Local(LocalRepositoryResponse),
    Virtual(VirtualRepositoryResponse),
    Remote(RemoteRepositoryResponse),
}

impl RepositoryResponse {
    pub fn key(&self) -> &str {
        match self {
            RepositoryResponse::Local(repo) => &repo.repository.key,
            RepositoryResponse::Virtual(repo) => &repo.repository.key,
            RepositoryResponse::Remote(repo) => &repo.repository.key,
        }
    }

    pub fn class(&self) -> RepositoryClass {
        match self {
            RepositoryResponse::Local(_) => RepositoryClass::Local,
            RepositoryResponse::Virtual(_) => RepositoryClass::Virtual,
            RepositoryResponse::Remote(_) => RepositoryClass::Remote,
        }
    }
}

impl Serialize for RepositoryResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RepositoryResponse::Local(repo) => repo.serialize(serializer),
            RepositoryResponse::Virtual(repo) => repo.serialize(serializer),
            RepositoryResponse::Remote(repo) => repo.serialize(serializer),
        }
    }
}

// Field defaults shared by every repository class

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_includes_pattern() -> String {
    "**/*".to_string()
}

pub(crate) fn default_repo_layout_ref() -> String {
    "maven-2-default".to_string()
}
