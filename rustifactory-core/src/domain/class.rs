//! Repository classes and configuration enums

use serde::{Deserialize, Serialize};

/// Class of a repository (`rclass` on the wire)
///
/// Repository definitions use the lowercase form, while the list endpoint
/// reports the class in upper case. Both are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepositoryClass {
    /// Hosted repository storing deployed artifacts
    #[serde(rename = "local", alias = "LOCAL", alias = "Local")]
    Local,

    /// Aggregation of other repositories under a single key
    #[serde(rename = "virtual", alias = "VIRTUAL", alias = "Virtual")]
    Virtual,

    /// Caching proxy in front of an upstream URL
    #[serde(rename = "remote", alias = "REMOTE", alias = "Remote")]
    Remote,
}

impl RepositoryClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepositoryClass::Local => "local",
            RepositoryClass::Virtual => "virtual",
            RepositoryClass::Remote => "remote",
        }
    }
}

impl std::fmt::Display for RepositoryClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Package format served by a repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    #[default]
    Generic,
    Maven,
    Gradle,
    Ivy,
    Sbt,
    Helm,
    Cocoapods,
    Opkg,
    Rpm,
    Nuget,
    Cran,
    Gems,
    Npm,
    Bower,
    Debian,
    Composer,
    Pypi,
    Docker,
    Vagrant,
    Gitlfs,
    Go,
    Yum,
    Conan,
    Chef,
    Puppet,
    Cargo,
    Conda,
    Alpine,
    Terraform,
}

/// Checksum handling for artifacts deployed to a local repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocalChecksumPolicy {
    /// Trust checksums sent by the deploying client
    #[default]
    ClientChecksums,
    /// Always compute checksums on the server
    ServerGeneratedChecksums,
}

/// Checksum handling for artifacts fetched from an upstream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemoteChecksumPolicy {
    #[default]
    GenerateIfAbsent,
    Fail,
    IgnoreAndGenerate,
    PassThru,
}

/// How snapshot versions are stored in a local repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapshotVersionBehavior {
    Unique,
    #[default]
    NonUnique,
    Deployer,
}

/// Cleanup applied to repository references in POMs served by a virtual repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PomCleanupPolicy {
    #[default]
    DiscardActiveReference,
    DiscardAnyReference,
    Nothing,
}
