//! Repository-related API endpoints

use reqwest::{Method, StatusCode, Url};
use rustifactory_core::domain::summary::SimpleRepository;
use rustifactory_core::dto::{
    ConfirmedRepository, LocalRepository, LocalRepositoryResponse, RemoteRepository, RemoteRepositoryResponse,
    Repository, RepositoryDefinition, RepositoryResponse, VirtualRepository,
    VirtualRepositoryResponse,
};

use crate::ArtifactoryClient;
use crate::error::{ClientError, Result};

impl ArtifactoryClient {
    /// Canonical path of a single repository
    fn repository_url(&self, key: &str) -> Result<Url> {
        self.api_url(&["repositories", key])
    }

    /// Reject a response whose `rclass` is not the class that was asked for
    fn expect_class<R: RepositoryDefinition>(response: R::Response) -> Result<R::Response> {
        let actual = response.class();
        if actual == R::CLASS {
            return Ok(response);
        }

        tracing::warn!(key = response.key(), expected = %R::CLASS, %actual, "Repository class mismatch");
        Err(ClientError::ParseError(format!(
            "Repository {} is {}, expected {}",
            response.key(),
            actual,
            R::CLASS
        )))
    }

    // =============================================================================
    // Existence Checks
    // =============================================================================

    /// Check whether a repository exists under the given key
    ///
    /// Only the status code is inspected: a 2xx means the repository exists,
    /// a 404 means it does not. Any other status is returned as an API error.
    pub async fn repository_exists(&self, key: &str) -> Result<bool> {
        let url = self.repository_url(key)?;
        let response = self.request(Method::GET, url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }

        self.handle_empty_response(response).await?;
        Ok(true)
    }

    /// Fetch a repository configuration, or `None` if the key does not exist
    ///
    /// A repository stored under the key with a different class is a
    /// `ParseError`, not `None`.
    ///
    /// # Example
    /// ```no_run
    /// # use rustifactory_client::ArtifactoryClient;
    /// # use rustifactory_core::dto::RemoteRepository;
    /// # async fn example() -> rustifactory_client::Result<()> {
    /// let client = ArtifactoryClient::new("http://localhost:8080/artifactory");
    /// if let Some(remote) = client.find_repository::<RemoteRepository>("maven-central").await? {
    ///     println!("proxying {}", remote.repository.url);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn find_repository<R: RepositoryDefinition>(
        &self,
        key: &str,
    ) -> Result<Option<R::Response>> {
        let url = self.repository_url(key)?;
        let response = self.request(Method::GET, url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(key, rclass = %R::CLASS, "Repository not found");
            return Ok(None);
        }

        let found = self.handle_response(response).await?;
        Self::expect_class::<R>(found).map(Some)
    }

    // =============================================================================
    // Generic Repository Management
    // =============================================================================

    /// Get a repository configuration
    ///
    /// # Errors
    /// `RepositoryNotFound` if the server answers 404, `ApiError` for any
    /// other non-2xx status.
    pub async fn get_repository<R: RepositoryDefinition>(&self, key: &str) -> Result<R::Response> {
        self.find_repository::<R>(key)
            .await?
            .ok_or_else(|| ClientError::RepositoryNotFound(key.to_string()))
    }

    /// Create a repository
    ///
    /// The key is checked first; if a repository already exists under it the
    /// call fails with `RepositoryAlreadyExists` and nothing is written.
    /// Otherwise the definition is sent with a single PUT.
    pub async fn create_repository<R: RepositoryDefinition>(
        &self,
        repo: &R,
    ) -> Result<R::Response> {
        let key = repo.key();

        if self.repository_exists(key).await? {
            tracing::warn!(key, rclass = %R::CLASS, "Repository already exists");
            return Err(ClientError::RepositoryAlreadyExists(key.to_string()));
        }

        let url = self.repository_url(key)?;
        let response = self.request(Method::PUT, url).json(repo).send().await?;
        let created = Self::expect_class::<R>(self.handle_response(response).await?)?;

        tracing::info!(key, rclass = %R::CLASS, "Repository created");
        Ok(created)
    }

    /// Update an existing repository
    ///
    /// Never creates: if the key does not exist the call fails with
    /// `RepositoryNotFound` and nothing is written. The stored repository is
    /// fetched first, so a key held by another class fails with `ParseError`
    /// before anything is written. Otherwise the definition is sent with a
    /// single POST.
    pub async fn update_repository<R: RepositoryDefinition>(
        &self,
        repo: &R,
    ) -> Result<R::Response> {
        let key = repo.key();

        if self.find_repository::<R>(key).await?.is_none() {
            return Err(ClientError::RepositoryNotFound(key.to_string()));
        }

        let url = self.repository_url(key)?;
        let response = self.request(Method::POST, url).json(repo).send().await?;
        let updated = Self::expect_class::<R>(self.handle_response(response).await?)?;

        tracing::info!(key, rclass = %R::CLASS, "Repository updated");
        Ok(updated)
    }

    /// Get a repository configuration without knowing its class up front
    ///
    /// The `rclass` field of the body selects the response type.
    pub async fn get_repository_any(&self, key: &str) -> Result<RepositoryResponse> {
        let url = self.repository_url(key)?;
        let response = self.request(Method::GET, url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::RepositoryNotFound(key.to_string()));
        }

        self.handle_response(response).await
    }

    /// Create a repository of any class
    pub async fn create_repository_any(&self, repo: &Repository) -> Result<RepositoryResponse> {
        match repo {
            Repository::Local(repo) => self
                .create_repository(repo)
                .await
                .map(RepositoryResponse::Local),
            Repository::Virtual(repo) => self
                .create_repository(repo)
                .await
                .map(RepositoryResponse::Virtual),
            Repository::Remote(repo) => self
                .create_repository(repo)
                .await
                .map(RepositoryResponse::Remote),
        }
    }

    /// Update a repository of any class
    pub async fn update_repository_any(&self, repo: &Repository) -> Result<RepositoryResponse> {
        match repo {
            Repository::Local(repo) => self
                .update_repository(repo)
                .await
                .map(RepositoryResponse::Local),
            Repository::Virtual(repo) => self
                .update_repository(repo)
                .await
                .map(RepositoryResponse::Virtual),
            Repository::Remote(repo) => self
                .update_repository(repo)
                .await
                .map(RepositoryResponse::Remote),
        }
    }

    /// List all repositories
    ///
    /// # Returns
    /// Repository summaries, in the order the server returned them
    pub async fn list_repositories(&self) -> Result<Vec<SimpleRepository>> {
        let url = self.api_url(&["repositories"])?;
        let response = self.request(Method::GET, url).send().await?;

        self.handle_response(response).await
    }

    /// Delete a repository
    ///
    /// A missing key is reported as a plain `ApiError` with status 404, not
    /// as `RepositoryNotFound`.
    pub async fn delete_repository(&self, key: &str) -> Result<()> {
        let url = self.repository_url(key)?;
        let response = self.request(Method::DELETE, url).send().await?;

        self.handle_empty_response(response).await?;

        tracing::info!(key, "Repository deleted");
        Ok(())
    }

    // =============================================================================
    // Local Repositories
    // =============================================================================

    /// Get a local repository
    pub async fn get_local_repo(&self, key: &str) -> Result<LocalRepositoryResponse> {
        self.get_repository::<LocalRepository>(key).await
    }

    /// Create a local repository
    ///
    /// # Example
    /// ```no_run
    /// # use rustifactory_client::ArtifactoryClient;
    /// # use rustifactory_core::domain::class::PackageType;
    /// # use rustifactory_core::dto::LocalRepository;
    /// # async fn example() -> rustifactory_client::Result<()> {
    /// let client = ArtifactoryClient::new("http://localhost:8080/artifactory");
    /// let repo = LocalRepository::new("docker-local").with_package_type(PackageType::Docker);
    /// client.create_local_repo(&repo).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_local_repo(&self, repo: &LocalRepository) -> Result<LocalRepositoryResponse> {
        self.create_repository(repo).await
    }

    /// Update a local repository
    pub async fn update_local_repo(&self, repo: &LocalRepository) -> Result<LocalRepositoryResponse> {
        self.update_repository(repo).await
    }

    // =============================================================================
    // Virtual Repositories
    // =============================================================================

    /// Get a virtual repository
    pub async fn get_virtual_repo(&self, key: &str) -> Result<VirtualRepositoryResponse> {
        self.get_repository::<VirtualRepository>(key).await
    }

    /// Create a virtual repository
    pub async fn create_virtual_repo(
        &self,
        repo: &VirtualRepository,
    ) -> Result<VirtualRepositoryResponse> {
        self.create_repository(repo).await
    }

    /// Update a virtual repository
    pub async fn update_virtual_repo(
        &self,
        repo: &VirtualRepository,
    ) -> Result<VirtualRepositoryResponse> {
        self.update_repository(repo).await
    }

    // =============================================================================
    // Remote Repositories
    // =============================================================================

    /// Get a remote repository
    pub async fn get_remote_repo(&self, key: &str) -> Result<RemoteRepositoryResponse> {
        self.get_repository::<RemoteRepository>(key).await
    }

    /// Create a remote repository
    pub async fn create_remote_repo(
        &self,
        repo: &RemoteRepository,
    ) -> Result<RemoteRepositoryResponse> {
        self.create_repository(repo).await
    }

    /// Update a remote repository
    pub async fn update_remote_repo(
        &self,
        repo: &RemoteRepository,
    ) -> Result<RemoteRepositoryResponse> {
        self.update_repository(repo).await
    }
}
