//! Repository endpoint tests against a mock server

use rustifactory_client::{ArtifactoryClient, ClientConfig, ClientError, Credentials};
use rustifactory_core::domain::class::RepositoryClass;
use rustifactory_core::dto::{
    LocalRepository, LocalRepositoryResponse, RemoteRepository, RemoteRepositoryResponse,
    Repository, RepositoryResponse, VirtualRepository, VirtualRepositoryResponse,
};
use serde_json::json;
use wiremock::matchers::{basic_auth, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USER: &str = "user";
const PASSWORD: &str = "password_or_apiKey";

const LOCAL_KEY: &str = "test_local_repository";
const VIRTUAL_KEY: &str = "test_virtual_repository";
const REMOTE_KEY: &str = "test_remote_repository";

fn client_for(server: &MockServer) -> ArtifactoryClient {
    let config = ClientConfig::new(format!("{}/artifactory", server.uri()))
        .with_credentials(Credentials::new(USER, PASSWORD));
    ArtifactoryClient::from_config(&config).unwrap()
}

fn repo_path(key: &str) -> String {
    format!("/artifactory/api/repositories/{}", key)
}

fn local_body() -> serde_json::Value {
    json!({ "key": LOCAL_KEY, "rclass": "local" })
}

fn virtual_body() -> serde_json::Value {
    json!({ "key": VIRTUAL_KEY, "rclass": "virtual" })
}

fn remote_body() -> serde_json::Value {
    json!({ "key": REMOTE_KEY, "rclass": "remote", "url": "http://test-url.com" })
}

/// Mount a GET on the canonical path answering with the given status and body
async fn mount_get(server: &MockServer, key: &str, status: u16, body: Option<serde_json::Value>) {
    let template = match body {
        Some(body) => ResponseTemplate::new(status).set_body_json(body),
        None => ResponseTemplate::new(status),
    };
    Mock::given(method("GET"))
        .and(path(repo_path(key)))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Mount a write on the canonical path that must be hit exactly `times` times
async fn mount_write(
    server: &MockServer,
    http_method: &str,
    key: &str,
    status: u16,
    body: serde_json::Value,
    times: u64,
) {
    Mock::given(method(http_method))
        .and(path(repo_path(key)))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

// =============================================================================
// Get
// =============================================================================

#[tokio::test]
async fn test_get_local_repository_success() {
    let server = MockServer::start().await;
    mount_get(&server, LOCAL_KEY, 200, Some(local_body())).await;

    let repo = client_for(&server).get_local_repo(LOCAL_KEY).await.unwrap();

    assert_eq!(
        repo,
        LocalRepositoryResponse::from(LocalRepository::new(LOCAL_KEY))
    );
}

#[tokio::test]
async fn test_get_virtual_repository_success() {
    let server = MockServer::start().await;
    mount_get(&server, VIRTUAL_KEY, 200, Some(virtual_body())).await;

    let repo = client_for(&server).get_virtual_repo(VIRTUAL_KEY).await.unwrap();

    assert_eq!(
        repo,
        VirtualRepositoryResponse::from(VirtualRepository::new(VIRTUAL_KEY))
    );
}

#[tokio::test]
async fn test_get_remote_repository_success() {
    let server = MockServer::start().await;
    mount_get(&server, REMOTE_KEY, 200, Some(remote_body())).await;

    let repo = client_for(&server).get_remote_repo(REMOTE_KEY).await.unwrap();

    assert_eq!(
        repo,
        RemoteRepositoryResponse::from(RemoteRepository::new(REMOTE_KEY, "http://test-url.com"))
    );
}

#[tokio::test]
async fn test_get_repository_error_not_found() {
    let server = MockServer::start().await;
    mount_get(&server, LOCAL_KEY, 404, None).await;
    mount_get(&server, VIRTUAL_KEY, 404, None).await;
    mount_get(&server, REMOTE_KEY, 404, None).await;
    let client = client_for(&server);

    let err = client.get_local_repo(LOCAL_KEY).await.unwrap_err();
    assert!(matches!(err, ClientError::RepositoryNotFound(ref key) if key == LOCAL_KEY));

    let err = client.get_virtual_repo(VIRTUAL_KEY).await.unwrap_err();
    assert!(matches!(err, ClientError::RepositoryNotFound(ref key) if key == VIRTUAL_KEY));

    let err = client.get_remote_repo(REMOTE_KEY).await.unwrap_err();
    assert!(matches!(err, ClientError::RepositoryNotFound(ref key) if key == REMOTE_KEY));
}

#[tokio::test]
async fn test_get_repository_server_error_is_not_mapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(repo_path(LOCAL_KEY)))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_local_repo(LOCAL_KEY).await.unwrap_err();

    assert!(matches!(err, ClientError::ApiError { status: 500, ref message } if message == "boom"));
}

#[tokio::test]
async fn test_get_repository_rejects_body_without_key() {
    let server = MockServer::start().await;
    mount_get(&server, LOCAL_KEY, 200, Some(json!({ "rclass": "local" }))).await;

    let err = client_for(&server).get_local_repo(LOCAL_KEY).await.unwrap_err();

    assert!(matches!(err, ClientError::ParseError(_)));
}

#[tokio::test]
async fn test_get_repository_rejects_other_class() {
    let server = MockServer::start().await;
    mount_get(&server, LOCAL_KEY, 200, Some(local_body())).await;

    let err = client_for(&server)
        .get_virtual_repo(LOCAL_KEY)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::ParseError(ref msg) if msg.contains("is local, expected virtual")));
}

#[tokio::test]
async fn test_get_repository_any_uses_rclass() {
    let server = MockServer::start().await;
    mount_get(&server, REMOTE_KEY, 200, Some(remote_body())).await;

    let repo = client_for(&server).get_repository_any(REMOTE_KEY).await.unwrap();

    assert_eq!(repo.class(), RepositoryClass::Remote);
    assert_eq!(repo.key(), REMOTE_KEY);
}

#[tokio::test]
async fn test_repository_key_is_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/artifactory/api/repositories/my%20repo%231%3Fx"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "key": "my repo#1?x", "rclass": "local" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let repo = client_for(&server).get_local_repo("my repo#1?x").await.unwrap();

    assert_eq!(repo.repository.key, "my repo#1?x");
}

#[tokio::test]
async fn test_requests_carry_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(repo_path(LOCAL_KEY)))
        .and(basic_auth(USER, PASSWORD))
        .respond_with(ResponseTemplate::new(200).set_body_json(local_body()))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).get_local_repo(LOCAL_KEY).await.unwrap();
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_local_repository_fail_if_already_exists() {
    let server = MockServer::start().await;
    mount_get(&server, LOCAL_KEY, 200, Some(local_body())).await;
    mount_write(&server, "PUT", LOCAL_KEY, 201, local_body(), 0).await;

    let err = client_for(&server)
        .create_local_repo(&LocalRepository::new(LOCAL_KEY))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::RepositoryAlreadyExists(ref key) if key == LOCAL_KEY));
}

#[tokio::test]
async fn test_create_virtual_repository_fail_if_already_exists() {
    let server = MockServer::start().await;
    mount_get(&server, VIRTUAL_KEY, 200, Some(virtual_body())).await;
    mount_write(&server, "PUT", VIRTUAL_KEY, 201, virtual_body(), 0).await;

    let err = client_for(&server)
        .create_virtual_repo(&VirtualRepository::new(VIRTUAL_KEY))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::RepositoryAlreadyExists(ref key) if key == VIRTUAL_KEY));
}

#[tokio::test]
async fn test_create_remote_repository_fail_if_already_exists() {
    let server = MockServer::start().await;
    mount_get(&server, REMOTE_KEY, 200, Some(remote_body())).await;
    mount_write(&server, "PUT", REMOTE_KEY, 201, remote_body(), 0).await;

    let err = client_for(&server)
        .create_remote_repo(&RemoteRepository::new(REMOTE_KEY, "http://test-url.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::RepositoryAlreadyExists(ref key) if key == REMOTE_KEY));
}

#[tokio::test]
async fn test_create_local_repository_success() {
    let server = MockServer::start().await;
    mount_get(&server, LOCAL_KEY, 404, None).await;
    mount_write(&server, "PUT", LOCAL_KEY, 201, json!({ "key": LOCAL_KEY }), 1).await;

    let repo = client_for(&server)
        .create_local_repo(&LocalRepository::new(LOCAL_KEY))
        .await
        .unwrap();

    assert_eq!(repo.repository.key, LOCAL_KEY);
}

#[tokio::test]
async fn test_create_virtual_repository_success() {
    let server = MockServer::start().await;
    mount_get(&server, VIRTUAL_KEY, 404, None).await;
    mount_write(&server, "PUT", VIRTUAL_KEY, 201, virtual_body(), 1).await;

    let repo = client_for(&server)
        .create_virtual_repo(&VirtualRepository::new(VIRTUAL_KEY))
        .await
        .unwrap();

    assert_eq!(repo.repository.key, VIRTUAL_KEY);
    assert_eq!(repo.repository.rclass, RepositoryClass::Virtual);
}

#[tokio::test]
async fn test_create_remote_repository_success() {
    let server = MockServer::start().await;
    mount_get(&server, REMOTE_KEY, 404, None).await;
    mount_write(&server, "PUT", REMOTE_KEY, 201, remote_body(), 1).await;

    let repo = client_for(&server)
        .create_remote_repo(&RemoteRepository::new(REMOTE_KEY, "http://test-url.com"))
        .await
        .unwrap();

    assert_eq!(repo.repository.url, "http://test-url.com");
}

#[tokio::test]
async fn test_create_sends_definition_body() {
    let server = MockServer::start().await;
    mount_get(&server, REMOTE_KEY, 404, None).await;
    mount_write(&server, "PUT", REMOTE_KEY, 201, remote_body(), 1).await;

    client_for(&server)
        .create_remote_repo(&RemoteRepository::new(REMOTE_KEY, "http://test-url.com"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let put = requests
        .iter()
        .find(|r| r.method.as_str() == "PUT")
        .expect("a PUT request");
    let body: serde_json::Value = serde_json::from_slice(&put.body).unwrap();
    assert_eq!(body["key"], REMOTE_KEY);
    assert_eq!(body["rclass"], "remote");
    assert_eq!(body["url"], "http://test-url.com");
}

#[tokio::test]
async fn test_create_propagates_existence_check_failure() {
    let server = MockServer::start().await;
    mount_get(&server, LOCAL_KEY, 503, None).await;
    mount_write(&server, "PUT", LOCAL_KEY, 201, local_body(), 0).await;

    let err = client_for(&server)
        .create_local_repo(&LocalRepository::new(LOCAL_KEY))
        .await
        .unwrap_err();

    assert!(err.is_server_error());
}

#[tokio::test]
async fn test_create_rejects_response_of_other_class() {
    let server = MockServer::start().await;
    mount_get(&server, VIRTUAL_KEY, 404, None).await;
    mount_write(
        &server,
        "PUT",
        VIRTUAL_KEY,
        201,
        json!({ "key": VIRTUAL_KEY, "rclass": "local" }),
        1,
    )
    .await;

    let err = client_for(&server)
        .create_virtual_repo(&VirtualRepository::new(VIRTUAL_KEY))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::ParseError(_)));
}

#[tokio::test]
async fn test_create_repository_any_dispatches_on_class() {
    let server = MockServer::start().await;
    mount_get(&server, VIRTUAL_KEY, 404, None).await;
    mount_write(&server, "PUT", VIRTUAL_KEY, 201, virtual_body(), 1).await;

    let repo = Repository::Virtual(VirtualRepository::new(VIRTUAL_KEY));
    let created = client_for(&server)
        .create_repository_any(&repo)
        .await
        .unwrap();

    assert!(matches!(created, RepositoryResponse::Virtual(_)));
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_repository_fail_if_not_found() {
    let server = MockServer::start().await;
    mount_get(&server, LOCAL_KEY, 404, None).await;
    mount_get(&server, VIRTUAL_KEY, 404, None).await;
    mount_get(&server, REMOTE_KEY, 404, None).await;
    mount_write(&server, "POST", LOCAL_KEY, 200, local_body(), 0).await;
    mount_write(&server, "POST", VIRTUAL_KEY, 200, virtual_body(), 0).await;
    mount_write(&server, "POST", REMOTE_KEY, 200, remote_body(), 0).await;
    let client = client_for(&server);

    let err = client
        .update_local_repo(&LocalRepository::new(LOCAL_KEY))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::RepositoryNotFound(ref key) if key == LOCAL_KEY));

    let err = client
        .update_virtual_repo(&VirtualRepository::new(VIRTUAL_KEY))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::RepositoryNotFound(ref key) if key == VIRTUAL_KEY));

    let err = client
        .update_remote_repo(&RemoteRepository::new(REMOTE_KEY, "http://test-url.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::RepositoryNotFound(ref key) if key == REMOTE_KEY));
}

#[tokio::test]
async fn test_update_does_not_write_over_other_class() {
    let server = MockServer::start().await;
    mount_get(&server, LOCAL_KEY, 200, Some(local_body())).await;
    mount_write(&server, "POST", LOCAL_KEY, 200, virtual_body(), 0).await;

    let err = client_for(&server)
        .update_virtual_repo(&VirtualRepository::new(LOCAL_KEY))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::ParseError(ref msg) if msg.contains("is local, expected virtual")));
}

#[tokio::test]
async fn test_update_local_repository_success() {
    let server = MockServer::start().await;
    mount_get(&server, LOCAL_KEY, 200, Some(local_body())).await;
    mount_write(
        &server,
        "POST",
        LOCAL_KEY,
        200,
        json!({ "key": LOCAL_KEY, "rclass": "local", "description": "updated" }),
        1,
    )
    .await;

    let mut repo = LocalRepository::new(LOCAL_KEY);
    repo.description = Some("updated".to_string());
    let updated = client_for(&server).update_local_repo(&repo).await.unwrap();

    assert_eq!(updated.repository.description.as_deref(), Some("updated"));
}

#[tokio::test]
async fn test_update_virtual_repository_success() {
    let server = MockServer::start().await;
    mount_get(&server, VIRTUAL_KEY, 200, Some(virtual_body())).await;
    mount_write(
        &server,
        "POST",
        VIRTUAL_KEY,
        200,
        json!({ "key": VIRTUAL_KEY, "rclass": "virtual", "repositories": [LOCAL_KEY] }),
        1,
    )
    .await;

    let repo = VirtualRepository::new(VIRTUAL_KEY).with_repositories([LOCAL_KEY]);
    let updated = client_for(&server).update_virtual_repo(&repo).await.unwrap();

    assert_eq!(updated.repository.repositories, vec![LOCAL_KEY]);
}

#[tokio::test]
async fn test_update_remote_repository_success() {
    let server = MockServer::start().await;
    mount_get(&server, REMOTE_KEY, 200, Some(remote_body())).await;
    mount_write(&server, "POST", REMOTE_KEY, 200, remote_body(), 1).await;

    let updated = client_for(&server)
        .update_remote_repo(&RemoteRepository::new(REMOTE_KEY, "http://test-url.com"))
        .await
        .unwrap();

    assert_eq!(updated.repository.key, REMOTE_KEY);
}

// =============================================================================
// List & Delete
// =============================================================================

#[tokio::test]
async fn test_list_repositories_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/artifactory/api/repositories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "key": "test_repository",
            "type": "local",
            "url": "some-url",
            "packageType": "docker"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let repos = client_for(&server).list_repositories().await.unwrap();

    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].key, "test_repository");
    assert_eq!(repos[0].repo_type, RepositoryClass::Local);
    assert_eq!(repos[0].url, "some-url");
    assert_eq!(repos[0].package_type, "docker");
}

#[tokio::test]
async fn test_list_repositories_keeps_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/artifactory/api/repositories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "key": "zeta", "type": "REMOTE", "url": "u1", "packageType": "npm" },
            { "key": "alpha", "type": "VIRTUAL", "url": "u2", "packageType": "npm" }
        ])))
        .mount(&server)
        .await;

    let repos = client_for(&server).list_repositories().await.unwrap();

    let keys: Vec<&str> = repos.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["zeta", "alpha"]);
}

#[tokio::test]
async fn test_delete_repo_success() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(repo_path(VIRTUAL_KEY)))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .delete_repository(VIRTUAL_KEY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_repo_fail_if_repo_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(repo_path(REMOTE_KEY)))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .delete_repository(REMOTE_KEY)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::ApiError { status: 404, .. }));
    assert!(!matches!(err, ClientError::RepositoryNotFound(_)));
}
