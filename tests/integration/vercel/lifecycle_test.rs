//! Resource lifecycles driven through `VercelProvider` against a mock API

use mockito::{Matcher, Server};
use serde_json::json;
use tokio_util::sync::CancellationToken;
use vercel_provider::domain::models::Config;
use vercel_provider::services::{ResourceData, VercelProvider};

use super::{error_body, TEST_TOKEN};

fn provider_for(base_url: &str) -> VercelProvider {
    let mut config = Config::default();
    config.api.token = TEST_TOKEN.to_string();
    config.api.base_url = base_url.to_string();
    config.rate_limit.interval_ms = 1;
    VercelProvider::new(&config).expect("Failed to build provider")
}

fn env_body() -> serde_json::Value {
    json!({
        "type": "plain",
        "id": "env_1",
        "key": "API_URL",
        "value": "https://api.acme.dev",
        "target": ["production", "preview"],
        "gitBranch": null,
        "createdAt": 1_600_000_000_000_i64,
        "updatedAt": 1_600_000_000_000_i64
    })
}

#[tokio::test]
async fn test_env_lifecycle() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/v6/projects/prj_1/env")
        .match_query(Matcher::UrlEncoded("teamId".into(), "team_1".into()))
        .with_status(200)
        .with_body(env_body().to_string())
        .create_async()
        .await;
    let list = server
        .mock("GET", "/v6/projects/prj_1/env")
        .match_query(Matcher::UrlEncoded("teamId".into(), "team_1".into()))
        .with_status(200)
        .with_body(json!({"envs": [env_body()]}).to_string())
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/v8/projects/prj_1/env/env_1")
        .match_query(Matcher::UrlEncoded("teamId".into(), "team_1".into()))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let provider = provider_for(&server.url());
    let resource = provider.resource("vercel_env").expect("vercel_env is registered");
    let cancel = CancellationToken::new();

    let mut data = ResourceData::new()
        .with("project_id", "prj_1")
        .with("team_id", "team_1")
        .with("type", "plain")
        .with("key", "API_URL")
        .with("value", "https://api.acme.dev")
        .with("target", json!(["production", "preview"]));

    resource.create(&cancel, &mut data).await.expect("Create failed");
    assert_eq!(data.id(), Some("env_1"));
    assert_eq!(data.get("created_at"), Some(&json!(1_600_000_000_000_i64)));

    resource.delete(&cancel, &mut data).await.expect("Delete failed");
    assert!(data.id().is_none());

    create.assert_async().await;
    list.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_project_read_of_deleted_project_clears_id() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v1/projects/prj_gone")
        .with_status(404)
        .with_body(error_body("not_found", "Project not found"))
        .create_async()
        .await;

    let provider = provider_for(&server.url());
    let resource = provider
        .resource("vercel_project")
        .expect("vercel_project is registered");

    let mut data = ResourceData::new().with("name", "web");
    data.set_id("prj_gone");

    resource
        .read(&CancellationToken::new(), &mut data)
        .await
        .expect("not_found must not be an error on read");
    assert!(data.id().is_none());
}

#[tokio::test]
async fn test_project_read_forbidden_is_an_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v1/projects/prj_1")
        .with_status(403)
        .with_body(error_body("forbidden", "Not authorized"))
        .create_async()
        .await;

    let provider = provider_for(&server.url());
    let resource = provider.resource("vercel_project").unwrap();

    let mut data = ResourceData::new();
    data.set_id("prj_1");

    let err = resource
        .read(&CancellationToken::new(), &mut data)
        .await
        .unwrap_err();
    assert!(err.as_api().is_some_and(|e| e.is_forbidden()));
    assert_eq!(data.id(), Some("prj_1"));
}

#[tokio::test]
async fn test_project_create_sets_branch_and_reads_back() {
    let mut server = Server::new_async().await;
    let created = json!({
        "id": "prj_1",
        "name": "web",
        "link": {"type": "github", "repo": "acme/web", "productionBranch": "main"}
    });
    let current = json!({
        "id": "prj_1",
        "name": "web",
        "accountId": "acc_1",
        "link": {"type": "github", "repo": "acme/web", "productionBranch": "release"},
        "alias": [{"domain": "web.vercel.app"}]
    });

    let create = server
        .mock("POST", "/v6/projects")
        .with_status(200)
        .with_body(created.to_string())
        .create_async()
        .await;
    let branch = server
        .mock("PATCH", "/v4/projects/prj_1/branch")
        .match_body(Matcher::Json(json!({"branch": "release"})))
        .with_status(200)
        .with_body(current.to_string())
        .create_async()
        .await;
    let read = server
        .mock("GET", "/v1/projects/prj_1")
        .with_status(200)
        .with_body(current.to_string())
        .create_async()
        .await;

    let provider = provider_for(&server.url());
    let resource = provider.resource("vercel_project").unwrap();

    let mut data = ResourceData::new()
        .with("name", "web")
        .with("branch", "release")
        .with(
            "git_repository",
            json!([{"type": "github", "repo": "acme/web"}]),
        );

    resource
        .create(&CancellationToken::new(), &mut data)
        .await
        .expect("Create failed");

    assert_eq!(data.id(), Some("prj_1"));
    assert_eq!(data.get_str("branch").unwrap(), Some("release"));
    assert_eq!(data.get_str("account_id").unwrap(), Some("acc_1"));
    assert_eq!(data.get("alias"), Some(&json!(["web.vercel.app"])));

    create.assert_async().await;
    branch.assert_async().await;
    read.assert_async().await;
}
