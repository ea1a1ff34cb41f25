//! User API end-to-end tests.

use catalog_api::transport;
use serde_json::json;

async fn spawn_server(
    state: transport::http::AppState,
) -> Result<String, Box<dyn std::error::Error>> {
    let router = transport::http::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Ok(format!("http://127.0.0.1:{}", port))
}

#[tokio::test]
async fn test_user_crud_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server(transport::http::AppState::default()).await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base_url}/api/users"))
        .json(&json!({"name": "  Alice  ", "age": 30}))
        .send()
        .await?;
    assert_eq!(resp.status(), 201);
    let created = resp.json::<serde_json::Value>().await?;
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["name"], "Alice");
    assert_eq!(created["age"], 30);

    let fetched = client
        .get(format!("{base_url}/api/users/{id}"))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(fetched, created);

    let list = client
        .get(format!("{base_url}/api/users"))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let resp = client
        .delete(format!("{base_url}/api/users/{id}"))
        .send()
        .await?;
    assert_eq!(resp.status(), 204);

    let resp = client
        .get(format!("{base_url}/api/users/{id}"))
        .send()
        .await?;
    assert_eq!(resp.status(), 404);
    assert_eq!(
        resp.json::<serde_json::Value>().await?,
        json!({"error": "User not found"})
    );

    Ok(())
}

#[tokio::test]
async fn test_create_requires_name_and_age() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server(transport::http::AppState::default()).await?;
    let client = reqwest::Client::new();

    for body in [
        json!({"name": "Bob"}),
        json!({"age": 25}),
        json!({"name": "", "age": 25}),
        json!({}),
    ] {
        let resp = client
            .post(format!("{base_url}/api/users"))
            .json(&body)
            .send()
            .await?;
        assert_eq!(resp.status(), 400, "body: {body}");
        assert_eq!(
            resp.json::<serde_json::Value>().await?,
            json!({"error": "Name and age are required"})
        );
    }

    // Age 0 is presence-checked, not truthiness-checked.
    let resp = client
        .post(format!("{base_url}/api/users"))
        .json(&json!({"name": "Newborn", "age": 0}))
        .send()
        .await?;
    assert_eq!(resp.status(), 201);

    Ok(())
}

#[tokio::test]
async fn test_empty_patch_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server(transport::http::AppState::default()).await?;
    let client = reqwest::Client::new();

    let created = client
        .post(format!("{base_url}/api/users"))
        .json(&json!({"name": "Alice", "age": 30}))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let id = created["id"].as_str().unwrap();

    let resp = client
        .patch(format!("{base_url}/api/users/{id}"))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    assert_eq!(
        resp.json::<serde_json::Value>().await?,
        json!({"error": "Nothing to update"})
    );

    // The record is untouched.
    let fetched = client
        .get(format!("{base_url}/api/users/{id}"))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(fetched, created);

    Ok(())
}

#[tokio::test]
async fn test_patch_age_zero_is_stored() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server(transport::http::AppState::default()).await?;
    let client = reqwest::Client::new();

    let created = client
        .post(format!("{base_url}/api/users"))
        .json(&json!({"name": "Alice", "age": 30}))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let id = created["id"].as_str().unwrap();

    let resp = client
        .patch(format!("{base_url}/api/users/{id}"))
        .json(&json!({"age": 0}))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let updated = resp.json::<serde_json::Value>().await?;
    assert_eq!(updated["age"], 0);
    assert_eq!(updated["name"], "Alice");

    Ok(())
}

#[tokio::test]
async fn test_patch_unknown_id_is_404() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server(transport::http::AppState::default()).await?;
    let client = reqwest::Client::new();

    let resp = client
        .patch(format!("{base_url}/api/users/zzzzzz"))
        .json(&json!({"age": 1}))
        .send()
        .await?;
    assert_eq!(resp.status(), 404);
    assert_eq!(
        resp.json::<serde_json::Value>().await?,
        json!({"error": "User not found"})
    );

    Ok(())
}
