//! Register / search / increment flows driven over HTTP against the served
//! router, backed by the in-memory store.

mod support;

use serde_json::json;

#[tokio::test]
async fn keep_returns_liveness_token() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = support::spawn_server().await;
    let client = reqwest::Client::new();

    let response = client.get(format!("{base_url}/keep/")).send().await?;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.json::<String>().await?, "OK");
    Ok(())
}

#[tokio::test]
async fn register_then_search_by_id_number() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = support::spawn_server().await;
    let client = reqwest::Client::new();

    let created = client
        .post(format!("{base_url}/add_user/"))
        .json(&json!({"name": "王小明", "idNumber": "A1", "tel": "0912345678"}))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert!(created["success"].as_bool().unwrap_or(false));
    assert!(!created["data"]["_id"].as_str().unwrap_or("").is_empty());

    let found = client
        .get(format!("{base_url}/search/"))
        .json(&json!({"idNumber": "A1"}))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert!(found["success"].as_bool().unwrap_or(false));
    assert_eq!(found["data"]["name"], "王小明");
    assert_eq!(found["data"]["idNumber"], "A1");
    assert_eq!(found["data"]["tel"], "0912345678");
    assert_eq!(found["data"]["healthMeasurement"], 0);
    assert_eq!(found["data"]["exercise"], 0);
    Ok(())
}

#[tokio::test]
async fn search_unknown_id_number_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = support::spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base_url}/search/"))
        .json(&json!({"idNumber": "Z9"}))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let body = response.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "未找到符合的 ID");
    Ok(())
}

#[tokio::test]
async fn incrementing_exercise_twice_yields_two() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = support::spawn_server().await;
    let client = reqwest::Client::new();

    let created = client
        .post(format!("{base_url}/add_user/"))
        .json(&json!({"idNumber": "A1", "lineId": "L1"}))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert!(created["success"].as_bool().unwrap_or(false));

    let first = client
        .put(format!("{base_url}/add/exercise"))
        .json(&json!({"lineId": "L1"}))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(first["data"]["exercise"], 1);

    let second = client
        .put(format!("{base_url}/add/exercise"))
        .json(&json!({"lineId": "L1"}))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(second["data"]["exercise"], 2);

    // The other counters stay untouched.
    assert_eq!(second["data"]["healthMeasurement"], 0);
    assert_eq!(second["data"]["healthEducation"], 0);
    Ok(())
}

#[tokio::test]
async fn unknown_counter_field_is_rejected_without_write() -> Result<(), Box<dyn std::error::Error>>
{
    let base_url = support::spawn_server().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{base_url}/add_user/"))
        .json(&json!({"idNumber": "A1", "lineId": "L1"}))
        .send()
        .await?;

    let response = client
        .put(format!("{base_url}/add/foo"))
        .json(&json!({"lineId": "L1"}))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body = response.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "無效的欄位名稱");

    let found = client
        .get(format!("{base_url}/searchLineID/"))
        .json(&json!({"lineId": "L1"}))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(found["data"]["exercise"], 0);
    assert_eq!(found["data"]["healthMeasurement"], 0);
    assert_eq!(found["data"]["healthEducation"], 0);
    Ok(())
}

#[tokio::test]
async fn incrementing_unknown_line_id_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = support::spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .put(format!("{base_url}/add/exercise"))
        .json(&json!({"lineId": "missing"}))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let body = response.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "未找到符合的 ID");
    Ok(())
}
