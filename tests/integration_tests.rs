use serde_json::json;
use uuid::Uuid;

mod unit;

const BASE_URL: &str = "http://127.0.0.1:8000";
const USER_ID_HEADER: &str = "x-user-id";

#[tokio::test]
#[ignore = "requires running server"]
async fn test_health_check() {
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to reach health endpoint");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Service is healthy");
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_swimlane_types_listing() {
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/swimlane-types", BASE_URL))
        .send()
        .await
        .expect("Failed to get swimlane types");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["meta"]["total_count"], 6);

    let types = body["data"].as_array().expect("data should be an array");
    assert_eq!(types.len(), 6);

    let assignee = types
        .iter()
        .find(|t| t["value"] == "assignee")
        .expect("assignee type should be listed");
    assert_eq!(assignee["supports_auto_groups"], true);

    let custom = types
        .iter()
        .find(|t| t["value"] == "custom")
        .expect("custom type should be listed");
    assert_eq!(custom["supports_auto_groups"], false);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_report_types_listing() {
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/report-types", BASE_URL))
        .send()
        .await
        .expect("Failed to get report types");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["meta"]["total_count"], 5);

    let types = body["data"].as_array().expect("data should be an array");
    let cumulative_flow = types
        .iter()
        .find(|t| t["value"] == "cumulative_flow")
        .expect("cumulative_flow type should be listed");
    assert_eq!(cumulative_flow["label"], "Cumulative Flow");
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_analytics_requires_identity_header() {
    let client = reqwest::Client::new();
    let board_id = Uuid::new_v4();

    let response = client
        .get(&format!("{}/boards/{}/analytics", BASE_URL, board_id))
        .send()
        .await
        .expect("Failed to call analytics endpoint");

    assert_eq!(response.status().as_u16(), 401);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], false);
    assert_eq!(body["errors"][0]["code"], "UNAUTHORIZED");
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_analytics_unknown_board_returns_not_found() {
    let client = reqwest::Client::new();
    let board_id = Uuid::new_v4();

    let response = client
        .get(&format!("{}/boards/{}/analytics", BASE_URL, board_id))
        .header(USER_ID_HEADER, Uuid::new_v4().to_string())
        .send()
        .await
        .expect("Failed to call analytics endpoint");

    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], false);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_analytics_rejects_inverted_date_window() {
    let client = reqwest::Client::new();
    let board_id = Uuid::new_v4();

    let url = format!(
        "{}/boards/{}/analytics?start_date=2025-03-10&end_date=2025-03-01",
        BASE_URL, board_id
    );
    let response = client
        .get(&url)
        .header(USER_ID_HEADER, Uuid::new_v4().to_string())
        .send()
        .await
        .expect("Failed to call analytics endpoint");

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], false);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_create_swimlane_rejects_invalid_color() {
    let client = reqwest::Client::new();

    let payload = json!({
        "board_id": Uuid::new_v4(),
        "name": "By assignee",
        "swimlane_type": "assignee",
        "color": "red",
        "position": 0,
    });
    let response = client
        .post(&format!("{}/swimlanes", BASE_URL))
        .header(USER_ID_HEADER, Uuid::new_v4().to_string())
        .json(&payload)
        .send()
        .await
        .expect("Failed to create swimlane");

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], false);

    let errors = body["errors"].as_array().expect("errors should be present");
    assert!(errors.iter().any(|e| e["code"] == "invalid_hex_color"));
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_reorder_requires_at_least_one_move() {
    let client = reqwest::Client::new();
    let board_id = Uuid::new_v4();

    let payload = json!({ "moves": [] });
    let response = client
        .post(&format!("{}/boards/{}/swimlanes/reorder", BASE_URL, board_id))
        .header(USER_ID_HEADER, Uuid::new_v4().to_string())
        .json(&payload)
        .send()
        .await
        .expect("Failed to call reorder endpoint");

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], false);
}
