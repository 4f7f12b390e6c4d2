use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;
use common::TestServer;

#[tokio::test]
async fn health_reports_ok() {
    let server = TestServer::spawn("api_health").await;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn cors_headers_on_responses_and_preflight() {
    let server = TestServer::spawn("api_cors").await;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(
        res.headers()["access-control-allow-origin"].to_str().unwrap(),
        "*"
    );

    let res = client
        .request(reqwest::Method::OPTIONS, server.url("/sessions/start"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(res.headers()["access-control-allow-methods"]
        .to_str()
        .unwrap()
        .contains("PATCH"));
}

#[tokio::test]
async fn start_stop_roundtrip() {
    let server = TestServer::spawn("api_start_stop").await;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/sessions/start"))
        .json(&json!({ "note": "late deploy" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let started: Value = res.json().await.unwrap();
    let id = started["id"].as_str().unwrap().to_string();
    assert!(started["ended_at"].is_null());
    assert_eq!(started["note"], "late deploy");
    assert!(started["started_at"].as_i64().unwrap() > 0);

    // The running session is visible via /sessions/active.
    let active: Value = client
        .get(server.url("/sessions/active"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(active["id"].as_str().unwrap(), id);

    let res = client
        .patch(server.url(&format!("/sessions/{id}/stop")))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let stopped: Value = res.json().await.unwrap();
    assert_eq!(stopped["id"].as_str().unwrap(), id);
    assert!(stopped["ended_at"].as_i64().unwrap() >= stopped["started_at"].as_i64().unwrap());
    // Stop without a note keeps the stored one.
    assert_eq!(stopped["note"], "late deploy");

    let active: Value = client
        .get(server.url("/sessions/active"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(active.is_null());

    let sessions: Value = client
        .get(server.url("/sessions"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(sessions.as_array().unwrap().len(), 1);
    assert_eq!(sessions[0]["id"].as_str().unwrap(), id);
}

#[tokio::test]
async fn start_without_body_is_accepted() {
    let server = TestServer::spawn("api_start_empty_body").await;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/sessions/start"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let session: Value = res.json().await.unwrap();
    assert!(session["note"].is_null());
}

#[tokio::test]
async fn second_start_conflicts_and_reports_running_session() {
    let server = TestServer::spawn("api_start_conflict").await;
    let client = reqwest::Client::new();

    let first: Value = client
        .post(server.url("/sessions/start"))
        .json(&json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let res = client
        .post(server.url("/sessions/start"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["session"]["id"], first["id"]);

    // The rejected start must not have touched storage.
    let active: Value = client
        .get(server.url("/sessions/active"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(active["id"], first["id"]);
}

#[tokio::test]
async fn stop_errors_map_to_404_and_409() {
    let server = TestServer::spawn("api_stop_errors").await;
    let client = reqwest::Client::new();

    let res = client
        .patch(server.url("/sessions/no-such-id/stop"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let started: Value = client
        .post(server.url("/sessions/start"))
        .json(&json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = started["id"].as_str().unwrap();

    let res = client
        .patch(server.url(&format!("/sessions/{id}/stop")))
        .json(&json!({ "note": "done" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let stopped: Value = res.json().await.unwrap();
    assert_eq!(stopped["note"], "done");

    // Idempotent stop is explicitly rejected.
    let res = client
        .patch(server.url(&format!("/sessions/{id}/stop")))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn note_length_is_capped_at_500() {
    let server = TestServer::spawn("api_note_cap").await;
    let client = reqwest::Client::new();

    let too_long = "x".repeat(501);
    let res = client
        .post(server.url("/sessions/start"))
        .json(&json!({ "note": too_long }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert!(body["fieldErrors"]["note"].is_array());

    // Same cap on manual entry.
    let res = client
        .post(server.url("/sessions/manual"))
        .json(&json!({ "started_at": 1, "ended_at": 2, "note": "y".repeat(501) }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Exactly 500 characters is accepted.
    let res = client
        .post(server.url("/sessions/start"))
        .json(&json!({ "note": "z".repeat(500) }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn malformed_json_body_is_400() {
    let server = TestServer::spawn("api_bad_json").await;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/sessions/start"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn manual_session_validation() {
    let server = TestServer::spawn("api_manual_validation").await;
    let client = reqwest::Client::new();

    // Missing ended_at.
    let res = client
        .post(server.url("/sessions/manual"))
        .json(&json!({ "started_at": 1000 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert!(body["fieldErrors"]["ended_at"].is_array());

    // Zero-duration session.
    let res = client
        .post(server.url("/sessions/manual"))
        .json(&json!({ "started_at": 1000, "ended_at": 1000 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Negative duration.
    let res = client
        .post(server.url("/sessions/manual"))
        .json(&json!({ "started_at": 2000, "ended_at": 1000 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Nothing was written.
    let sessions: Value = client
        .get(server.url("/sessions"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(sessions.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn manual_hour_counts_sixty_minutes() {
    let server = TestServer::spawn("api_manual_hour").await;
    let client = reqwest::Client::new();

    let now = chrono::Utc::now().timestamp_millis();
    let res = client
        .post(server.url("/sessions/manual"))
        .json(&json!({ "started_at": now - 3_600_000, "ended_at": now }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let session: Value = res.json().await.unwrap();
    assert_eq!(session["ended_at"].as_i64().unwrap(), now);

    let sessions: Value = client
        .get(server.url("/sessions"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(sessions.as_array().unwrap().len(), 1);

    let summary: Value = client
        .get(server.url("/summary"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(summary["totalMinutes"].as_i64().unwrap(), 60);
    assert_eq!(summary["balanceMinutes"].as_i64().unwrap(), 60);
}

#[tokio::test]
async fn sessions_list_is_newest_first_and_range_filtered() {
    let server = TestServer::spawn("api_list_range").await;
    let client = reqwest::Client::new();

    for (start, end) in [(1_000, 61_000), (2_000, 62_000), (3_000, 63_000)] {
        let res = client
            .post(server.url("/sessions/manual"))
            .json(&json!({ "started_at": start, "ended_at": end }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let sessions: Value = client
        .get(server.url("/sessions"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let starts: Vec<i64> = sessions
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["started_at"].as_i64().unwrap())
        .collect();
    assert_eq!(starts, vec![3_000, 2_000, 1_000]);

    // Non-numeric bounds are a validation failure with the JSON error
    // shape, not a plain-text rejection.
    let res = client
        .get(server.url("/sessions?from=abc"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation failed");
    assert!(body["fieldErrors"]["query"].is_array());

    // Bounds are inclusive on both ends.
    let filtered: Value = client
        .get(server.url("/sessions?from=2000&to=3000"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let starts: Vec<i64> = filtered
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["started_at"].as_i64().unwrap())
        .collect();
    assert_eq!(starts, vec![3_000, 2_000]);
}

#[tokio::test]
async fn delete_session_including_running_one() {
    let server = TestServer::spawn("api_delete_session").await;
    let client = reqwest::Client::new();

    let res = client
        .delete(server.url("/sessions/no-such-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let started: Value = client
        .post(server.url("/sessions/start"))
        .json(&json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = started["id"].as_str().unwrap();

    // A running session may be deleted.
    let res = client
        .delete(server.url(&format!("/sessions/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let active: Value = client
        .get(server.url("/sessions/active"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(active.is_null());

    let res = client
        .delete(server.url(&format!("/sessions/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn withdrawal_lifecycle_updates_balance() {
    let server = TestServer::spawn("api_withdrawals").await;
    let client = reqwest::Client::new();

    // Bank two hours first.
    let now = chrono::Utc::now().timestamp_millis();
    client
        .post(server.url("/sessions/manual"))
        .json(&json!({ "started_at": now - 7_200_000, "ended_at": now }))
        .send()
        .await
        .unwrap();

    let res = client
        .post(server.url("/withdrawals"))
        .json(&json!({ "minutes": 60, "reason": "left early" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let res = client
        .post(server.url("/withdrawals"))
        .json(&json!({ "minutes": 30 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let second: Value = res.json().await.unwrap();

    // Newest first.
    let listed: Value = client
        .get(server.url("/withdrawals"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], second["id"]);

    // withdrawnMinutes goes 60 -> 90 -> 60 across create/delete.
    let summary: Value = client
        .get(server.url("/summary"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(summary["withdrawnMinutes"].as_i64().unwrap(), 90);
    assert_eq!(summary["totalMinutes"].as_i64().unwrap(), 120);
    assert_eq!(summary["balanceMinutes"].as_i64().unwrap(), 30);

    let id = second["id"].as_str().unwrap();
    let res = client
        .delete(server.url(&format!("/withdrawals/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .delete(server.url(&format!("/withdrawals/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let summary: Value = client
        .get(server.url("/summary"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(summary["withdrawnMinutes"].as_i64().unwrap(), 60);
    assert_eq!(summary["balanceMinutes"].as_i64().unwrap(), 60);
}

#[tokio::test]
async fn withdrawal_requires_positive_minutes() {
    let server = TestServer::spawn("api_withdrawal_validation").await;
    let client = reqwest::Client::new();

    for body in [json!({}), json!({ "minutes": 0 }), json!({ "minutes": -5 })] {
        let res = client
            .post(server.url("/withdrawals"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = res.json().await.unwrap();
        assert!(body["fieldErrors"]["minutes"].is_array());
    }

    let listed: Value = client
        .get(server.url("/withdrawals"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn export_csv_attachment() {
    let server = TestServer::spawn("api_export_csv").await;
    let client = reqwest::Client::new();

    let now = chrono::Utc::now().timestamp_millis();
    client
        .post(server.url("/sessions/manual"))
        .json(&json!({ "started_at": now - 3_600_000, "ended_at": now, "note": "csv row" }))
        .send()
        .await
        .unwrap();

    let res = client
        .get(server.url("/export?format=csv"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["content-type"].to_str().unwrap(),
        "text/csv"
    );
    assert!(res.headers()["content-disposition"]
        .to_str()
        .unwrap()
        .contains("overtime-sessions.csv"));

    let body = res.text().await.unwrap();
    assert!(body.contains("Duration (minutes)"));
    assert!(body.contains("csv row"));
    assert!(body.contains("1h"));
}

#[tokio::test]
async fn export_defaults_to_xlsx() {
    let server = TestServer::spawn("api_export_xlsx").await;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/export")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["content-type"].to_str().unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );

    // XLSX is a ZIP container.
    let bytes = res.bytes().await.unwrap();
    assert!(bytes.starts_with(b"PK"));
}
