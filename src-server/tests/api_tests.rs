//! End-to-end API tests: the real router on an ephemeral port, driven over
//! HTTP.

use std::sync::Arc;

use serde_json::{json, Value};

use wealthtrack_server::main_lib::{app, AppState};

async fn spawn_server() -> String {
    let state = Arc::new(AppState::new());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.expect("serve");
    });
    format!("http://{addr}/api")
}

#[tokio::test]
async fn test_goal_crud_round_trip() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    // Create
    let created: Value = client
        .post(format!("{base}/goals"))
        .json(&json!({ "title": "Emergency Fund", "targetAmount": 100000, "savedAmount": 25000 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["targetAmount"], json!(100000.0));

    // List
    let goals: Value = client
        .get(format!("{base}/goals"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(goals.as_array().unwrap().len(), 1);

    // Patch
    let updated: Value = client
        .patch(format!("{base}/goals/{id}"))
        .json(&json!({ "savedAmount": 60000 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["savedAmount"], json!(60000.0));

    // Add money past the target clamps and completes
    let topped: Value = client
        .post(format!("{base}/goals/{id}/add-money"))
        .json(&json!({ "amount": 90000 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(topped["savedAmount"], json!(100000.0));
    assert_eq!(topped["isCompleted"], json!(true));

    // Delete
    let status = client
        .delete(format!("{base}/goals/{id}"))
        .send()
        .await
        .unwrap()
        .status();
    assert_eq!(status.as_u16(), 204);

    let missing = client
        .delete(format!("{base}/goals/{id}"))
        .send()
        .await
        .unwrap()
        .status();
    assert_eq!(missing.as_u16(), 404);
}

#[tokio::test]
async fn test_create_rejects_blank_title() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let status = client
        .post(format!("{base}/goals"))
        .json(&json!({ "title": "  ", "targetAmount": 1000 }))
        .send()
        .await
        .unwrap()
        .status();
    assert_eq!(status.as_u16(), 400);
}

#[tokio::test]
async fn test_summary_and_recommendations() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    for (title, target, saved) in [("A", 100_000, 25_000), ("B", 50_000, 50_000)] {
        client
            .post(format!("{base}/goals"))
            .json(&json!({ "title": title, "targetAmount": target, "savedAmount": saved }))
            .send()
            .await
            .unwrap();
    }

    let summary: Value = client
        .get(format!("{base}/insights/summary"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(summary["totalTarget"], json!(150000.0));
    assert_eq!(summary["totalSaved"], json!(75000.0));
    assert_eq!(summary["progressPct"], json!(50));

    let recs: Value = client
        .get(format!("{base}/insights/recommendations"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let recs = recs.as_array().unwrap();
    assert!(recs[0]["title"].as_str().unwrap().contains('A'));
    assert_eq!(recs.last().unwrap()["tag"], json!("Safety"));
}

#[tokio::test]
async fn test_trend_is_marked_illustrative() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let trend: Value = client
        .get(format!("{base}/insights/trend"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(trend["illustrative"], json!(true));
    assert_eq!(trend["points"].as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn test_planner_endpoints() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let emi: Value = client
        .get(format!(
            "{base}/planner/emi?principal=500000&annual_rate_pct=10&term_years=5"
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(emi["monthlyInstallment"], json!(10624));
    assert_eq!(emi["totalInterest"], json!(137440));

    let sip: Value = client
        .get(format!(
            "{base}/planner/sip?monthly=5000&years=10&annual_rate_pct=12"
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(sip["invested"], json!(600000));
    assert_eq!(sip["futureValue"], json!(1161695));
    assert_eq!(sip["series"]["points"].as_array().unwrap().len(), 24);

    let sim: Value = client
        .get(format!(
            "{base}/planner/simulate?monthly=5000&months=12&annual_rate_pct=0"
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(sim["futureValue"], json!(60000));

    let retirement: Value = client
        .get(format!("{base}/planner/retirement"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(retirement["yearsToRetirement"], json!(38));
    assert_eq!(retirement["corpusNeeded"], json!(109851000));
}
