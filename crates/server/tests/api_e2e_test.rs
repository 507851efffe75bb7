//! End-to-end API tests
//!
//! Each test boots the full application (in-memory stores, in-process
//! rating channel, subscribed listener) on an ephemeral port and drives
//! it over HTTP.

use jobhub_adapters::AppConfig;
use jobhub_server::{api_router, build_state};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tokio::time::sleep;

async fn spawn_app() -> String {
    let config = AppConfig::default();
    let (state, _listener_handle) = build_state(&config).await.unwrap();
    let app = api_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

async fn create_company(client: &Client, base: &str, name: &str) -> i64 {
    let response = client
        .post(format!("{base}/api/companies"))
        .json(&json!({ "name": name, "description": "A workplace" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let company: Value = response.json().await.unwrap();
    company["id"].as_i64().unwrap()
}

async fn add_review(client: &Client, base: &str, company_id: i64, rating: f64) {
    let response = client
        .post(format!("{base}/api/reviews?companyId={company_id}"))
        .json(&json!({ "rating": rating, "content": "A review" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
}

/// Poll until the asynchronous rating refresh lands
async fn wait_for_rating(client: &Client, base: &str, company_id: i64) -> f64 {
    for _ in 0..100 {
        let company: Value = client
            .get(format!("{base}/api/companies/{company_id}"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        if let Some(rating) = company["rating"].as_f64() {
            return rating;
        }
        sleep(Duration::from_millis(20)).await;
    }
    panic!("rating was never refreshed for company {company_id}");
}

#[tokio::test]
async fn test_health_endpoint() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_review_creation_refreshes_company_rating() {
    let base = spawn_app().await;
    let client = Client::new();

    let company_id = create_company(&client, &base, "Acme").await;
    add_review(&client, &base, company_id, 4.0).await;
    add_review(&client, &base, company_id, 2.0).await;

    let rating = wait_for_rating(&client, &base, company_id).await;
    assert!((rating - 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_job_get_is_enriched_with_company_and_reviews() {
    let base = spawn_app().await;
    let client = Client::new();

    let company_id = create_company(&client, &base, "Acme").await;
    add_review(&client, &base, company_id, 4.0).await;
    add_review(&client, &base, company_id, 2.0).await;

    let response = client
        .post(format!("{base}/api/jobs"))
        .json(&json!({
            "title": "Backend Engineer",
            "description": "Builds services",
            "minSalary": 60000.0,
            "maxSalary": 90000.0,
            "location": "Madrid",
            "companyId": company_id,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let job: Value = response.json().await.unwrap();
    let job_id = job["id"].as_i64().unwrap();

    let details: Value = client
        .get(format!("{base}/api/jobs/{job_id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(details["company"]["name"], "Acme");
    assert_eq!(details["reviews"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_double_soft_delete_reports_no_state_change() {
    let base = spawn_app().await;
    let client = Client::new();

    let company_id = create_company(&client, &base, "Acme").await;

    let first = client
        .delete(format!("{base}/api/companies/{company_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), 200);
    assert_eq!(first.text().await.unwrap(), "Company deleted successfully");

    let second = client
        .delete(format!("{base}/api/companies/{company_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), 200);
    assert_eq!(second.text().await.unwrap(), "Company already deleted");

    let company: Value = client
        .get(format!("{base}/api/companies/{company_id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(company["deleted"], true);
}

#[tokio::test]
async fn test_average_rating_endpoint_both_spellings() {
    let base = spawn_app().await;
    let client = Client::new();

    let company_id = create_company(&client, &base, "Acme").await;
    add_review(&client, &base, company_id, 5.0).await;
    add_review(&client, &base, company_id, 3.0).await;

    let public: f64 = client
        .get(format!(
            "{base}/api/reviews/averagerating?companyId={company_id}"
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let internal: f64 = client
        .get(format!(
            "{base}/api/reviews/averageRating?companyId={company_id}"
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!((public - 4.0).abs() < 1e-9);
    assert_eq!(public, internal);
}

#[tokio::test]
async fn test_average_rating_without_reviews_is_zero() {
    let base = spawn_app().await;
    let client = Client::new();

    let company_id = create_company(&client, &base, "Quiet Co").await;
    let average: f64 = client
        .get(format!(
            "{base}/api/reviews/averagerating?companyId={company_id}"
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(average, 0.0);
}

#[tokio::test]
async fn test_missing_resources_answer_404() {
    let base = spawn_app().await;
    let client = Client::new();

    let company = client
        .get(format!("{base}/api/companies/999"))
        .send()
        .await
        .unwrap();
    assert_eq!(company.status(), 404);

    let job_update = client
        .put(format!("{base}/api/jobs/999"))
        .json(&json!({
            "title": "Ghost",
            "description": "",
            "minSalary": 1.0,
            "maxSalary": 2.0,
            "location": "",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(job_update.status(), 404);

    let review = client
        .delete(format!("{base}/api/reviews/999"))
        .send()
        .await
        .unwrap();
    assert_eq!(review.status(), 404);
}

#[tokio::test]
async fn test_inverted_salary_range_is_rejected() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("{base}/api/jobs"))
        .json(&json!({
            "title": "Backend Engineer",
            "description": "Builds services",
            "minSalary": 90000.0,
            "maxSalary": 60000.0,
            "location": "Madrid",
            "companyId": 1,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let jobs: Value = client
        .get(format!("{base}/api/jobs"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(jobs.as_array().unwrap().is_empty());
}
