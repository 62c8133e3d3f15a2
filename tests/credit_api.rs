//! End-to-end tests driving the API router over the in-memory stores.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::{Months, Utc};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use credit_application_system::{
    AppState, router,
    services::{credit_service::CreditService, customer_service::CustomerService},
    stores::memory::{InMemoryCreditStore, InMemoryCustomerStore},
};

fn app() -> Router {
    let customers = CustomerService::new(Arc::new(InMemoryCustomerStore::default()));
    let credits = CreditService::new(Arc::new(InMemoryCreditStore::default()), customers.clone());

    router(AppState { customers, credits })
}

/// Send one request and return (status, parsed JSON body).
///
/// Empty bodies (e.g. 204) come back as `Value::Null`.
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

fn signup_body(cpf: &str, email: &str) -> Value {
    json!({
        "firstName": "Amanda",
        "lastName": "Queiroz",
        "cpf": cpf,
        "email": email,
        "password": "12345",
        "income": 1000,
        "zipCode": "12345",
        "street": "Rua da Amanda"
    })
}

/// Create a customer and return its id.
async fn signup(app: &Router, cpf: &str, email: &str) -> i64 {
    let (status, body) = send(app, "POST", "/api/customers", Some(signup_body(cpf, email))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

fn credit_body(customer_id: i64, months_out: u32) -> Value {
    let day_first_installment = Utc::now().date_naive() + Months::new(months_out);
    json!({
        "creditValue": 1000,
        "dayFirstInstallment": day_first_installment.to_string(),
        "numberOfInstallments": 5,
        "customerId": customer_id
    })
}

#[tokio::test]
async fn create_credit_returns_created_record() {
    let app = app();
    let customer_id = signup(&app, "28475934625", "amanda@example.com").await;

    let (status, body) = send(&app, "POST", "/api/credits", Some(credit_body(customer_id, 1))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], json!("IN_PROGRESS"));
    assert_eq!(body["numberOfInstallments"], json!(5));
    assert_eq!(body["creditValue"], json!("1000"));
    assert_eq!(body["emailCustomer"], json!("amanda@example.com"));
    assert_eq!(body["incomeCustomer"], json!("1000"));
    // generated, non-empty credit code
    let credit_code = body["creditCode"].as_str().unwrap();
    assert!(Uuid::parse_str(credit_code).is_ok());
}

#[tokio::test]
async fn create_credit_rejects_installment_beyond_three_months() {
    let app = app();
    let customer_id = signup(&app, "28475934625", "amanda@example.com").await;

    let (status, body) = send(&app, "POST", "/api/credits", Some(credit_body(customer_id, 4))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], json!("invalid_installment_date"));
}

#[tokio::test]
async fn create_credit_for_unknown_customer_is_not_found() {
    let app = app();

    let (status, body) = send(&app, "POST", "/api/credits", Some(credit_body(99, 1))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], json!("customer_not_found"));
}

#[tokio::test]
async fn list_credits_returns_only_the_customers_credits() {
    let app = app();
    let amanda = signup(&app, "28475934625", "amanda@example.com").await;
    let camila = signup(&app, "93971134074", "camila@example.com").await;

    for _ in 0..2 {
        let (status, _) = send(&app, "POST", "/api/credits", Some(credit_body(amanda, 1))).await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let (status, _) = send(&app, "POST", "/api/credits", Some(credit_body(camila, 1))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "GET", &format!("/api/credits?customerId={amanda}"), None).await;

    assert_eq!(status, StatusCode::OK);
    let credits = body.as_array().unwrap();
    assert_eq!(credits.len(), 2);
    for credit in credits {
        assert!(credit["creditCode"].is_string());
        assert_eq!(credit["numberOfInstallments"], json!(5));
    }

    // a customer with no credits gets an empty list
    let (status, body) = send(&app, "GET", "/api/credits?customerId=999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn get_credit_by_code_enforces_ownership() {
    let app = app();
    let amanda = signup(&app, "28475934625", "amanda@example.com").await;
    let camila = signup(&app, "93971134074", "camila@example.com").await;

    let (_, created) = send(&app, "POST", "/api/credits", Some(credit_body(amanda, 1))).await;
    let credit_code = created["creditCode"].as_str().unwrap().to_string();

    // the owner sees the credit
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/credits/{credit_code}?customerId={amanda}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["creditCode"], json!(credit_code));
    assert_eq!(body["emailCustomer"], json!("amanda@example.com"));

    // another customer gets an ownership error, not a 404
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/credits/{credit_code}?customerId={camila}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("ownership_mismatch"));
}

#[tokio::test]
async fn get_credit_by_unknown_code_is_not_found() {
    let app = app();
    let amanda = signup(&app, "28475934625", "amanda@example.com").await;
    let unknown = Uuid::new_v4();

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/credits/{unknown}?customerId={amanda}"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], json!("credit_not_found"));
}

#[tokio::test]
async fn customer_lifecycle() {
    let app = app();
    let id = signup(&app, "28475934625", "amanda@example.com").await;

    // fetch
    let (status, body) = send(&app, "GET", &format!("/api/customers/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], json!("amanda@example.com"));
    assert!(body.get("password").is_none());
    assert!(body.get("passwordHash").is_none());

    // update
    let patch = json!({
        "firstName": "Ana",
        "lastName": "Souza",
        "income": 2500,
        "zipCode": "99999",
        "street": "Rua Nova"
    });
    let (status, body) = send(&app, "PATCH", &format!("/api/customers/{id}"), Some(patch)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstName"], json!("Ana"));
    assert_eq!(body["income"], json!("2500"));
    // identity fields survive the update
    assert_eq!(body["cpf"], json!("28475934625"));

    // delete, then the customer is gone
    let (status, _) = send(&app, "DELETE", &format!("/api/customers/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", &format!("/api/customers/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], json!("customer_not_found"));

    let (status, _) = send(&app, "DELETE", &format!("/api/customers/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
