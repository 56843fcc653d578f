//! Service booking endpoint integration tests
//! Run: cargo test -p club-server --test booking_api

use axum::body::Body;
use club_server::{Config, ServerState, api};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn test_app() -> (axum::Router, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(tmp.path().to_string_lossy(), 0);
    let state = ServerState::initialize(&config).await.unwrap();
    (api::build_app().with_state(state), tmp)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

const CREATE_BOOKING: &str = "/api/method/club_management.api.create_service_booking";

async fn book(app: &axum::Router, payload: Value) -> Value {
    let response = app
        .clone()
        .oneshot(post_json(CREATE_BOOKING, payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

/// Seed a customer account and two catalog items
async fn seed(app: &axum::Router) {
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/method/club_management.api.create_customer",
            json!({"full_name": "Asha Nair", "email": "asha@example.com", "phone": "+91-9000000001"}),
        ))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["message"]["success"], json!(true));

    for (code, name, rate) in [("DOUBLE-ROOM", "Double Room", 500.0), ("SPA-01", "Spa Session", 100.0)] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/service-items",
                json!({"item_code": code, "item_name": name, "rate": rate}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn booking_creates_draft_quotation_with_day_based_qty() {
    let (app, _tmp) = test_app().await;
    seed(&app).await;

    let body = book(
        &app,
        json!({
            "item_codes": ["DOUBLE-ROOM", "SPA-01"],
            "from_date": "2026-11-22",
            "to_date": "2026-11-24",
            "number_of_people": 2,
            "email": "asha@example.com"
        }),
    )
    .await;
    let message = &body["message"];
    assert_eq!(message["success"], json!(true));
    assert_eq!(message["message"], json!("Service booking created successfully"));
    assert!(message["booking"].as_str().unwrap().starts_with("QTN-"));
    assert!(message["customer"].as_str().unwrap().starts_with("CUST-"));

    // The backing quotation: 3 inclusive days, qty = days, rate per day
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/quotations")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let quotations = body_json(response).await;
    assert_eq!(quotations.as_array().unwrap().len(), 1);
    assert_eq!(quotations[0]["grand_total"], json!(1800.0));
    let id = quotations[0]["id"].as_i64().unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/quotations/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let detail = body_json(response).await;
    let items = detail["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["qty"], json!(3.0));
    assert_eq!(
        items[0]["description"],
        json!("Double Room for 2 Occupants from 22-11-2026 till 24-11-2026")
    );
    assert_eq!(detail["valid_till"], json!("2026-11-22"));
}

#[tokio::test]
async fn single_item_code_fallback_is_accepted() {
    let (app, _tmp) = test_app().await;
    seed(&app).await;

    let body = book(
        &app,
        json!({
            "item_code": "SPA-01",
            "from_date": "2026-11-22",
            "to_date": "2026-11-22",
            "number_of_people": 1,
            "email": "asha@example.com"
        }),
    )
    .await;
    assert_eq!(body["message"]["success"], json!(true));

    // Same-day stay counts as one day
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/quotations")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let quotations = body_json(response).await;
    assert_eq!(quotations[0]["grand_total"], json!(100.0));
}

#[tokio::test]
async fn booking_validation_errors_are_reported_in_payload() {
    let (app, _tmp) = test_app().await;
    seed(&app).await;

    let cases = [
        (json!({}), "At least one service item is required"),
        (
            json!({"item_codes": ["SPA-01"]}),
            "From Date is required",
        ),
        (
            json!({"item_codes": ["SPA-01"], "from_date": "2026-11-22"}),
            "To Date is required",
        ),
        (
            json!({"item_codes": ["SPA-01"], "from_date": "2026-11-22", "to_date": "2026-11-24"}),
            "Number Of People is required",
        ),
        (
            json!({"item_codes": ["SPA-01"], "from_date": "2026-11-24", "to_date": "2026-11-22", "number_of_people": 1}),
            "To Date must be after or equal to From Date",
        ),
        (
            json!({"item_codes": ["SPA-01"], "from_date": "garbage", "to_date": "2026-11-22", "number_of_people": 1}),
            "Invalid date format, expected YYYY-MM-DD",
        ),
    ];

    for (payload, expected) in cases {
        let body = book(&app, payload).await;
        assert_eq!(body["message"]["success"], json!(false));
        assert_eq!(body["message"]["error"], json!(expected));
    }
}

#[tokio::test]
async fn booking_requires_known_customer_and_catalog_items() {
    let (app, _tmp) = test_app().await;
    seed(&app).await;

    let body = book(
        &app,
        json!({
            "item_codes": ["SPA-01"],
            "from_date": "2026-11-22",
            "to_date": "2026-11-24",
            "number_of_people": 1,
            "email": "stranger@example.com"
        }),
    )
    .await;
    assert_eq!(body["message"]["success"], json!(false));
    assert_eq!(
        body["message"]["error"],
        json!("Customer account not found. Please contact support.")
    );

    let body = book(
        &app,
        json!({
            "item_codes": ["NO-SUCH-ITEM"],
            "from_date": "2026-11-22",
            "to_date": "2026-11-24",
            "number_of_people": 1,
            "email": "asha@example.com"
        }),
    )
    .await;
    assert_eq!(body["message"]["success"], json!(false));
    assert_eq!(
        body["message"]["error"],
        json!("Service item 'NO-SUCH-ITEM' not found")
    );
}
