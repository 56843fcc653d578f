//! Guest onboarding, room sync and agreement flow integration tests
//! Run: cargo test -p club-server --test guest_flow

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

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_guest(app: &axum::Router, payload: Value) -> Value {
    let response = app
        .clone()
        .oneshot(post_json("/api/guests", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

async fn create_room(app: &axum::Router, room_number: &str) -> Value {
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/rooms",
            json!({"room_number": room_number, "room_type": "Deluxe"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[tokio::test]
async fn check_in_then_check_out_updates_status() {
    let (app, _tmp) = test_app().await;

    let guest = create_guest(&app, json!({"guest": "Asha Nair"})).await;
    assert_eq!(guest["status"], json!("Pending"));
    let id = guest["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/guests/{id}/check-in"),
            json!({"time": "14:30:00"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], json!("Checked In"));
    assert_eq!(body["check_in_time"], json!("14:30:00"));

    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/guests/{id}/check-out"),
            json!({"time": "10:00:00"}),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["status"], json!("Checked Out"));
    // Both timestamps remain on the record
    assert_eq!(body["check_in_time"], json!("14:30:00"));
    assert_eq!(body["check_out_time"], json!("10:00:00"));

    // Persisted, not just echoed
    let response = app
        .oneshot(get(&format!("/api/guests/{id}")))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["status"], json!("Checked Out"));
}

#[tokio::test]
async fn late_checkout_raises_surcharge_notice() {
    let (app, _tmp) = test_app().await;

    let guest = create_guest(&app, json!({"guest": "Asha Nair"})).await;
    let id = guest["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/guests/{id}/check-in"),
            json!({"time": "14:00:00"}),
        ))
        .await
        .unwrap();
    assert!(body_json(response).await["notices"]
        .as_array()
        .unwrap()
        .is_empty());

    let response = app
        .oneshot(post_json(
            &format!("/api/guests/{id}/check-out"),
            json!({"time": "12:30:00"}),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    let notices = body["notices"].as_array().unwrap();
    assert_eq!(notices.len(), 1);
    assert!(
        notices[0]["message"]
            .as_str()
            .unwrap()
            .contains("1 extra day")
    );
}

#[tokio::test]
async fn room_assignment_syncs_occupancy() {
    let (app, _tmp) = test_app().await;

    let room = create_room(&app, "101").await;
    assert_eq!(room["status"], json!("Vacant"));
    let room_id = room["id"].as_i64().unwrap();

    let guest = create_guest(
        &app,
        json!({"guest": "Asha Nair", "rfid_card_code": "RF-7781"}),
    )
    .await;
    let guest_id = guest["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/guests/{guest_id}/room"),
            json!({"room_number": "101"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["room_number"], json!("101"));
    let notices = body["notices"].as_array().unwrap();
    assert!(
        notices
            .iter()
            .any(|n| n["message"].as_str().unwrap().contains("Room 101"))
    );

    // The referenced room carries the three synced fields
    let response = app
        .oneshot(get(&format!("/api/rooms/{room_id}")))
        .await
        .unwrap();
    let room = body_json(response).await;
    assert_eq!(room["status"], json!("Occupied"));
    assert_eq!(room["current_guest"], json!(guest_id));
    assert_eq!(room["rfid_key"], json!("RF-7781"));
}

#[tokio::test]
async fn room_sync_failure_blocks_but_keeps_guest_record() {
    let (app, _tmp) = test_app().await;

    let guest = create_guest(&app, json!({"guest": "Asha Nair"})).await;
    let id = guest["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/guests/{id}/room"),
            json!({"room_number": "404"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["code"], json!("E0005"));

    // No rollback: the assignment stays on the guest record
    let response = app
        .oneshot(get(&format!("/api/guests/{id}")))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["room_number"], json!("404"));
}

#[tokio::test]
async fn foreign_passport_guest_needs_passport_and_visa() {
    let (app, _tmp) = test_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/guests",
            json!({
                "guest": "Hans Weber",
                "nationality": "Germany",
                "id_proof_type": "Passport"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], json!("E0002"));
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("Passport and Visa details are mandatory")
    );

    // Indian guests with a passport are not affected by the rule
    let response = app
        .oneshot(post_json(
            "/api/guests",
            json!({
                "guest": "Asha Nair",
                "nationality": "India",
                "id_proof_type": "Passport"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn quotation_flow_produces_saved_agreement() {
    let (app, _tmp) = test_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/quotations",
            json!({
                "customer_name": "Rahul Mehta",
                "transaction_date": "2026-08-01",
                "valid_till": "2026-09-01",
                "items": [
                    {"item_code": "GOLD-MEMBERSHIP", "item_name": "Gold Membership", "qty": 1.0, "rate": 1200.0},
                    {"item_code": "SPA-PACK", "item_name": "Spa Package", "qty": 3.0, "rate": 100.0}
                ]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let quotation = body_json(response).await;
    assert_eq!(quotation["grand_total"], json!(1500.0));
    assert!(quotation["name"].as_str().unwrap().starts_with("QTN-"));
    let quotation_id = quotation["id"].as_i64().unwrap();

    // The draft is a copy, nothing persisted yet
    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/quotations/{quotation_id}/agreement-draft"),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let draft = body_json(response).await;
    assert_eq!(draft["customer_name"], json!("Rahul Mehta"));
    assert_eq!(draft["agreement_date"], json!("2026-08-01"));
    assert_eq!(draft["items"].as_array().unwrap().len(), 2);

    let response = app
        .clone()
        .oneshot(get("/api/agreements"))
        .await
        .unwrap();
    assert!(body_json(response).await.as_array().unwrap().is_empty());

    // Explicit save
    let response = app
        .clone()
        .oneshot(post_json("/api/agreements", draft.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let agreement = body_json(response).await;
    assert!(agreement["name"].as_str().unwrap().starts_with("MA-"));
    assert_eq!(agreement["status"], json!("Draft"));
    assert_eq!(agreement["items"].as_array().unwrap().len(), 2);
    assert_eq!(agreement["grand_total"], json!(1500.0));

    // One active agreement per customer
    let response = app
        .oneshot(post_json("/api/agreements", draft))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["code"], json!("E0005"));
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("already has an active membership agreement")
    );
}

#[tokio::test]
async fn agreement_rule_keys_on_customer_link_not_display_name() {
    let (app, _tmp) = test_app().await;

    let draft = |customer_id: Value, customer_name: &str| {
        json!({
            "quotation_id": null,
            "customer_id": customer_id,
            "customer_name": customer_name,
            "agreement_date": "2026-08-01",
            "valid_till": "2027-08-01",
            "grand_total": 1200.0,
            "items": []
        })
    };

    // Two customers sharing a display name do not block each other
    let response = app
        .clone()
        .oneshot(post_json("/api/agreements", draft(json!(1), "Rahul Mehta")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(post_json("/api/agreements", draft(json!(2), "Rahul Mehta")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The same customer is still limited to one active agreement
    let response = app
        .clone()
        .oneshot(post_json("/api/agreements", draft(json!(1), "Rahul Mehta")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Unlinked drafts fall back to the display name
    let response = app
        .clone()
        .oneshot(post_json("/api/agreements", draft(json!(null), "Asha Nair")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(post_json("/api/agreements", draft(json!(null), "Asha Nair")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn service_items_filter_by_group_with_default() {
    let (app, _tmp) = test_app().await;

    for (code, name, group) in [
        ("SPA-01", "Spa Session", None),
        ("GYM-01", "Gym Day Pass", Some("Fitness")),
    ] {
        let mut payload = json!({"item_code": code, "item_name": name, "rate": 50.0});
        if let Some(group) = group {
            payload["item_group"] = json!(group);
        }
        let response = app
            .clone()
            .oneshot(post_json("/api/service-items", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // Default group is "Services"
    let response = app
        .clone()
        .oneshot(get("/api/service-items"))
        .await
        .unwrap();
    let items = body_json(response).await;
    assert_eq!(items.as_array().unwrap().len(), 1);
    assert_eq!(items[0]["item_code"], json!("SPA-01"));

    let response = app
        .oneshot(get("/api/service-items?group=Fitness"))
        .await
        .unwrap();
    let items = body_json(response).await;
    assert_eq!(items.as_array().unwrap().len(), 1);
    assert_eq!(items[0]["item_code"], json!("GYM-01"));
}
