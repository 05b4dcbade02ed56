mod common;

use axum::http::{Method, StatusCode};
use base64::{engine::general_purpose, Engine as _};
use common::{build_app, list_ground, send, signup};

#[tokio::test]
async fn generates_upi_link_and_data_url() {
    let (app, _) = build_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/payments/upi-qrcode",
        None,
        Some(serde_json::json!({
            "upiId": "alice@bank",
            "name": "Alice",
            "amount": 500,
            "note": "Booking X",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(
        body["upiStr"],
        "upi://pay?pa=alice%40bank&pn=Alice&am=500&cu=INR&tn=Booking%20X"
    );

    let data_url = body["dataUrl"].as_str().unwrap();
    let encoded = data_url
        .strip_prefix("data:image/svg+xml;base64,")
        .unwrap();
    let svg = String::from_utf8(general_purpose::STANDARD.decode(encoded).unwrap()).unwrap();
    assert!(svg.contains("pa=alice%40bank"));
}

#[tokio::test]
async fn missing_upi_id_is_rejected() {
    let (app, _) = build_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/payments/upi-qrcode",
        None,
        Some(serde_json::json!({ "upiId": "", "amount": 500 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn missing_amount_gets_a_json_error() {
    let (app, _) = build_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/payments/upi-qrcode",
        None,
        Some(serde_json::json!({ "upiId": "a@b" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "UNPROCESSABLE_ENTITY");
    assert!(body["message"].as_str().unwrap().contains("amount"));
}

#[tokio::test]
async fn ground_payment_code_pays_the_owner() {
    let (app, _) = build_app();
    let owner = signup(&app, "Olivia", "owner", Some("olivia@upi")).await;
    let ground_id = list_ground(&app, &owner, "Green Turf", 1200).await;

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/grounds/{ground_id}/payment-qrcode"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(
        body["upiStr"],
        "upi://pay?pa=olivia%40upi&pn=Olivia&am=1200&cu=INR&tn=Booking%20Green%20Turf"
    );

    // UPI ID のないオーナーのグラウンドには QR を出さない
    let other = signup(&app, "Omar", "owner", None).await;
    let ground_id = list_ground(&app, &other, "Dust Bowl", 300).await;
    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/v1/grounds/{ground_id}/payment-qrcode"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
