use serde_json::json;

use super::*;

// =============================================================
// Wire shapes
// =============================================================

#[test]
fn suggestion_request_uses_camel_case() {
    let req = SuggestionRequest { design_type: DesignType::Tent, parameters: json!({"guests": 120}) };
    assert_eq!(serde_json::to_value(&req).unwrap(), json!({"designType": "tent", "parameters": {"guests": 120}}));
}

#[test]
fn suggestion_response_decodes() {
    let body = r#"{"success":true,"suggestions":"Put the bar near the exit.","designType":"room"}"#;
    let resp: SuggestionResponse = parse_response(200, body).unwrap();
    assert!(resp.success);
    assert_eq!(resp.design_type, DesignType::Room);
    assert_eq!(resp.suggestions, "Put the bar near the exit.");
}

#[test]
fn subscription_response_without_details() {
    let resp: SubscriptionCheckResponse = parse_response(200, r#"{"isActive":false}"#).unwrap();
    assert!(!resp.is_active);
    assert!(resp.subscription.is_none());
}

#[test]
fn subscription_request_shape() {
    let req = SubscriptionCheckRequest { email: "host@example.com".into() };
    assert_eq!(serde_json::to_value(&req).unwrap(), json!({"email": "host@example.com"}));
}

// =============================================================
// Errors
// =============================================================

#[test]
fn error_statuses_map_to_variants() {
    let body = r#"{"error":"Missing designType"}"#;
    let err = parse_response::<SuggestionResponse>(400, body).unwrap_err();
    assert!(matches!(&err, FunctionError::BadRequest(m) if m == "Missing designType"));
    assert_eq!(err.status(), Some(400));

    let err = parse_response::<SuggestionResponse>(405, r#"{"error":"Method not allowed"}"#).unwrap_err();
    assert!(matches!(err, FunctionError::MethodNotAllowed(_)));

    let err = parse_response::<SuggestionResponse>(500, r#"{"error":"upstream failed"}"#).unwrap_err();
    assert!(matches!(err, FunctionError::Server(_)));
}

#[test]
fn other_status_is_unexpected() {
    let err = parse_response::<SuggestionResponse>(502, "Bad Gateway\n").unwrap_err();
    assert!(matches!(&err, FunctionError::Unexpected { status: 502, message } if message == "Bad Gateway"));
    assert_eq!(err.status(), Some(502));
}

#[test]
fn user_message_passes_server_text() {
    let err = parse_response::<SuggestionResponse>(500, r#"{"error":"Quota exceeded"}"#).unwrap_err();
    assert_eq!(err.user_message(), "Quota exceeded");
}

#[test]
fn user_message_falls_back_when_empty() {
    let err = parse_response::<SuggestionResponse>(500, "").unwrap_err();
    assert_eq!(err.user_message(), "Something went wrong. Please try again.");
}

#[test]
fn malformed_success_body_is_decode_error() {
    let err = parse_response::<SuggestionResponse>(200, r#"{"success":true}"#).unwrap_err();
    assert!(matches!(err, FunctionError::Decode(_)));
    assert!(err.status().is_none());
    assert!(err.user_message().contains("unexpected response"));
}
