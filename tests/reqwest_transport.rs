use rust_decimal::Decimal;
use unifonic::{AppSid, SendSmsOptions, UnifonicClient, UnifonicError};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> UnifonicClient {
    UnifonicClient::builder(AppSid::new("sid-1").unwrap())
        .endpoint(format!("{}/rest", server.uri()))
        .user_agent("unifonic-tests")
        .build()
        .unwrap()
}

fn envelope(data: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(
        format!(r#"{{"success": "true", "message": "", "errorCode": "ER-00", "data": {data}}}"#),
        "application/json",
    )
}

#[tokio::test]
async fn send_posts_form_with_credential_to_resource_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/Messages/Send"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("AppSid=sid-1"))
        .and(body_string_contains("Recipient=962788888888"))
        .and(body_string_contains("Body=Test"))
        .respond_with(envelope(
            r#"{"MessageID": "3185", "Status": "Sent", "Cost": "0.05"}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .send_sms_message("962788888888", "Test", SendSmsOptions::default())
        .await
        .unwrap();
    assert_eq!(result.message.message_id.as_deref(), Some("3185"));
    assert_eq!(result.cost, Decimal::new(5, 2));
}

#[tokio::test]
async fn get_senders_unwraps_list_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/Account/GetSenderIDs"))
        .respond_with(envelope(
            r#"{"SenderNames": [{"SenderID": "Unifonic", "Status": "Approved"}]}"#,
        ))
        .mount(&server)
        .await;

    let senders = client_for(&server).get_senders().await.unwrap();
    assert_eq!(senders.len(), 1);
    assert_eq!(senders[0].sender_id.as_deref(), Some("Unifonic"));
}

#[tokio::test]
async fn envelope_failure_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/Account/GetBalance"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"success": false, "message": "Invalid AppSid", "errorCode": "ER-01"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let err = client_for(&server).get_balance().await.unwrap_err();
    match err {
        UnifonicError::Api {
            error_code,
            message,
        } => {
            assert_eq!(error_code.as_str(), "ER-01");
            assert_eq!(message.as_deref(), Some("Invalid AppSid"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn server_error_keeps_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_balance().await.unwrap_err();
    match err {
        UnifonicError::HttpStatus { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body.as_deref(), Some("bad gateway"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn pricing_is_reshaped_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/Messages/Pricing"))
        .and(body_string_contains("CountryCode=SA"))
        .respond_with(envelope(
            r#"{"SA": {"STC": {"CountryCode": "966", "Cost": "0.05", "CurrencyCode": "SAR"}}}"#,
        ))
        .mount(&server)
        .await;

    let countries = client_for(&server)
        .messages_pricing(Some("SA"))
        .await
        .unwrap();
    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0].operators[0].operator_name, "STC");
    assert_eq!(countries[0].operators[0].cost, Decimal::new(5, 2));
}

#[tokio::test]
async fn validation_failure_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(envelope("{}"))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server).add_sender("").await.unwrap_err();
    assert!(matches!(err, UnifonicError::Validation(_)));
}
