use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use payment_cell::client::payment_signature;
use payment_cell::{PaymentError, PaymentGateway, RazorpayClient};
use shared_utils::test_utils::{MockRazorpayResponses, TestConfig};

async fn client_for(server: &MockServer) -> RazorpayClient {
    let config = TestConfig::default().with_razorpay_base_url(&format!("{}/v1", server.uri()));
    RazorpayClient::new(&config.to_app_config())
}

#[tokio::test]
async fn creates_orders_with_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .and(basic_auth("rzp_test_key", "rzp_test_secret"))
        .and(body_json(json!({
            "amount": 50000,
            "currency": "INR",
            "receipt": "order_65f1c0ffee0000000000abcd"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockRazorpayResponses::order_response("order_Nx1", 50000, "order_65f1c0ffee0000000000abcd"),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let order_id = client
        .create_order(50000, "INR", "order_65f1c0ffee0000000000abcd")
        .await
        .unwrap();
    assert_eq!(order_id, "order_Nx1");
}

#[tokio::test]
async fn surfaces_gateway_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .respond_with(ResponseTemplate::new(400).set_body_json(
            MockRazorpayResponses::error_response("BAD_REQUEST_ERROR", "The amount must be atleast INR 1.00"),
        ))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.create_order(10, "INR", "order_x").await.unwrap_err();
    assert_matches!(
        err,
        PaymentError::Api { status: 400, ref message } if message == "The amount must be atleast INR 1.00"
    );
}

#[tokio::test]
async fn order_without_id_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "created"})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_matches!(
        client.create_order(100, "INR", "order_x").await,
        Err(PaymentError::MissingField("id"))
    );
}

#[tokio::test]
async fn unconfigured_client_refuses_orders() {
    let mut config = TestConfig::default().to_app_config();
    config.razorpay_key_id = String::new();
    let client = RazorpayClient::new(&config);
    assert_matches!(
        client.create_order(100, "INR", "order_x").await,
        Err(PaymentError::NotConfigured)
    );
}

#[tokio::test]
async fn fetches_payments_and_refunds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/payments/pay_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockRazorpayResponses::payment_response("pay_1", "order_1", "captured"),
        ))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/payments/pay_1/refund"))
        .and(body_json(json!({"amount": 20000})))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockRazorpayResponses::refund_response("rfnd_1", "pay_1", 20000),
        ))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let payment = client.fetch_payment("pay_1").await.unwrap();
    assert_eq!(payment["status"], "captured");
    assert_eq!(client.refund_payment("pay_1", 20000).await.unwrap(), "rfnd_1");
}

#[tokio::test]
async fn verifies_checkout_signatures() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    let signature = payment_signature("rzp_test_secret", "order_1", "pay_1").unwrap();
    assert!(client.verify_payment_signature("order_1", "pay_1", &signature).is_ok());
    assert!(client.verify_signature("order_1", "pay_1", &signature).is_ok());

    assert_matches!(
        client.verify_payment_signature("order_1", "pay_2", &signature),
        Err(PaymentError::InvalidSignature)
    );
    assert_matches!(
        client.verify_payment_signature("order_1", "pay_1", "not-hex"),
        Err(PaymentError::InvalidSignature)
    );
}

#[test]
fn signatures_are_lowercase_hex() {
    let signature = payment_signature("secret", "order_1", "pay_1").unwrap();
    assert_eq!(signature.len(), 64);
    assert!(signature.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}
