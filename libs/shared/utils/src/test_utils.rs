use std::sync::Arc;

use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_database::ids::new_id;
use shared_models::auth::User;

use crate::jwt::issue_token;

pub struct TestConfig {
    pub jwt_secret: String,
    pub razorpay_key_id: String,
    pub razorpay_key_secret: String,
    pub razorpay_base_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "test-secret-key-for-jwt-validation-must-be-long-enough".to_string(),
            razorpay_key_id: "rzp_test_key".to_string(),
            razorpay_key_secret: "rzp_test_secret".to_string(),
            razorpay_base_url: "http://localhost:9999/v1".to_string(),
        }
    }
}

impl TestConfig {
    pub fn with_razorpay_base_url(mut self, base_url: &str) -> Self {
        self.razorpay_base_url = base_url.to_string();
        self
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            port: 0,
            environment: "test".to_string(),
            mongo_uri: "mongodb://localhost:27017".to_string(),
            database_name: "hsb_test".to_string(),
            storage_backend: "memory".to_string(),
            jwt_secret: self.jwt_secret.clone(),
            jwt_expiry_hours: 24,
            otp_ttl_minutes: 10,
            razorpay_key_id: self.razorpay_key_id.clone(),
            razorpay_key_secret: self.razorpay_key_secret.clone(),
            razorpay_base_url: self.razorpay_base_url.clone(),
            payment_currency: "INR".to_string(),
            shutdown_timeout_secs: 1,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct TestUser {
    pub id: String,
    pub email: String,
}

impl Default for TestUser {
    fn default() -> Self {
        Self::new("test@example.com")
    }
}

impl TestUser {
    pub fn new(email: &str) -> Self {
        Self {
            id: new_id(),
            email: email.to_string(),
        }
    }

    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            email: Some(self.email.clone()),
        }
    }
}

pub struct JwtTestUtils;

impl JwtTestUtils {
    pub fn create_test_token(user: &TestUser, secret: &str, exp_hours: Option<i64>) -> String {
        issue_token(&user.id, Some(&user.email), secret, exp_hours.unwrap_or(24))
            .expect("test token signs")
    }

    pub fn create_expired_token(user: &TestUser, secret: &str) -> String {
        Self::create_test_token(user, secret, Some(-1))
    }

    pub fn create_invalid_signature_token(user: &TestUser) -> String {
        Self::create_test_token(user, "wrong-secret", Some(24))
    }

    pub fn create_malformed_token() -> String {
        "invalid.token.format".to_string()
    }

    pub fn bearer(user: &TestUser, secret: &str) -> String {
        format!("Bearer {}", Self::create_test_token(user, secret, None))
    }
}

pub struct MockRazorpayResponses;

impl MockRazorpayResponses {
    pub fn order_response(order_id: &str, amount_paise: i64, receipt: &str) -> Value {
        json!({
            "id": order_id,
            "entity": "order",
            "amount": amount_paise,
            "amount_paid": 0,
            "amount_due": amount_paise,
            "currency": "INR",
            "receipt": receipt,
            "status": "created",
            "attempts": 0,
            "created_at": 1_717_000_000
        })
    }

    pub fn payment_response(payment_id: &str, order_id: &str, status: &str) -> Value {
        json!({
            "id": payment_id,
            "entity": "payment",
            "amount": 50_000,
            "currency": "INR",
            "status": status,
            "order_id": order_id,
            "method": "upi"
        })
    }

    pub fn refund_response(refund_id: &str, payment_id: &str, amount_paise: i64) -> Value {
        json!({
            "id": refund_id,
            "entity": "refund",
            "amount": amount_paise,
            "payment_id": payment_id,
            "status": "processed"
        })
    }

    pub fn error_response(code: &str, description: &str) -> Value {
        json!({
            "error": {
                "code": code,
                "description": description
            }
        })
    }
}
