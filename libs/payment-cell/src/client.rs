use hmac::{Hmac, Mac};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use sha2::Sha256;
use tracing::{debug, error, info, warn};

use shared_config::AppConfig;

use crate::models::{CreateOrderRequest, PaymentError, RazorpayOrder, RazorpayRefund, RefundRequest};

type HmacSha256 = Hmac<Sha256>;

/// Razorpay REST client. Requests use HTTP basic auth with the key id and secret.
/// Based on: https://razorpay.com/docs/api/
pub struct RazorpayClient {
    client: Client,
    key_id: String,
    key_secret: String,
    base_url: String,
}

/// Hex HMAC-SHA256 of `"<order_id>|<payment_id>"`, the value Razorpay's checkout returns.
pub fn payment_signature(
    key_secret: &str,
    order_id: &str,
    payment_id: &str,
) -> Result<String, PaymentError> {
    let mut mac =
        HmacSha256::new_from_slice(key_secret.as_bytes()).map_err(|_| PaymentError::NotConfigured)?;
    mac.update(format!("{}|{}", order_id, payment_id).as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

impl RazorpayClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            key_id: config.razorpay_key_id.clone(),
            key_secret: config.razorpay_key_secret.clone(),
            base_url: config.razorpay_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.key_id.is_empty() && !self.key_secret.is_empty()
    }

    /// Create an order for `amount_paise` and return its id.
    /// POST /orders
    pub async fn create_order(
        &self,
        amount_paise: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<String, PaymentError> {
        if !self.is_configured() {
            return Err(PaymentError::NotConfigured);
        }

        let url = format!("{}/orders", self.base_url);
        debug!("Creating Razorpay order {} for {} {}", receipt, amount_paise, currency);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&CreateOrderRequest {
                amount: amount_paise,
                currency,
                receipt,
            })
            .send()
            .await?;

        let order: RazorpayOrder = self.read_json(response, "order creation").await?;
        let order_id = order.id.ok_or(PaymentError::MissingField("id"))?;

        info!("Created Razorpay order {} for receipt {}", order_id, receipt);
        Ok(order_id)
    }

    /// Checks the checkout signature in constant time.
    pub fn verify_payment_signature(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> Result<(), PaymentError> {
        let provided = hex::decode(signature.trim()).map_err(|_| PaymentError::InvalidSignature)?;

        let mut mac = HmacSha256::new_from_slice(self.key_secret.as_bytes())
            .map_err(|_| PaymentError::NotConfigured)?;
        mac.update(format!("{}|{}", order_id, payment_id).as_bytes());

        mac.verify_slice(&provided).map_err(|_| {
            warn!("Signature mismatch for order {} payment {}", order_id, payment_id);
            PaymentError::InvalidSignature
        })
    }

    /// GET /payments/{id}
    pub async fn fetch_payment(&self, payment_id: &str) -> Result<Value, PaymentError> {
        if !self.is_configured() {
            return Err(PaymentError::NotConfigured);
        }

        let url = format!("{}/payments/{}", self.base_url, payment_id);
        let response = self
            .client
            .get(&url)
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .send()
            .await?;

        self.read_json(response, "payment lookup").await
    }

    /// Refund `amount_paise` of a captured payment and return the refund id.
    /// POST /payments/{id}/refund
    pub async fn refund_payment(
        &self,
        payment_id: &str,
        amount_paise: i64,
    ) -> Result<String, PaymentError> {
        if !self.is_configured() {
            return Err(PaymentError::NotConfigured);
        }

        let url = format!("{}/payments/{}/refund", self.base_url, payment_id);
        let response = self
            .client
            .post(&url)
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&RefundRequest {
                amount: amount_paise,
            })
            .send()
            .await?;

        let refund: RazorpayRefund = self.read_json(response, "refund").await?;
        let refund_id = refund.id.ok_or(PaymentError::MissingField("id"))?;

        info!("Refunded {} paise of payment {} ({})", amount_paise, payment_id, refund_id);
        Ok(refund_id)
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        response: Response,
        action: &str,
    ) -> Result<T, PaymentError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Razorpay {} failed: {} - {}", action, status, body);
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v["error"]["description"].as_str().map(str::to_string))
                .unwrap_or(body);
            return Err(PaymentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            error!("Unreadable Razorpay {} response: {}", action, e);
            PaymentError::Api {
                status: status.as_u16(),
                message: format!("unreadable response: {}", e),
            }
        })
    }
}
