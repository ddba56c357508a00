use async_trait::async_trait;

use crate::client::RazorpayClient;
use crate::models::PaymentError;

/// The two gateway calls a booking flow needs.
#[async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
    async fn create_order(
        &self,
        amount_paise: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<String, PaymentError>;

    fn verify_signature(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> Result<(), PaymentError>;
}

#[async_trait]
impl PaymentGateway for RazorpayClient {
    async fn create_order(
        &self,
        amount_paise: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<String, PaymentError> {
        RazorpayClient::create_order(self, amount_paise, currency, receipt).await
    }

    fn verify_signature(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> Result<(), PaymentError> {
        self.verify_payment_signature(order_id, payment_id, signature)
    }
}
