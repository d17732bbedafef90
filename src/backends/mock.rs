use crate::backends::PaymentBackend;
use crate::domain::context::PaymentContext;
use crate::domain::payment::{PaymentInfoType, PaymentResponseItem};
use crate::error::PaymentError;

/// Behavior-driven stand-in for a real gateway adapter, used in dev and tests.
pub struct MockBackend {
    pub backend_name: String,
    pub behavior: String,
}

impl MockBackend {
    fn respond(&self, context: &PaymentContext) -> Result<PaymentResponseItem, PaymentError> {
        let amount_minor = context.payment_info.as_ref().map(|info| info.amount_minor);

        match self.behavior.as_str() {
            "ALWAYS_DECLINE" => {
                let declined = PaymentResponseItem {
                    transaction_success: false,
                    amount_minor,
                    error_code: Some("MOCK_DECLINED".to_string()),
                    error_message: Some("mock decline".to_string()),
                    gateway_response_code: Some("400".to_string()),
                    ..PaymentResponseItem::new()
                };
                Err(PaymentError::processor("mock decline", declined))
            }
            "ALWAYS_ERROR" => Err(PaymentError::Backend(
                "mock backend unavailable".to_string(),
            )),
            _ => Ok(PaymentResponseItem {
                transaction_success: true,
                amount_minor,
                transaction_id: Some(format!("mock_txn_{}", uuid::Uuid::new_v4())),
                auth_code: Some("MOCK_AUTH".to_string()),
                gateway_response_code: Some("200".to_string()),
                ..PaymentResponseItem::new()
            }),
        }
    }
}

#[async_trait::async_trait]
impl PaymentBackend for MockBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn authorize(
        &self,
        context: &PaymentContext,
    ) -> Result<PaymentResponseItem, PaymentError> {
        self.respond(context)
    }

    async fn authorize_and_debit(
        &self,
        context: &PaymentContext,
    ) -> Result<PaymentResponseItem, PaymentError> {
        self.respond(context)
    }

    async fn balance(
        &self,
        context: &PaymentContext,
    ) -> Result<PaymentResponseItem, PaymentError> {
        self.respond(context)
    }

    async fn credit(&self, context: &PaymentContext) -> Result<PaymentResponseItem, PaymentError> {
        self.respond(context)
    }

    async fn debit(&self, context: &PaymentContext) -> Result<PaymentResponseItem, PaymentError> {
        self.respond(context)
    }

    async fn void_payment(
        &self,
        context: &PaymentContext,
    ) -> Result<PaymentResponseItem, PaymentError> {
        self.respond(context)
    }

    fn is_valid_candidate(&self, payment_type: PaymentInfoType) -> bool {
        matches!(
            payment_type,
            PaymentInfoType::CreditCard | PaymentInfoType::GiftCard
        )
    }
}
