use crate::domain::context::PaymentContext;
use crate::domain::payment::{PaymentInfoType, PaymentResponseItem};
use crate::error::PaymentError;

pub mod mock;

/// Pluggable gateway adapter. Each transactional method performs the actual
/// gateway call and returns a normalized response item, or fails with a
/// PaymentError; a processor decline attaches the declined item to the error.
#[async_trait::async_trait]
pub trait PaymentBackend: Send + Sync {
    fn name(&self) -> &'static str;

    async fn authorize(
        &self,
        context: &PaymentContext,
    ) -> Result<PaymentResponseItem, PaymentError>;

    async fn authorize_and_debit(
        &self,
        context: &PaymentContext,
    ) -> Result<PaymentResponseItem, PaymentError>;

    async fn balance(&self, context: &PaymentContext)
        -> Result<PaymentResponseItem, PaymentError>;

    async fn credit(&self, context: &PaymentContext) -> Result<PaymentResponseItem, PaymentError>;

    async fn debit(&self, context: &PaymentContext) -> Result<PaymentResponseItem, PaymentError>;

    async fn void_payment(
        &self,
        context: &PaymentContext,
    ) -> Result<PaymentResponseItem, PaymentError>;

    fn is_valid_candidate(&self, payment_type: PaymentInfoType) -> bool;
}
