use crate::domain::payment::{
    PaymentInfo, PaymentLog, PaymentLogEventType, PaymentResponseItem, TransactionType,
};
use anyhow::Result;

pub mod postgres;

/// Persistence collaborator for the audit trail. Saving a PaymentInfo covers
/// everything appended to its collections; the standalone methods handle calls
/// made without a PaymentInfo in scope.
#[async_trait::async_trait]
pub trait LedgerStore: Send + Sync {
    fn new_log(
        &self,
        log_type: PaymentLogEventType,
        transaction_type: TransactionType,
        user_name: &str,
    ) -> PaymentLog {
        PaymentLog::new(log_type, transaction_type, user_name)
    }

    async fn save_payment_info(&self, info: &PaymentInfo) -> Result<()>;

    async fn save_log(&self, log: &PaymentLog) -> Result<()>;

    async fn save_response_item(&self, item: &PaymentResponseItem) -> Result<()>;
}
