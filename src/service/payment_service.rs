use crate::backends::PaymentBackend;
use crate::domain::context::PaymentContext;
use crate::domain::payment::{
    PaymentInfoType, PaymentLog, PaymentLogEventType, PaymentResponseItem, TransactionType,
};
use crate::error::PaymentError;
use crate::ledger::LedgerStore;
use std::sync::Arc;

/// Audit column is 255 wide; messages of 255+ chars are cut to the first 254.
const MAX_EXCEPTION_MESSAGE_CHARS: usize = 254;

/// Executes a named transaction against the backend with guaranteed audit
/// bracketing: one START log before the call, response enrichment and one
/// FINISH log after it, on the success and failure paths alike. Backend
/// failures are re-raised untouched once bracketing completes.
#[derive(Clone)]
pub struct PaymentTransactionService {
    pub backend: Arc<dyn PaymentBackend>,
    pub ledger: Arc<dyn LedgerStore>,
}

impl PaymentTransactionService {
    pub async fn authorize(
        &self,
        context: &mut PaymentContext,
    ) -> Result<PaymentResponseItem, PaymentError> {
        self.execute(context, TransactionType::Authorize).await
    }

    pub async fn authorize_and_debit(
        &self,
        context: &mut PaymentContext,
    ) -> Result<PaymentResponseItem, PaymentError> {
        self.execute(context, TransactionType::AuthorizeAndDebit)
            .await
    }

    pub async fn balance(
        &self,
        context: &mut PaymentContext,
    ) -> Result<PaymentResponseItem, PaymentError> {
        self.execute(context, TransactionType::Balance).await
    }

    pub async fn credit(
        &self,
        context: &mut PaymentContext,
    ) -> Result<PaymentResponseItem, PaymentError> {
        self.execute(context, TransactionType::Credit).await
    }

    pub async fn debit(
        &self,
        context: &mut PaymentContext,
    ) -> Result<PaymentResponseItem, PaymentError> {
        self.execute(context, TransactionType::Debit).await
    }

    pub async fn void_payment(
        &self,
        context: &mut PaymentContext,
    ) -> Result<PaymentResponseItem, PaymentError> {
        self.execute(context, TransactionType::VoidPayment).await
    }

    /// Pure delegation to the backend's eligibility check; writes nothing.
    pub fn is_valid_candidate(&self, payment_type: PaymentInfoType) -> bool {
        self.backend.is_valid_candidate(payment_type)
    }

    async fn execute(
        &self,
        context: &mut PaymentContext,
        transaction_type: TransactionType,
    ) -> Result<PaymentResponseItem, PaymentError> {
        self.log_start(context, transaction_type).await?;

        match self.dispatch(context, transaction_type).await {
            Ok(response) => {
                let response = self
                    .record_response(context, response, transaction_type)
                    .await?;
                self.log_finish(context, transaction_type, None).await?;
                Ok(response)
            }
            Err(err) => {
                tracing::warn!(
                    "{:?} transaction failed for user {}: {}",
                    transaction_type,
                    context.user_name,
                    err
                );
                if let Some(declined) = err.response_item() {
                    self.record_response(context, declined.clone(), transaction_type)
                        .await?;
                }
                self.log_finish(context, transaction_type, Some(&err)).await?;
                Err(err)
            }
        }
    }

    async fn dispatch(
        &self,
        context: &PaymentContext,
        transaction_type: TransactionType,
    ) -> Result<PaymentResponseItem, PaymentError> {
        match transaction_type {
            TransactionType::Authorize => self.backend.authorize(context).await,
            TransactionType::AuthorizeAndDebit => self.backend.authorize_and_debit(context).await,
            TransactionType::Balance => self.backend.balance(context).await,
            TransactionType::Credit => self.backend.credit(context).await,
            TransactionType::Debit => self.backend.debit(context).await,
            TransactionType::VoidPayment => self.backend.void_payment(context).await,
        }
    }

    async fn record_response(
        &self,
        context: &mut PaymentContext,
        mut response: PaymentResponseItem,
        transaction_type: TransactionType,
    ) -> Result<PaymentResponseItem, PaymentError> {
        response.transaction_type = Some(transaction_type);
        response.user_name = Some(context.user_name.clone());

        if let Some(info) = context.payment_info.as_mut() {
            response.payment_info_id = Some(info.payment_info_id);
            response.customer_id = Some(info.order.customer.customer_id);
            response.payment_info_reference = Some(info.reference_number.clone());
            info.payment_response_items.push(response.clone());
            self.ledger.save_payment_info(info).await?;
        } else {
            self.ledger.save_response_item(&response).await?;
        }

        Ok(response)
    }

    async fn log_start(
        &self,
        context: &mut PaymentContext,
        transaction_type: TransactionType,
    ) -> Result<(), PaymentError> {
        let log =
            self.ledger
                .new_log(PaymentLogEventType::Start, transaction_type, &context.user_name);
        self.append_log(context, log).await
    }

    async fn log_finish(
        &self,
        context: &mut PaymentContext,
        transaction_type: TransactionType,
        failure: Option<&PaymentError>,
    ) -> Result<(), PaymentError> {
        let mut log = self.ledger.new_log(
            PaymentLogEventType::Finished,
            transaction_type,
            &context.user_name,
        );
        log.transaction_success = failure.is_none();
        log.exception_message = failure.map(exception_message);
        self.append_log(context, log).await
    }

    async fn append_log(
        &self,
        context: &mut PaymentContext,
        mut log: PaymentLog,
    ) -> Result<(), PaymentError> {
        if let Some(info) = context.payment_info.as_mut() {
            log.customer_id = Some(info.order.customer.customer_id);
            log.payment_info_reference = Some(info.reference_number.clone());
            log.amount_paid_minor = Some(info.amount_minor);
            info.payment_logs.push(log);
            self.ledger.save_payment_info(info).await?;
        } else {
            self.ledger.save_log(&log).await?;
        }

        Ok(())
    }
}

fn exception_message(err: &PaymentError) -> String {
    let message = err.to_string();
    if message.is_empty() {
        err.classification().to_string()
    } else {
        truncate_exception_message(&message)
    }
}

fn truncate_exception_message(message: &str) -> String {
    if message.chars().count() > MAX_EXCEPTION_MESSAGE_CHARS {
        message.chars().take(MAX_EXCEPTION_MESSAGE_CHARS).collect()
    } else {
        message.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_message_of_254_chars_untouched() {
        let message = "x".repeat(254);
        assert_eq!(truncate_exception_message(&message), message);
    }

    #[test]
    fn cuts_message_of_255_chars_to_254() {
        let message = "x".repeat(255);
        assert_eq!(truncate_exception_message(&message).chars().count(), 254);
    }

    #[test]
    fn truncation_is_idempotent() {
        let message = "y".repeat(400);
        let once = truncate_exception_message(&message);
        assert_eq!(truncate_exception_message(&once), once);
    }

    #[test]
    fn falls_back_to_classification_for_empty_message() {
        let err = PaymentError::Backend(String::new());
        assert_eq!(exception_message(&err), "BACKEND_FAILURE");
    }

    #[test]
    fn keeps_short_failure_messages_verbatim() {
        let err = PaymentError::Backend("card network unreachable".to_string());
        assert_eq!(exception_message(&err), "card network unreachable");
    }
}
