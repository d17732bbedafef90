use crate::domain::payment::PaymentResponseItem;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentError {
    /// The gateway processed the call and declined it; the decline detail it
    /// returned rides along so the audit trail keeps it.
    #[error("{message}")]
    Processor {
        message: String,
        response: Box<PaymentResponseItem>,
    },

    #[error("{0}")]
    Backend(String),

    #[error("ledger write failed: {0}")]
    Ledger(#[from] anyhow::Error),
}

impl PaymentError {
    pub fn processor(message: impl Into<String>, response: PaymentResponseItem) -> Self {
        PaymentError::Processor {
            message: message.into(),
            response: Box::new(response),
        }
    }

    /// Decline detail attached to a processor failure, if any.
    pub fn response_item(&self) -> Option<&PaymentResponseItem> {
        match self {
            PaymentError::Processor { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Stable name recorded in audit logs when a failure has no message.
    pub fn classification(&self) -> &'static str {
        match self {
            PaymentError::Processor { .. } => "PROCESSOR_DECLINE",
            PaymentError::Backend(_) => "BACKEND_FAILURE",
            PaymentError::Ledger(_) => "LEDGER_WRITE_FAILED",
        }
    }
}
