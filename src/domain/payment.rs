use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Authorize,
    AuthorizeAndDebit,
    Balance,
    Credit,
    Debit,
    VoidPayment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentLogEventType {
    Start,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentInfoType {
    CreditCard,
    BankAccount,
    GiftCard,
    Account,
}

impl PaymentInfoType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CREDIT_CARD" => Some(Self::CreditCard),
            "BANK_ACCOUNT" => Some(Self::BankAccount),
            "GIFT_CARD" => Some(Self::GiftCard),
            "ACCOUNT" => Some(Self::Account),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: Uuid,
    pub customer: Customer,
}

/// Durable record identifying one payment instrument/attempt on an order.
/// Created upstream by the checkout domain; the orchestrator only appends to
/// its two collections and asks the ledger to persist it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInfo {
    pub payment_info_id: Uuid,
    pub reference_number: String,
    pub amount_minor: i64,
    pub currency: String,
    pub payment_type: PaymentInfoType,
    pub order: Order,
    pub payment_logs: Vec<PaymentLog>,
    pub payment_response_items: Vec<PaymentResponseItem>,
}

/// Audit entry; immutable once written. Two per transaction invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentLog {
    pub log_id: Uuid,
    pub log_type: PaymentLogEventType,
    pub transaction_timestamp: DateTime<Utc>,
    pub transaction_type: TransactionType,
    pub transaction_success: bool,
    pub user_name: String,
    pub exception_message: Option<String>,
    pub customer_id: Option<Uuid>,
    pub payment_info_reference: Option<String>,
    pub amount_paid_minor: Option<i64>,
}

impl PaymentLog {
    pub fn new(
        log_type: PaymentLogEventType,
        transaction_type: TransactionType,
        user_name: &str,
    ) -> Self {
        Self {
            log_id: Uuid::new_v4(),
            log_type,
            transaction_timestamp: Utc::now(),
            transaction_type,
            transaction_success: true,
            user_name: user_name.to_string(),
            exception_message: None,
            customer_id: None,
            payment_info_reference: None,
            amount_paid_minor: None,
        }
    }
}

/// Outcome of one backend call, normalized across gateways. Built by the
/// backend (or carried out of a processor decline), then enriched and
/// persisted by the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResponseItem {
    pub item_id: Uuid,
    pub transaction_type: Option<TransactionType>,
    pub transaction_timestamp: DateTime<Utc>,
    pub transaction_success: bool,
    pub user_name: Option<String>,
    pub payment_info_id: Option<Uuid>,
    pub customer_id: Option<Uuid>,
    pub payment_info_reference: Option<String>,
    pub amount_minor: Option<i64>,
    pub transaction_id: Option<String>,
    pub auth_code: Option<String>,
    pub gateway_response_code: Option<String>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
}

impl PaymentResponseItem {
    pub fn new() -> Self {
        Self {
            item_id: Uuid::new_v4(),
            transaction_type: None,
            transaction_timestamp: Utc::now(),
            transaction_success: false,
            user_name: None,
            payment_info_id: None,
            customer_id: None,
            payment_info_reference: None,
            amount_minor: None,
            transaction_id: None,
            auth_code: None,
            gateway_response_code: None,
            error_code: None,
            error_message: None,
        }
    }
}

impl Default for PaymentResponseItem {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInfoPayload {
    pub payment_info_id: Option<Uuid>,
    pub reference_number: String,
    pub amount_minor: i64,
    pub currency: String,
    pub payment_type: PaymentInfoType,
    pub order_id: Uuid,
    pub customer_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub user_name: String,
    pub payment_info: Option<PaymentInfoPayload>,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}
