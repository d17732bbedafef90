use crate::domain::payment::{Customer, Order, PaymentInfo, TransactionRequest};
use uuid::Uuid;

/// Per-request descriptor handed into each transaction operation. Owns the
/// PaymentInfo for the duration of the call so appended logs and response
/// items land in its collections.
#[derive(Debug, Clone)]
pub struct PaymentContext {
    pub user_name: String,
    pub payment_info: Option<PaymentInfo>,
}

pub fn build_context(req: &TransactionRequest) -> PaymentContext {
    let payment_info = req.payment_info.as_ref().map(|p| PaymentInfo {
        payment_info_id: p.payment_info_id.unwrap_or_else(Uuid::new_v4),
        reference_number: p.reference_number.clone(),
        amount_minor: p.amount_minor,
        currency: p.currency.clone(),
        payment_type: p.payment_type,
        order: Order {
            order_id: p.order_id,
            customer: Customer {
                customer_id: p.customer_id,
            },
        },
        payment_logs: Vec::new(),
        payment_response_items: Vec::new(),
    });

    PaymentContext {
        user_name: req.user_name.clone(),
        payment_info,
    }
}
