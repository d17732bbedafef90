use async_trait::async_trait;
use payments_orchestrator::backends::mock::MockBackend;
use payments_orchestrator::backends::PaymentBackend;
use payments_orchestrator::domain::context::PaymentContext;
use payments_orchestrator::domain::payment::{
    Customer, Order, PaymentInfo, PaymentInfoType, PaymentLog, PaymentResponseItem,
};
use payments_orchestrator::error::PaymentError;
use payments_orchestrator::ledger::LedgerStore;
use payments_orchestrator::service::payment_service::PaymentTransactionService;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Ledger double recording every persistence call the orchestrator makes.
#[derive(Default)]
pub struct InMemoryLedger {
    pub saved_infos: Mutex<Vec<PaymentInfo>>,
    pub standalone_logs: Mutex<Vec<PaymentLog>>,
    pub standalone_items: Mutex<Vec<PaymentResponseItem>>,
}

#[async_trait]
impl LedgerStore for InMemoryLedger {
    async fn save_payment_info(&self, info: &PaymentInfo) -> anyhow::Result<()> {
        self.saved_infos.lock().unwrap().push(info.clone());
        Ok(())
    }

    async fn save_log(&self, log: &PaymentLog) -> anyhow::Result<()> {
        self.standalone_logs.lock().unwrap().push(log.clone());
        Ok(())
    }

    async fn save_response_item(&self, item: &PaymentResponseItem) -> anyhow::Result<()> {
        self.standalone_items.lock().unwrap().push(item.clone());
        Ok(())
    }
}

impl InMemoryLedger {
    pub fn is_empty(&self) -> bool {
        self.saved_infos.lock().unwrap().is_empty()
            && self.standalone_logs.lock().unwrap().is_empty()
            && self.standalone_items.lock().unwrap().is_empty()
    }
}

/// Backend that fails every transactional call with a configurable error.
pub struct FailingBackend {
    pub message: String,
    pub with_decline_item: bool,
}

impl FailingBackend {
    fn fail(&self) -> Result<PaymentResponseItem, PaymentError> {
        if self.with_decline_item {
            let declined = PaymentResponseItem {
                transaction_success: false,
                error_code: Some("DECLINED".to_string()),
                error_message: Some(self.message.clone()),
                ..PaymentResponseItem::new()
            };
            Err(PaymentError::processor(self.message.clone(), declined))
        } else {
            Err(PaymentError::Backend(self.message.clone()))
        }
    }
}

#[async_trait]
impl PaymentBackend for FailingBackend {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn authorize(
        &self,
        _context: &PaymentContext,
    ) -> Result<PaymentResponseItem, PaymentError> {
        self.fail()
    }

    async fn authorize_and_debit(
        &self,
        _context: &PaymentContext,
    ) -> Result<PaymentResponseItem, PaymentError> {
        self.fail()
    }

    async fn balance(
        &self,
        _context: &PaymentContext,
    ) -> Result<PaymentResponseItem, PaymentError> {
        self.fail()
    }

    async fn credit(
        &self,
        _context: &PaymentContext,
    ) -> Result<PaymentResponseItem, PaymentError> {
        self.fail()
    }

    async fn debit(
        &self,
        _context: &PaymentContext,
    ) -> Result<PaymentResponseItem, PaymentError> {
        self.fail()
    }

    async fn void_payment(
        &self,
        _context: &PaymentContext,
    ) -> Result<PaymentResponseItem, PaymentError> {
        self.fail()
    }

    fn is_valid_candidate(&self, _payment_type: PaymentInfoType) -> bool {
        true
    }
}

pub fn service_with(
    backend: Arc<dyn PaymentBackend>,
) -> (PaymentTransactionService, Arc<InMemoryLedger>) {
    let ledger = Arc::new(InMemoryLedger::default());
    let service = PaymentTransactionService {
        backend,
        ledger: ledger.clone(),
    };
    (service, ledger)
}

pub fn mock_service(behavior: &str) -> (PaymentTransactionService, Arc<InMemoryLedger>) {
    service_with(Arc::new(MockBackend {
        backend_name: "mock".to_string(),
        behavior: behavior.to_string(),
    }))
}

pub fn context_with_info(customer_id: Uuid) -> PaymentContext {
    PaymentContext {
        user_name: "alice".to_string(),
        payment_info: Some(PaymentInfo {
            payment_info_id: Uuid::new_v4(),
            reference_number: "R1".to_string(),
            amount_minor: 5000,
            currency: "USD".to_string(),
            payment_type: PaymentInfoType::CreditCard,
            order: Order {
                order_id: Uuid::new_v4(),
                customer: Customer { customer_id },
            },
            payment_logs: Vec::new(),
            payment_response_items: Vec::new(),
        }),
    }
}

pub fn context_without_info() -> PaymentContext {
    PaymentContext {
        user_name: "alice".to_string(),
        payment_info: None,
    }
}
