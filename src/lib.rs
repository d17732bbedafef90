pub mod backends;
pub mod config;
pub mod domain {
    pub mod context;
    pub mod payment;
}
pub mod error;
pub mod http {
    pub mod handlers {
        pub mod transactions;
    }
}
pub mod ledger;
pub mod service {
    pub mod payment_service;
}

#[derive(Clone)]
pub struct AppState {
    pub transaction_service: service::payment_service::PaymentTransactionService,
}
