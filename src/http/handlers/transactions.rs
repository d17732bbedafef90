use crate::domain::context::build_context;
use crate::domain::payment::{
    ErrorEnvelope, ErrorPayload, PaymentInfoType, PaymentResponseItem, TransactionRequest,
};
use crate::error::PaymentError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub async fn authorize(
    State(state): State<AppState>,
    Json(req): Json<TransactionRequest>,
) -> impl IntoResponse {
    let mut context = build_context(&req);
    respond(state.transaction_service.authorize(&mut context).await)
}

pub async fn authorize_and_debit(
    State(state): State<AppState>,
    Json(req): Json<TransactionRequest>,
) -> impl IntoResponse {
    let mut context = build_context(&req);
    respond(
        state
            .transaction_service
            .authorize_and_debit(&mut context)
            .await,
    )
}

pub async fn balance(
    State(state): State<AppState>,
    Json(req): Json<TransactionRequest>,
) -> impl IntoResponse {
    let mut context = build_context(&req);
    respond(state.transaction_service.balance(&mut context).await)
}

pub async fn credit(
    State(state): State<AppState>,
    Json(req): Json<TransactionRequest>,
) -> impl IntoResponse {
    let mut context = build_context(&req);
    respond(state.transaction_service.credit(&mut context).await)
}

pub async fn debit(
    State(state): State<AppState>,
    Json(req): Json<TransactionRequest>,
) -> impl IntoResponse {
    let mut context = build_context(&req);
    respond(state.transaction_service.debit(&mut context).await)
}

pub async fn void_payment(
    State(state): State<AppState>,
    Json(req): Json<TransactionRequest>,
) -> impl IntoResponse {
    let mut context = build_context(&req);
    respond(state.transaction_service.void_payment(&mut context).await)
}

pub async fn is_valid_candidate(
    State(state): State<AppState>,
    Path(payment_type): Path<String>,
) -> impl IntoResponse {
    match PaymentInfoType::parse(&payment_type) {
        Some(t) => (
            StatusCode::OK,
            Json(state.transaction_service.is_valid_candidate(t)),
        )
            .into_response(),
        None => (
            StatusCode::BAD_REQUEST,
            Json(err("UNKNOWN_PAYMENT_TYPE", "unrecognized payment info type")),
        )
            .into_response(),
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

fn respond(result: Result<PaymentResponseItem, PaymentError>) -> Response {
    match result {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => {
            let status = match &e {
                PaymentError::Processor { .. } => StatusCode::PAYMENT_REQUIRED,
                PaymentError::Backend(_) => StatusCode::BAD_GATEWAY,
                PaymentError::Ledger(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let details = e
                .response_item()
                .and_then(|item| serde_json::to_string(item).ok());
            let body = ErrorEnvelope {
                error: ErrorPayload {
                    code: e.classification().to_string(),
                    message: e.to_string(),
                    details,
                },
            };
            (status, Json(body)).into_response()
        }
    }
}

fn err(code: &str, message: &str) -> ErrorEnvelope {
    ErrorEnvelope {
        error: ErrorPayload {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        },
    }
}
