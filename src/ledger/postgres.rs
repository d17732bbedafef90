use crate::domain::payment::{PaymentInfo, PaymentLog, PaymentResponseItem};
use crate::ledger::LedgerStore;
use anyhow::Result;
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresLedger {
    pub pool: PgPool,
}

const INSERT_LOG_SQL: &str = r#"
    INSERT INTO payment_logs (
        log_id, payment_info_id, log_type, transaction_timestamp, transaction_type,
        transaction_success, user_name, exception_message, customer_id,
        payment_info_reference, amount_paid_minor
    ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11)
    ON CONFLICT (log_id) DO NOTHING
"#;

const INSERT_ITEM_SQL: &str = r#"
    INSERT INTO payment_response_items (
        item_id, payment_info_id, transaction_type, transaction_timestamp,
        transaction_success, user_name, customer_id, payment_info_reference,
        amount_minor, transaction_id, auth_code, gateway_response_code,
        error_code, error_message
    ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11,$12,$13,$14)
    ON CONFLICT (item_id) DO NOTHING
"#;

fn insert_log_query(
    log: &PaymentLog,
    payment_info_id: Option<Uuid>,
) -> Query<'static, Postgres, PgArguments> {
    sqlx::query(INSERT_LOG_SQL)
        .bind(log.log_id)
        .bind(payment_info_id)
        .bind(format!("{:?}", log.log_type).to_uppercase())
        .bind(log.transaction_timestamp)
        .bind(format!("{:?}", log.transaction_type).to_uppercase())
        .bind(log.transaction_success)
        .bind(log.user_name.clone())
        .bind(log.exception_message.clone())
        .bind(log.customer_id)
        .bind(log.payment_info_reference.clone())
        .bind(log.amount_paid_minor)
}

fn insert_item_query(
    item: &PaymentResponseItem,
    payment_info_id: Option<Uuid>,
) -> Query<'static, Postgres, PgArguments> {
    sqlx::query(INSERT_ITEM_SQL)
        .bind(item.item_id)
        .bind(payment_info_id)
        .bind(item.transaction_type.map(|t| format!("{t:?}").to_uppercase()))
        .bind(item.transaction_timestamp)
        .bind(item.transaction_success)
        .bind(item.user_name.clone())
        .bind(item.customer_id)
        .bind(item.payment_info_reference.clone())
        .bind(item.amount_minor)
        .bind(item.transaction_id.clone())
        .bind(item.auth_code.clone())
        .bind(item.gateway_response_code.clone())
        .bind(item.error_code.clone())
        .bind(item.error_message.clone())
}

#[async_trait::async_trait]
impl LedgerStore for PostgresLedger {
    async fn save_payment_info(&self, info: &PaymentInfo) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO payment_info (
                payment_info_id, reference_number, amount_minor, currency,
                payment_type, order_id, customer_id
            ) VALUES ($1,$2,$3,$4,$5,$6,$7)
            ON CONFLICT (payment_info_id) DO NOTHING
            "#,
        )
        .bind(info.payment_info_id)
        .bind(info.reference_number.clone())
        .bind(info.amount_minor)
        .bind(info.currency.clone())
        .bind(format!("{:?}", info.payment_type).to_uppercase())
        .bind(info.order.order_id)
        .bind(info.order.customer.customer_id)
        .execute(tx.as_mut())
        .await?;

        for log in &info.payment_logs {
            insert_log_query(log, Some(info.payment_info_id))
                .execute(tx.as_mut())
                .await?;
        }

        for item in &info.payment_response_items {
            insert_item_query(item, Some(info.payment_info_id))
                .execute(tx.as_mut())
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn save_log(&self, log: &PaymentLog) -> Result<()> {
        insert_log_query(log, None).execute(&self.pool).await?;
        Ok(())
    }

    async fn save_response_item(&self, item: &PaymentResponseItem) -> Result<()> {
        insert_item_query(item, None).execute(&self.pool).await?;
        Ok(())
    }
}
