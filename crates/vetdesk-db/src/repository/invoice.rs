//! # Invoice Repository
//!
//! Database operations for invoices.
//!
//! ## Invoice Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Invoice Lifecycle                                 │
//! │                                                                         │
//! │  1. CREATE EMPTY                                                       │
//! │     └── create(Invoice::for_appointment(..)) → total_cents = 0         │
//! │                                                                         │
//! │  2. ADD LINE ITEMS                                                     │
//! │     └── InvoiceLineItemRepository::create() per line                   │
//! │                                                                         │
//! │  3. RECOMPUTE (explicit, caller-driven)                                │
//! │     └── aggregator sums quantity × unit_subtotal and calls update()    │
//! │         Until then the stored total is allowed to be stale.            │
//! │                                                                         │
//! │  Deleting an invoice never cascades to its line items.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::error::StoreResult;
use crate::repository::Repository;
use vetdesk_core::Invoice;

/// Repository for invoice database operations.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    pool: SqlitePool,
}

impl InvoiceRepository {
    /// Creates a new InvoiceRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InvoiceRepository { pool }
    }
}

fn map_invoice(row: &SqliteRow) -> Result<Invoice, sqlx::Error> {
    Ok(Invoice {
        id: row.try_get("id")?,
        issued_on: row.try_get::<NaiveDate, _>("issued_on")?,
        total_cents: row.try_get("total_cents")?,
        client_id: row.try_get("client_id")?,
        appointment_id: row.try_get("appointment_id")?,
    })
}

#[async_trait]
impl Repository<Invoice> for InvoiceRepository {
    async fn create(&self, invoice: &Invoice) -> StoreResult<()> {
        debug!(
            client_id = invoice.client_id,
            appointment_id = invoice.appointment_id,
            "Inserting invoice"
        );

        sqlx::query(
            "INSERT INTO invoices (issued_on, total_cents, client_id, appointment_id) \
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(invoice.issued_on)
        .bind(invoice.total_cents)
        .bind(invoice.client_id)
        .bind(invoice.appointment_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<Invoice>> {
        let rows = sqlx::query(
            "SELECT id, issued_on, total_cents, client_id, appointment_id FROM invoices",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(map_invoice)
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(Into::into)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Invoice>> {
        let row = sqlx::query(
            "SELECT id, issued_on, total_cents, client_id, appointment_id \
             FROM invoices WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref()
            .map(map_invoice)
            .transpose()
            .map_err(Into::into)
    }

    async fn update(&self, invoice: &Invoice) -> StoreResult<()> {
        sqlx::query(
            "UPDATE invoices SET issued_on = ?1, total_cents = ?2, client_id = ?3, \
             appointment_id = ?4 WHERE id = ?5",
        )
        .bind(invoice.issued_on)
        .bind(invoice.total_cents)
        .bind(invoice.client_id)
        .bind(invoice.appointment_id)
        .bind(invoice.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM invoices WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
