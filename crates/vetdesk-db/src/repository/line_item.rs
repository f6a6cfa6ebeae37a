//! # Invoice Line-Item Repository
//!
//! Database operations for invoice line items.
//!
//! ## Persisted shape of the kind discriminator
//! The [`LineItemKind`] tagged variant is stored as three columns:
//! `kind` (TEXT tag) plus the nullable `service_id` / `medication_id`
//! pair, with exactly one id populated per the tag. Reading a row with
//! an unknown tag or a missing matching id is an internal store error,
//! never a silent default.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::repository::Repository;
use vetdesk_core::{InvoiceLineItem, LineItemKind};

/// Repository for invoice line-item database operations.
#[derive(Debug, Clone)]
pub struct InvoiceLineItemRepository {
    pool: SqlitePool,
}

impl InvoiceLineItemRepository {
    /// Creates a new InvoiceLineItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InvoiceLineItemRepository { pool }
    }

    /// Gets all line items belonging to an invoice, in insertion order.
    pub async fn find_by_invoice(&self, invoice_id: i64) -> StoreResult<Vec<InvoiceLineItem>> {
        let rows = sqlx::query(
            "SELECT id, invoice_id, kind, service_id, medication_id, quantity, \
             unit_subtotal_cents \
             FROM invoice_line_items WHERE invoice_id = ?1 ORDER BY id",
        )
        .bind(invoice_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_line_item).collect()
    }
}

fn map_line_item(row: &SqliteRow) -> StoreResult<InvoiceLineItem> {
    let id: i64 = row.try_get("id").map_err(StoreError::from)?;
    let kind_tag: String = row.try_get("kind").map_err(StoreError::from)?;
    let service_id: Option<i64> = row.try_get("service_id").map_err(StoreError::from)?;
    let medication_id: Option<i64> = row.try_get("medication_id").map_err(StoreError::from)?;

    let kind = LineItemKind::from_parts(&kind_tag, service_id, medication_id).ok_or_else(|| {
        StoreError::Internal(format!(
            "invoice line item {id} has inconsistent kind columns (kind={kind_tag})"
        ))
    })?;

    Ok(InvoiceLineItem {
        id,
        invoice_id: row.try_get("invoice_id").map_err(StoreError::from)?,
        kind,
        quantity: row.try_get("quantity").map_err(StoreError::from)?,
        unit_subtotal_cents: row
            .try_get("unit_subtotal_cents")
            .map_err(StoreError::from)?,
    })
}

#[async_trait]
impl Repository<InvoiceLineItem> for InvoiceLineItemRepository {
    async fn create(&self, line_item: &InvoiceLineItem) -> StoreResult<()> {
        debug!(
            invoice_id = line_item.invoice_id,
            kind = line_item.kind.as_str(),
            "Inserting invoice line item"
        );

        sqlx::query(
            "INSERT INTO invoice_line_items \
             (invoice_id, kind, service_id, medication_id, quantity, unit_subtotal_cents) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(line_item.invoice_id)
        .bind(line_item.kind.as_str())
        .bind(line_item.kind.service_id())
        .bind(line_item.kind.medication_id())
        .bind(line_item.quantity)
        .bind(line_item.unit_subtotal_cents)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<InvoiceLineItem>> {
        let rows = sqlx::query(
            "SELECT id, invoice_id, kind, service_id, medication_id, quantity, \
             unit_subtotal_cents FROM invoice_line_items",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_line_item).collect()
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<InvoiceLineItem>> {
        let row = sqlx::query(
            "SELECT id, invoice_id, kind, service_id, medication_id, quantity, \
             unit_subtotal_cents FROM invoice_line_items WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_line_item).transpose()
    }

    async fn update(&self, line_item: &InvoiceLineItem) -> StoreResult<()> {
        sqlx::query(
            "UPDATE invoice_line_items SET invoice_id = ?1, kind = ?2, service_id = ?3, \
             medication_id = ?4, quantity = ?5, unit_subtotal_cents = ?6 WHERE id = ?7",
        )
        .bind(line_item.invoice_id)
        .bind(line_item.kind.as_str())
        .bind(line_item.kind.service_id())
        .bind(line_item.kind.medication_id())
        .bind(line_item.quantity)
        .bind(line_item.unit_subtotal_cents)
        .bind(line_item.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM invoice_line_items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
