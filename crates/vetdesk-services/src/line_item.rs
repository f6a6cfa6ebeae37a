//! # Invoice Line-Item Service
//!
//! Application service for invoice line items: the uniform CRUD template
//! plus the two pieces the billing form needs -
//!
//! 1. **Snapshot creation**: `add_service_line` / `add_medication_line`
//!    resolve the catalog entry and freeze its current price into the new
//!    line. The line never tracks later catalog price changes.
//! 2. **Display resolution**: `rows_for_invoice` resolves each line's
//!    kind discriminator against the matching catalog to fetch a display
//!    name. A catalog id that no longer resolves renders as an explicit
//!    placeholder instead of failing the whole listing.

use vetdesk_core::validation::validate_line_item;
use vetdesk_core::{InvoiceLineItem, LineItemKind, Money};
use vetdesk_db::repository::Repository;
use vetdesk_db::{ClinicServiceRepository, InvoiceLineItemRepository, MedicationRepository};

use crate::error::{DomainError, DomainResult};

/// One row of the billing form's line-item table.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItemRow {
    /// Resolved catalog display name, or a "not found" placeholder.
    pub name: String,
    /// Kind tag ("service" / "medication").
    pub kind: &'static str,
    pub quantity: i64,
    pub unit_subtotal: Money,
    pub line_total: Money,
}

/// Application service for invoice line items.
#[derive(Debug, Clone)]
pub struct InvoiceLineItemService {
    repo: InvoiceLineItemRepository,
    services: ClinicServiceRepository,
    medications: MedicationRepository,
}

impl InvoiceLineItemService {
    /// Creates a new InvoiceLineItemService. The catalog stores are
    /// needed for snapshot creation and display resolution.
    pub fn new(
        repo: InvoiceLineItemRepository,
        services: ClinicServiceRepository,
        medications: MedicationRepository,
    ) -> Self {
        InvoiceLineItemService {
            repo,
            services,
            medications,
        }
    }

    /// Validates and persists a new line item.
    pub async fn save(&self, line_item: &InvoiceLineItem) -> DomainResult<()> {
        validate_line_item(line_item)?;
        self.repo
            .create(line_item)
            .await
            .map_err(DomainError::store("failed to save invoice line item"))
    }

    /// Returns every line item across all invoices.
    pub async fn list_all(&self) -> DomainResult<Vec<InvoiceLineItem>> {
        self.repo
            .list_all()
            .await
            .map_err(DomainError::store("failed to list invoice line items"))
    }

    /// Looks up a line item by id. Absence is `Ok(None)`.
    pub async fn find_by_id(&self, id: i64) -> DomainResult<Option<InvoiceLineItem>> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(DomainError::store("failed to look up invoice line item"))
    }

    /// Re-validates and overwrites an existing line item.
    pub async fn update(&self, line_item: &InvoiceLineItem) -> DomainResult<()> {
        validate_line_item(line_item)?;
        self.repo
            .update(line_item)
            .await
            .map_err(DomainError::store("failed to update invoice line item"))
    }

    /// Deletes a line item unconditionally; a missing id is not an error.
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.repo
            .delete(id)
            .await
            .map_err(DomainError::store("failed to delete invoice line item"))
    }

    /// Gets all line items belonging to an invoice.
    pub async fn find_by_invoice(&self, invoice_id: i64) -> DomainResult<Vec<InvoiceLineItem>> {
        self.repo
            .find_by_invoice(invoice_id)
            .await
            .map_err(DomainError::store("failed to load invoice line items"))
    }

    /// Adds a service line to an invoice, snapshotting the service's
    /// current catalog price as the unit subtotal.
    pub async fn add_service_line(
        &self,
        invoice_id: i64,
        service_id: i64,
        quantity: i64,
    ) -> DomainResult<InvoiceLineItem> {
        let service = self
            .services
            .find_by_id(service_id)
            .await
            .map_err(DomainError::store("failed to look up clinic service"))?
            .ok_or_else(|| DomainError::not_found("clinic service", service_id))?;

        let line_item = InvoiceLineItem::for_service(invoice_id, &service, quantity);
        self.save(&line_item).await?;
        Ok(line_item)
    }

    /// Adds a medication line to an invoice, snapshotting the
    /// medication's current catalog price as the unit subtotal.
    pub async fn add_medication_line(
        &self,
        invoice_id: i64,
        medication_id: i64,
        quantity: i64,
    ) -> DomainResult<InvoiceLineItem> {
        let medication = self
            .medications
            .find_by_id(medication_id)
            .await
            .map_err(DomainError::store("failed to look up medication"))?
            .ok_or_else(|| DomainError::not_found("medication", medication_id))?;

        let line_item = InvoiceLineItem::for_medication(invoice_id, &medication, quantity);
        self.save(&line_item).await?;
        Ok(line_item)
    }

    /// Display rows for an invoice's line items, in insertion order.
    ///
    /// Each row's name is resolved from the catalog the kind
    /// discriminator points at. A dangling catalog reference yields a
    /// placeholder name; the listing itself never fails over one bad
    /// reference.
    pub async fn rows_for_invoice(&self, invoice_id: i64) -> DomainResult<Vec<LineItemRow>> {
        let line_items = self.find_by_invoice(invoice_id).await?;

        let mut rows = Vec::with_capacity(line_items.len());
        for line_item in &line_items {
            let name = match line_item.kind {
                LineItemKind::ServiceRendered { service_id } => self
                    .services
                    .find_by_id(service_id)
                    .await
                    .map_err(DomainError::store("failed to look up clinic service"))?
                    .map(|s| s.name)
                    .unwrap_or_else(|| "service not found".to_string()),
                LineItemKind::MedicationDispensed { medication_id } => self
                    .medications
                    .find_by_id(medication_id)
                    .await
                    .map_err(DomainError::store("failed to look up medication"))?
                    .map(|m| m.name)
                    .unwrap_or_else(|| "medication not found".to_string()),
            };

            rows.push(LineItemRow {
                name,
                kind: line_item.kind.as_str(),
                quantity: line_item.quantity,
                unit_subtotal: line_item.unit_subtotal(),
                line_total: line_item.line_total(),
            });
        }

        Ok(rows)
    }
}
