//! # Invoice Service
//!
//! Application service for invoices. Plain CRUD over the invoice store;
//! the interesting behavior (total recomputation) lives in
//! [`crate::aggregator`], which persists through this service's `update`
//! path.

use vetdesk_core::validation::validate_invoice;
use vetdesk_core::Invoice;
use vetdesk_db::repository::Repository;
use vetdesk_db::InvoiceRepository;

use crate::error::{DomainError, DomainResult};

/// Application service for invoice records.
#[derive(Debug, Clone)]
pub struct InvoiceService {
    repo: InvoiceRepository,
}

impl InvoiceService {
    /// Creates a new InvoiceService over the given store.
    pub fn new(repo: InvoiceRepository) -> Self {
        InvoiceService { repo }
    }

    /// Validates and persists a new invoice (normally an empty one
    /// raised when an appointment is billed - see
    /// [`Invoice::for_appointment`]).
    pub async fn save(&self, invoice: &Invoice) -> DomainResult<()> {
        validate_invoice(invoice)?;
        self.repo
            .create(invoice)
            .await
            .map_err(DomainError::store("failed to save invoice"))
    }

    /// Returns every invoice.
    pub async fn list_all(&self) -> DomainResult<Vec<Invoice>> {
        self.repo
            .list_all()
            .await
            .map_err(DomainError::store("failed to list invoices"))
    }

    /// Looks up an invoice by id. Absence is `Ok(None)`.
    pub async fn find_by_id(&self, id: i64) -> DomainResult<Option<Invoice>> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(DomainError::store("failed to look up invoice"))
    }

    /// Re-validates and overwrites an existing invoice.
    pub async fn update(&self, invoice: &Invoice) -> DomainResult<()> {
        validate_invoice(invoice)?;
        self.repo
            .update(invoice)
            .await
            .map_err(DomainError::store("failed to update invoice"))
    }

    /// Deletes an invoice unconditionally; a missing id is not an error.
    /// Line items never cascade - deleting an invoice that still has
    /// lines surfaces the store's foreign key violation.
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.repo
            .delete(id)
            .await
            .map_err(DomainError::store("failed to delete invoice"))
    }
}
