//! # Invoice Aggregator
//!
//! Recomputes an invoice's stored total from its line items, on demand.
//!
//! ## How Recomputation Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   recompute_total(invoice_id)                           │
//! │                                                                         │
//! │  1. FETCH LINE ITEMS                                                   │
//! │     └── line item store: all lines for the invoice                     │
//! │                                                                         │
//! │  2. FOLD                                                               │
//! │     └── total = Σ quantity × unit_subtotal   (integer cents, exact)    │
//! │                                                                         │
//! │  3. FETCH INVOICE, OVERWRITE TOTAL                                     │
//! │     └── invoice store: read row, set total_cents                       │
//! │                                                                         │
//! │  4. PERSIST                                                            │
//! │     └── through InvoiceService::update (re-validates)                  │
//! │                                                                         │
//! │  Steps 1 and 4 are separate store operations. No transaction spans     │
//! │  them, and nothing triggers this automatically: the stored total is    │
//! │  guaranteed to match the line items only immediately after a           │
//! │  successful call, and drifts as soon as lines change again.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;

use vetdesk_core::{Invoice, Money};

use crate::error::{DomainError, DomainResult};
use crate::invoice::InvoiceService;
use crate::line_item::InvoiceLineItemService;

/// Recomputes invoice totals from line items.
#[derive(Debug, Clone)]
pub struct InvoiceAggregator {
    invoices: InvoiceService,
    line_items: InvoiceLineItemService,
}

impl InvoiceAggregator {
    /// Creates a new aggregator over the invoice and line-item services.
    pub fn new(invoices: InvoiceService, line_items: InvoiceLineItemService) -> Self {
        InvoiceAggregator {
            invoices,
            line_items,
        }
    }

    /// Recomputes and persists the invoice's total, returning the
    /// updated invoice.
    ///
    /// The invoice must exist; a missing id is a [`DomainError`] here
    /// because the caller is handed the corrected record back.
    pub async fn recompute_total(&self, invoice_id: i64) -> DomainResult<Invoice> {
        let line_items = self.line_items.find_by_invoice(invoice_id).await?;

        let total: Money = line_items.iter().map(|li| li.line_total()).sum();

        let mut invoice = self
            .invoices
            .find_by_id(invoice_id)
            .await?
            .ok_or_else(|| DomainError::not_found("invoice", invoice_id))?;

        invoice.total_cents = total.cents();
        self.invoices.update(&invoice).await?;

        info!(invoice_id, total = %total, lines = line_items.len(), "Invoice total recomputed");
        Ok(invoice)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, Utc};
    use vetdesk_core::{
        Appointment, ClinicService, Client, Medication, Pet, Veterinarian,
    };
    use vetdesk_db::repository::Repository;
    use vetdesk_db::{Database, DbConfig};

    struct Fixture {
        aggregator: InvoiceAggregator,
        line_items: InvoiceLineItemService,
        invoices: InvoiceService,
        invoice_id: i64,
        service_id: i64,
        medication_id: i64,
    }

    /// Builds a billable invoice with one service and one medication in
    /// the catalogs, ready for line items.
    async fn fixture() -> Fixture {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        db.clients()
            .create(&Client {
                id: 0,
                name: "Ada Vance".to_string(),
                phone: "555-0101".to_string(),
            })
            .await
            .unwrap();
        let client_id = db.clients().list_all().await.unwrap()[0].id;

        db.pets()
            .create(&Pet {
                id: 0,
                name: "Luna".to_string(),
                species: "cat".to_string(),
                breed: "shorthair".to_string(),
                age: 3,
                sex: "F".to_string(),
                client_id,
                owner: None,
            })
            .await
            .unwrap();
        let pet_id = db.pets().list_all().await.unwrap()[0].id;

        db.veterinarians()
            .create(&Veterinarian {
                id: 0,
                name: "Dr. Imani Okafor".to_string(),
                specialty: "General practice".to_string(),
                phone: "555-0140".to_string(),
                email: "imani@vetdesk.example".to_string(),
            })
            .await
            .unwrap();
        let veterinarian_id = db.veterinarians().list_all().await.unwrap()[0].id;

        db.appointments()
            .create(&Appointment {
                id: 0,
                scheduled_at: Utc::now() + Duration::days(1),
                reason: "Annual checkup".to_string(),
                status: "pending".to_string(),
                pet_id,
                veterinarian_id,
            })
            .await
            .unwrap();
        let appointment_id = db.appointments().list_all().await.unwrap()[0].id;

        db.invoices()
            .create(&vetdesk_core::Invoice::for_appointment(
                NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
                client_id,
                appointment_id,
            ))
            .await
            .unwrap();
        let invoice_id = db.invoices().list_all().await.unwrap()[0].id;

        db.clinic_services()
            .create(&ClinicService {
                id: 0,
                name: "Annual checkup".to_string(),
                description: String::new(),
                price_cents: 1000,
            })
            .await
            .unwrap();
        let service_id = db.clinic_services().list_all().await.unwrap()[0].id;

        db.medications()
            .create(&Medication {
                id: 0,
                name: "Amoxicillin".to_string(),
                description: String::new(),
                price_cents: 500,
            })
            .await
            .unwrap();
        let medication_id = db.medications().list_all().await.unwrap()[0].id;

        let invoices = InvoiceService::new(db.invoices());
        let line_items = InvoiceLineItemService::new(
            db.invoice_line_items(),
            db.clinic_services(),
            db.medications(),
        );
        let aggregator = InvoiceAggregator::new(invoices.clone(), line_items.clone());

        Fixture {
            aggregator,
            line_items,
            invoices,
            invoice_id,
            service_id,
            medication_id,
        }
    }

    #[tokio::test]
    async fn test_recompute_sums_quantity_times_unit_subtotal() {
        let fx = fixture().await;

        // (qty=2, subtotal=$10.00) + (qty=1, subtotal=$5.00)
        fx.line_items
            .add_service_line(fx.invoice_id, fx.service_id, 2)
            .await
            .unwrap();
        fx.line_items
            .add_medication_line(fx.invoice_id, fx.medication_id, 1)
            .await
            .unwrap();

        let invoice = fx.aggregator.recompute_total(fx.invoice_id).await.unwrap();
        assert_eq!(invoice.total_cents, 2500); // exactly $25.00

        // And the corrected total was persisted.
        let stored = fx.invoices.find_by_id(fx.invoice_id).await.unwrap().unwrap();
        assert_eq!(stored.total_cents, 2500);
    }

    #[tokio::test]
    async fn test_totals_drift_until_recompute_is_called_again() {
        let fx = fixture().await;

        fx.line_items
            .add_service_line(fx.invoice_id, fx.service_id, 2)
            .await
            .unwrap();
        fx.aggregator.recompute_total(fx.invoice_id).await.unwrap();

        // A line added afterwards leaves the stored total unchanged -
        // recomputation is caller-driven, never automatic.
        fx.line_items
            .add_medication_line(fx.invoice_id, fx.medication_id, 1)
            .await
            .unwrap();

        let stored = fx.invoices.find_by_id(fx.invoice_id).await.unwrap().unwrap();
        assert_eq!(stored.total_cents, 2000);

        // The next explicit call catches the invoice back up.
        let invoice = fx.aggregator.recompute_total(fx.invoice_id).await.unwrap();
        assert_eq!(invoice.total_cents, 2500);
    }

    #[tokio::test]
    async fn test_recompute_on_empty_invoice_sets_zero() {
        let fx = fixture().await;

        let invoice = fx.aggregator.recompute_total(fx.invoice_id).await.unwrap();
        assert_eq!(invoice.total_cents, 0);
    }

    #[tokio::test]
    async fn test_recompute_missing_invoice_is_a_domain_error() {
        let fx = fixture().await;

        let err = fx.aggregator.recompute_total(9999).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::NotFound {
                entity: "invoice",
                id: 9999
            }
        ));
    }
}
