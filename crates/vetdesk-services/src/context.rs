//! # Composition Root
//!
//! Explicit construction of every repository and service at startup.
//! There is no global factory or singleton: the desktop shell builds one
//! [`ServiceContext`] from its [`Database`] handle and passes references
//! down to the forms. Substituting a test double is the same move -
//! build the context over an in-memory database.

use vetdesk_db::Database;

use crate::aggregator::InvoiceAggregator;
use crate::appointment::AppointmentService;
use crate::clinic_service::ClinicServiceService;
use crate::client::ClientService;
use crate::invoice::InvoiceService;
use crate::line_item::InvoiceLineItemService;
use crate::medication::MedicationService;
use crate::pet::PetService;
use crate::veterinarian::VeterinarianService;

/// Every application service, wired once at startup.
#[derive(Debug, Clone)]
pub struct ServiceContext {
    pub clients: ClientService,
    pub pets: PetService,
    pub veterinarians: VeterinarianService,
    pub appointments: AppointmentService,
    pub medications: MedicationService,
    pub clinic_services: ClinicServiceService,
    pub invoices: InvoiceService,
    pub line_items: InvoiceLineItemService,
    pub aggregator: InvoiceAggregator,
}

impl ServiceContext {
    /// Builds the full service graph over a database handle.
    pub fn new(db: &Database) -> Self {
        let invoices = InvoiceService::new(db.invoices());
        let line_items = InvoiceLineItemService::new(
            db.invoice_line_items(),
            db.clinic_services(),
            db.medications(),
        );
        let aggregator = InvoiceAggregator::new(invoices.clone(), line_items.clone());

        ServiceContext {
            clients: ClientService::new(db.clients()),
            pets: PetService::new(db.pets()),
            veterinarians: VeterinarianService::new(db.veterinarians()),
            appointments: AppointmentService::new(db.appointments()),
            medications: MedicationService::new(db.medications()),
            clinic_services: ClinicServiceService::new(db.clinic_services()),
            invoices,
            line_items,
            aggregator,
        }
    }
}
