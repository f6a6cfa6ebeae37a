//! # vetdesk-services: Application Service Layer for Vetdesk
//!
//! The layer between the desktop forms and the record stores. Every
//! public method here either returns a value or a [`DomainError`]; raw
//! store failures never cross this boundary, and validation always runs
//! before anything touches the database.
//!
//! ## The Uniform Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every entity service follows the same template:                       │
//! │                                                                         │
//! │  save(entity)      validate ──► store.create ──► wrap store failure    │
//! │  list_all()                     store.list_all ──► wrap               │
//! │  find_by_id(id)                 store.find_by_id ──► wrap             │
//! │  update(entity)    validate ──► store.update ──► wrap                 │
//! │  delete(id)                     store.delete ──► wrap                 │
//! │                                                                         │
//! │  Context prefixes name the operation: "failed to save client: ..."    │
//! │                                                                         │
//! │  Known asymmetry, kept on purpose: AppointmentService promotes         │
//! │  "not found" to a DomainError on find and delete; every other          │
//! │  service returns Ok(None) and deletes unconditionally. The forms       │
//! │  depend on both behaviors.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - One service per entity ([`client`], [`pet`], [`veterinarian`],
//!   [`appointment`], [`medication`], [`clinic_service`], [`invoice`],
//!   [`line_item`])
//! - [`aggregator`] - caller-driven invoice total recomputation
//! - [`context`] - the composition root
//! - [`error`] - [`DomainError`], the only failure type the
//!   presentation layer handles

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregator;
pub mod appointment;
pub mod clinic_service;
pub mod client;
pub mod context;
pub mod error;
pub mod invoice;
pub mod line_item;
pub mod medication;
pub mod pet;
pub mod veterinarian;

// =============================================================================
// Re-exports
// =============================================================================

pub use aggregator::InvoiceAggregator;
pub use appointment::AppointmentService;
pub use clinic_service::ClinicServiceService;
pub use client::ClientService;
pub use context::ServiceContext;
pub use error::{DomainError, DomainResult};
pub use invoice::InvoiceService;
pub use line_item::{InvoiceLineItemService, LineItemRow};
pub use medication::MedicationService;
pub use pet::PetService;
pub use veterinarian::VeterinarianService;
