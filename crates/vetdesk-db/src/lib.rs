//! # vetdesk-db: Record Store Layer for Vetdesk
//!
//! This crate provides database access for the Vetdesk system. It uses
//! SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vetdesk Data Flow                                │
//! │                                                                         │
//! │  Application Service (vetdesk-services)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     vetdesk-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │ Repositories  │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ Repository<T> │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ one per       │    │ 001_initial_ │  │   │
//! │  │   │ WAL, FKs on   │    │ entity        │    │ schema.sql   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (one per clinic installation)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Store error types
//! - [`repository`] - The generic `Repository<T>` contract and its
//!   per-entity implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vetdesk_db::{Database, DbConfig};
//! use vetdesk_db::repository::Repository;
//!
//! let db = Database::new(DbConfig::new("path/to/vetdesk.db")).await?;
//! let invoices = db.invoices().list_all().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::appointment::AppointmentRepository;
pub use repository::clinic_service::ClinicServiceRepository;
pub use repository::client::ClientRepository;
pub use repository::invoice::InvoiceRepository;
pub use repository::line_item::InvoiceLineItemRepository;
pub use repository::medication::MedicationRepository;
pub use repository::pet::PetRepository;
pub use repository::veterinarian::VeterinarianRepository;
pub use repository::Repository;
