//! # Domain Types
//!
//! Core domain types used throughout Vetdesk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Client       │   │      Pet        │   │  Veterinarian   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  client_id (FK) │   │  specialty      │       │
//! │  │  phone          │   │  owner (lookup) │   │  email          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  Appointment    │   │    Invoice      │   │ InvoiceLineItem │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  scheduled_at   │   │  issued_on      │   │  kind (tagged)  │       │
//! │  │  reason         │   │  total_cents    │   │  quantity       │       │
//! │  │  status         │   │  client_id (FK) │   │  unit_subtotal  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every entity has an `id: i64` assigned by the record store on creation.
//! New, not-yet-persisted entities carry `id = 0`; the store ignores the
//! field on insert, and the generated value is observable on subsequent
//! reads. The id is immutable and is the sole lookup/equality key used by
//! the services.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::money::Money;

// =============================================================================
// Client
// =============================================================================

/// A pet owner registered with the clinic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Store-assigned identifier (0 until persisted).
    pub id: i64,

    /// Full name of the client.
    pub name: String,

    /// Contact phone number.
    pub phone: String,
}

// =============================================================================
// Pet
// =============================================================================

/// A pet treated by the clinic.
///
/// ## Owner back-reference
/// `owner` is populated by the record store on single-record lookups only,
/// never on bulk listings. Callers that list pets and need owner data must
/// re-fetch each pet by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: i64,
    pub sex: String,

    /// Owning client (foreign key).
    pub client_id: i64,

    /// Owning client record, present on `find_by_id` results only.
    pub owner: Option<Client>,
}

// =============================================================================
// Veterinarian
// =============================================================================

/// A veterinarian employed by the clinic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Veterinarian {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub phone: String,
    pub email: String,
}

// =============================================================================
// Appointment Status
// =============================================================================

/// The fixed set of valid appointment statuses.
///
/// The `Appointment` entity itself carries `status` as free text (the
/// forms submit arbitrary-cased strings); this enum is what the validator
/// parses that text against, case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl AppointmentStatus {
    /// All valid statuses, in display order.
    pub const ALL: [AppointmentStatus; 3] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Cancelled,
    ];

    /// Canonical lowercase form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string is not in the allowed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown appointment status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for AppointmentStatus {
    type Err = UnknownStatus;

    /// Case-insensitive parse: "pending", "Confirmed" and "CANCELLED" are
    /// all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(AppointmentStatus::Pending),
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

// =============================================================================
// Appointment
// =============================================================================

/// A scheduled visit of a pet to a veterinarian.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,

    /// When the visit takes place. Validation rejects anything earlier
    /// than one minute from now.
    pub scheduled_at: DateTime<Utc>,

    /// Free-text reason for the visit (at least 5 characters).
    pub reason: String,

    /// Free-text status; must parse as an [`AppointmentStatus`],
    /// case-insensitively.
    pub status: String,

    pub pet_id: i64,
    pub veterinarian_id: i64,
}

// =============================================================================
// Catalog: Medication & ClinicService
// =============================================================================

/// A medication the clinic dispenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub id: i64,
    pub name: String,
    pub description: String,

    /// Current catalog price in cents.
    pub price_cents: i64,
}

impl Medication {
    /// Returns the catalog price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// A service the clinic offers (consultation, surgery, grooming, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicService {
    pub id: i64,
    pub name: String,
    pub description: String,

    /// Current catalog price in cents.
    pub price_cents: i64,
}

impl ClinicService {
    /// Returns the catalog price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// An invoice raised against a client for a billed appointment.
///
/// ## Total invariant
/// `total_cents` equals the sum of `quantity × unit_subtotal` over this
/// invoice's line items only immediately after a successful
/// `recompute_total` call. Recomputation is never automatic: adding or
/// removing line items without a follow-up call leaves the stored total
/// stale. Deleting an invoice never cascades to its line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,

    /// Date the invoice was issued.
    pub issued_on: NaiveDate,

    /// Total amount in cents (non-negative).
    pub total_cents: i64,

    /// Billed client (foreign key).
    pub client_id: i64,

    /// Originating appointment (foreign key).
    pub appointment_id: i64,
}

impl Invoice {
    /// Creates the empty invoice raised when an appointment is billed.
    /// The total starts at zero; line items are added afterwards.
    pub fn for_appointment(issued_on: NaiveDate, client_id: i64, appointment_id: i64) -> Self {
        Invoice {
            id: 0,
            issued_on,
            total_cents: 0,
            client_id,
            appointment_id,
        }
    }

    /// Returns the stored total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Invoice Line Item
// =============================================================================

/// The kind of thing an invoice line bills for.
///
/// A tagged variant rather than a nullable id pair: a line is either a
/// service rendered or a medication dispensed, and it carries exactly the
/// matching catalog id. The other id cannot exist, by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineItemKind {
    /// A clinic service was rendered.
    ServiceRendered { service_id: i64 },
    /// A medication was dispensed.
    MedicationDispensed { medication_id: i64 },
}

impl LineItemKind {
    /// Discriminator tag as stored in the `kind` column.
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineItemKind::ServiceRendered { .. } => "service",
            LineItemKind::MedicationDispensed { .. } => "medication",
        }
    }

    /// The referenced service id, when this is a service line.
    pub const fn service_id(&self) -> Option<i64> {
        match self {
            LineItemKind::ServiceRendered { service_id } => Some(*service_id),
            LineItemKind::MedicationDispensed { .. } => None,
        }
    }

    /// The referenced medication id, when this is a medication line.
    pub const fn medication_id(&self) -> Option<i64> {
        match self {
            LineItemKind::ServiceRendered { .. } => None,
            LineItemKind::MedicationDispensed { medication_id } => Some(*medication_id),
        }
    }

    /// Rebuilds the tagged variant from its persisted parts: the `kind`
    /// tag plus the nullable id pair. Returns `None` when the tag is
    /// unknown or the matching id column is NULL.
    pub fn from_parts(
        kind: &str,
        service_id: Option<i64>,
        medication_id: Option<i64>,
    ) -> Option<LineItemKind> {
        match kind {
            "service" => service_id.map(|service_id| LineItemKind::ServiceRendered { service_id }),
            "medication" => {
                medication_id.map(|medication_id| LineItemKind::MedicationDispensed { medication_id })
            }
            _ => None,
        }
    }
}

/// A line on an invoice.
///
/// ## Snapshot Pattern
/// `unit_subtotal_cents` is copied from the referenced catalog entry's
/// price at the moment the line is created and is never recomputed from
/// the catalog afterwards. Later catalog price changes do not rewrite
/// billing history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    pub id: i64,

    /// Owning invoice (foreign key).
    pub invoice_id: i64,

    /// What this line bills for, with the matching catalog id.
    pub kind: LineItemKind,

    /// Units billed (positive).
    pub quantity: i64,

    /// Price per unit in cents at the time the line was added (frozen).
    pub unit_subtotal_cents: i64,
}

impl InvoiceLineItem {
    /// Creates a line for a rendered clinic service, snapshotting the
    /// service's current catalog price.
    pub fn for_service(invoice_id: i64, service: &ClinicService, quantity: i64) -> Self {
        InvoiceLineItem {
            id: 0,
            invoice_id,
            kind: LineItemKind::ServiceRendered {
                service_id: service.id,
            },
            quantity,
            unit_subtotal_cents: service.price_cents,
        }
    }

    /// Creates a line for a dispensed medication, snapshotting the
    /// medication's current catalog price.
    pub fn for_medication(invoice_id: i64, medication: &Medication, quantity: i64) -> Self {
        InvoiceLineItem {
            id: 0,
            invoice_id,
            kind: LineItemKind::MedicationDispensed {
                medication_id: medication.id,
            },
            quantity,
            unit_subtotal_cents: medication.price_cents,
        }
    }

    /// Returns the frozen unit subtotal as Money.
    #[inline]
    pub fn unit_subtotal(&self) -> Money {
        Money::from_cents(self.unit_subtotal_cents)
    }

    /// Line total: `quantity × unit_subtotal`.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_subtotal().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Reports
// =============================================================================

/// Report row: a medication and how many units it has been billed for
/// across all invoices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestSellingMedication {
    pub name: String,
    pub total_sold: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
