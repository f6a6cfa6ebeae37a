//! # Validation Module
//!
//! Business-rule validation for Vetdesk entities.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Forms (desktop UI)                                           │
//! │  ├── Basic format checks (empty fields)                                │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Application Service                                          │
//! │  └── THIS MODULE: business-rule validation, before any store call      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── Foreign key constraints                                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every validator stops at the first violated rule and reports that one
//! rule only; violations are never aggregated.
//!
//! ## Usage
//! ```rust,ignore
//! use chrono::Utc;
//! use vetdesk_core::validation::validate_appointment;
//!
//! // Before any store call:
//! validate_appointment(&appointment, Utc::now())?;
//! ```

use chrono::{DateTime, Duration, Utc};
use std::str::FromStr;

use crate::error::{ValidationError, ValidationResult};
use crate::types::{
    Appointment, AppointmentStatus, ClinicService, Client, Invoice, InvoiceLineItem, Medication,
    Pet, Veterinarian,
};
use crate::MIN_REASON_LEN;

// =============================================================================
// Field Helpers
// =============================================================================

/// Checks that a free-text field is non-empty after trimming.
fn require_text(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Checks that a foreign-key identifier is positive.
fn require_positive_id(field: &str, id: i64) -> ValidationResult<()> {
    if id <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Checks that a price in cents is non-negative. Zero is allowed
/// (courtesy services, free samples).
fn require_non_negative_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }
    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates a client record.
pub fn validate_client(client: &Client) -> ValidationResult<()> {
    require_text("name", &client.name)
}

/// Validates a pet record.
pub fn validate_pet(pet: &Pet) -> ValidationResult<()> {
    require_text("name", &pet.name)?;
    require_positive_id("client_id", pet.client_id)
}

/// Validates a veterinarian record.
pub fn validate_veterinarian(veterinarian: &Veterinarian) -> ValidationResult<()> {
    require_text("name", &veterinarian.name)
}

/// Validates a medication catalog entry.
pub fn validate_medication(medication: &Medication) -> ValidationResult<()> {
    require_text("name", &medication.name)?;
    require_non_negative_cents("price", medication.price_cents)
}

/// Validates a clinic-service catalog entry.
pub fn validate_clinic_service(service: &ClinicService) -> ValidationResult<()> {
    require_text("name", &service.name)?;
    require_non_negative_cents("price", service.price_cents)
}

/// Validates an appointment.
///
/// ## Rules (checked in order, first failure wins)
/// 1. `scheduled_at` must not be strictly before `now + 1 minute` —
///    scheduling in the past, including "right now", is rejected, with a
///    one-minute grace window.
/// 2. `reason` must be present and at least 5 characters after trimming.
/// 3. `status` must be present and, case-insensitively, one of
///    pending / confirmed / cancelled.
/// 4. `pet_id` must be positive.
/// 5. `veterinarian_id` must be positive.
///
/// `now` is passed in rather than read from the clock so the rule is a
/// pure function of its inputs.
pub fn validate_appointment(appointment: &Appointment, now: DateTime<Utc>) -> ValidationResult<()> {
    if appointment.scheduled_at < now + Duration::minutes(1) {
        return Err(ValidationError::PastDateTime {
            field: "scheduled_at".to_string(),
        });
    }

    let reason = appointment.reason.trim();
    if reason.is_empty() {
        return Err(ValidationError::Required {
            field: "reason".to_string(),
        });
    }
    if reason.chars().count() < MIN_REASON_LEN {
        return Err(ValidationError::TooShort {
            field: "reason".to_string(),
            min: MIN_REASON_LEN,
        });
    }

    if appointment.status.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "status".to_string(),
        });
    }
    if AppointmentStatus::from_str(&appointment.status).is_err() {
        return Err(ValidationError::NotAllowed {
            field: "status".to_string(),
            allowed: AppointmentStatus::ALL
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
        });
    }

    require_positive_id("pet_id", appointment.pet_id)?;
    require_positive_id("veterinarian_id", appointment.veterinarian_id)
}

/// Validates an invoice.
pub fn validate_invoice(invoice: &Invoice) -> ValidationResult<()> {
    require_non_negative_cents("total", invoice.total_cents)?;
    require_positive_id("client_id", invoice.client_id)?;
    require_positive_id("appointment_id", invoice.appointment_id)
}

/// Validates an invoice line item.
pub fn validate_line_item(line_item: &InvoiceLineItem) -> ValidationResult<()> {
    if line_item.quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    require_non_negative_cents("unit_subtotal", line_item.unit_subtotal_cents)?;
    require_positive_id("invoice_id", line_item.invoice_id)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn appointment() -> Appointment {
        Appointment {
            id: 0,
            scheduled_at: Utc::now() + Duration::days(1),
            reason: "Annual checkup".to_string(),
            status: "pending".to_string(),
            pet_id: 1,
            veterinarian_id: 1,
        }
    }

    #[test]
    fn test_valid_appointment_passes() {
        assert!(validate_appointment(&appointment(), Utc::now()).is_ok());
    }

    #[test]
    fn test_past_datetime_rejected() {
        let now = Utc::now();
        let mut appt = appointment();

        appt.scheduled_at = now - Duration::hours(2);
        assert_eq!(
            validate_appointment(&appt, now),
            Err(ValidationError::PastDateTime {
                field: "scheduled_at".to_string()
            })
        );

        // "Right now" falls inside the one-minute grace window too.
        appt.scheduled_at = now;
        assert!(validate_appointment(&appt, now).is_err());

        // Exactly at the window edge is accepted.
        appt.scheduled_at = now + Duration::minutes(1);
        assert!(validate_appointment(&appt, now).is_ok());
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let now = Utc::now();
        let mut appt = appointment();
        appt.scheduled_at = now - Duration::hours(1);
        appt.reason = String::new();

        // Both rules are violated; the datetime rule is reported.
        assert_eq!(
            validate_appointment(&appt, now),
            Err(ValidationError::PastDateTime {
                field: "scheduled_at".to_string()
            })
        );
    }

    #[test]
    fn test_reason_rules() {
        let now = Utc::now();
        let mut appt = appointment();

        appt.reason = "   ".to_string();
        assert_eq!(
            validate_appointment(&appt, now),
            Err(ValidationError::Required {
                field: "reason".to_string()
            })
        );

        appt.reason = "Vet ".to_string(); // 3 chars after trim
        assert_eq!(
            validate_appointment(&appt, now),
            Err(ValidationError::TooShort {
                field: "reason".to_string(),
                min: 5
            })
        );
    }

    #[test]
    fn test_status_accepts_any_casing() {
        let now = Utc::now();
        let mut appt = appointment();

        for status in ["pending", "Confirmed", "CANCELLED"] {
            appt.status = status.to_string();
            assert!(validate_appointment(&appt, now).is_ok(), "{status}");
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        let now = Utc::now();
        let mut appt = appointment();

        appt.status = "done".to_string();
        assert!(matches!(
            validate_appointment(&appt, now),
            Err(ValidationError::NotAllowed { .. })
        ));

        appt.status = String::new();
        assert!(matches!(
            validate_appointment(&appt, now),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_reference_ids_must_be_positive() {
        let now = Utc::now();
        let mut appt = appointment();

        appt.pet_id = 0;
        assert_eq!(
            validate_appointment(&appt, now),
            Err(ValidationError::MustBePositive {
                field: "pet_id".to_string()
            })
        );

        appt.pet_id = 1;
        appt.veterinarian_id = -4;
        assert_eq!(
            validate_appointment(&appt, now),
            Err(ValidationError::MustBePositive {
                field: "veterinarian_id".to_string()
            })
        );
    }

    #[test]
    fn test_client_requires_name() {
        let client = Client {
            id: 0,
            name: "  ".to_string(),
            phone: "555-0101".to_string(),
        };
        assert!(validate_client(&client).is_err());
    }

    #[test]
    fn test_pet_requires_owner() {
        let pet = Pet {
            id: 0,
            name: "Luna".to_string(),
            species: "cat".to_string(),
            breed: "shorthair".to_string(),
            age: 3,
            sex: "F".to_string(),
            client_id: 0,
            owner: None,
        };
        assert_eq!(
            validate_pet(&pet),
            Err(ValidationError::MustBePositive {
                field: "client_id".to_string()
            })
        );
    }

    #[test]
    fn test_line_item_quantity_must_be_positive() {
        let service = ClinicService {
            id: 1,
            name: "Checkup".to_string(),
            description: String::new(),
            price_cents: 4000,
        };
        let mut line = InvoiceLineItem::for_service(1, &service, 0);
        assert_eq!(
            validate_line_item(&line),
            Err(ValidationError::MustBePositive {
                field: "quantity".to_string()
            })
        );

        line.quantity = 1;
        assert!(validate_line_item(&line).is_ok());
    }

    #[test]
    fn test_invoice_total_must_be_non_negative() {
        let mut invoice = Invoice::for_appointment(
            chrono::NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            1,
            1,
        );
        assert!(validate_invoice(&invoice).is_ok());

        invoice.total_cents = -1;
        assert!(matches!(
            validate_invoice(&invoice),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
