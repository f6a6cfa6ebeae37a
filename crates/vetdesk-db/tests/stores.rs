//! Integration tests for the record stores, run against in-memory SQLite
//! with the real schema and foreign keys enabled.

use chrono::{Duration, NaiveDate, Utc};
use vetdesk_core::{
    Appointment, ClinicService, Client, Invoice, InvoiceLineItem, Medication, Pet, Veterinarian,
};
use vetdesk_db::repository::Repository;
use vetdesk_db::{Database, DbConfig, StoreError};

/// Builds the reference chain an invoice needs: client → pet → vet →
/// appointment → invoice. Returns (client_id, appointment_id, invoice_id).
async fn seed_invoice(db: &Database) -> (i64, i64, i64) {
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
        .create(&Invoice::for_appointment(
            NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            client_id,
            appointment_id,
        ))
        .await
        .unwrap();
    let invoice_id = db.invoices().list_all().await.unwrap()[0].id;

    (client_id, appointment_id, invoice_id)
}

async fn seed_medication(db: &Database, name: &str, price_cents: i64) -> Medication {
    db.medications()
        .create(&Medication {
            id: 0,
            name: name.to_string(),
            description: String::new(),
            price_cents,
        })
        .await
        .unwrap();
    db.medications()
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .find(|m| m.name == name)
        .unwrap()
}

#[tokio::test]
async fn invoice_round_trips_through_the_store() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let (client_id, appointment_id, invoice_id) = seed_invoice(&db).await;

    let invoice = db.invoices().find_by_id(invoice_id).await.unwrap().unwrap();
    assert_eq!(invoice.issued_on, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
    assert_eq!(invoice.total_cents, 0);
    assert_eq!(invoice.client_id, client_id);
    assert_eq!(invoice.appointment_id, appointment_id);
}

#[tokio::test]
async fn line_items_round_trip_with_their_kind() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let (_, _, invoice_id) = seed_invoice(&db).await;

    db.clinic_services()
        .create(&ClinicService {
            id: 0,
            name: "Annual checkup".to_string(),
            description: String::new(),
            price_cents: 4000,
        })
        .await
        .unwrap();
    let service = db.clinic_services().list_all().await.unwrap().remove(0);
    let medication = seed_medication(&db, "Amoxicillin", 1250).await;

    let line_items = db.invoice_line_items();
    line_items
        .create(&InvoiceLineItem::for_service(invoice_id, &service, 1))
        .await
        .unwrap();
    line_items
        .create(&InvoiceLineItem::for_medication(invoice_id, &medication, 2))
        .await
        .unwrap();

    let lines = line_items.find_by_invoice(invoice_id).await.unwrap();
    assert_eq!(lines.len(), 2);

    assert_eq!(lines[0].kind.service_id(), Some(service.id));
    assert_eq!(lines[0].kind.medication_id(), None);
    assert_eq!(lines[0].unit_subtotal_cents, 4000);

    assert_eq!(lines[1].kind.medication_id(), Some(medication.id));
    assert_eq!(lines[1].kind.service_id(), None);
    assert_eq!(lines[1].quantity, 2);
}

#[tokio::test]
async fn deleting_an_invoice_does_not_cascade_to_line_items() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let (_, _, invoice_id) = seed_invoice(&db).await;

    let medication = seed_medication(&db, "Cerenia", 1600).await;
    db.invoice_line_items()
        .create(&InvoiceLineItem::for_medication(invoice_id, &medication, 1))
        .await
        .unwrap();

    // With a line still attached, the delete is a foreign key violation
    // rather than a silent cascade.
    let err = db.invoices().delete(invoice_id).await.unwrap_err();
    assert!(matches!(err, StoreError::ForeignKeyViolation { .. }));

    let lines = db
        .invoice_line_items()
        .find_by_invoice(invoice_id)
        .await
        .unwrap();
    assert_eq!(lines.len(), 1);
}

#[tokio::test]
async fn pet_lookup_attaches_owner_but_listing_does_not() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let (client_id, _, _) = seed_invoice(&db).await;

    let listed = db.pets().list_all().await.unwrap().remove(0);
    assert!(listed.owner.is_none());

    let fetched = db.pets().find_by_id(listed.id).await.unwrap().unwrap();
    let owner = fetched.owner.expect("single-record lookup resolves owner");
    assert_eq!(owner.id, client_id);
    assert_eq!(owner.name, "Ada Vance");
}

#[tokio::test]
async fn best_sellers_sums_medication_quantities() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let (_, _, invoice_id) = seed_invoice(&db).await;

    let amoxicillin = seed_medication(&db, "Amoxicillin", 1250).await;
    let cerenia = seed_medication(&db, "Cerenia", 1600).await;

    let line_items = db.invoice_line_items();
    line_items
        .create(&InvoiceLineItem::for_medication(invoice_id, &amoxicillin, 2))
        .await
        .unwrap();
    line_items
        .create(&InvoiceLineItem::for_medication(invoice_id, &amoxicillin, 3))
        .await
        .unwrap();
    line_items
        .create(&InvoiceLineItem::for_medication(invoice_id, &cerenia, 1))
        .await
        .unwrap();

    // A service line must not count towards medication sales.
    db.clinic_services()
        .create(&ClinicService {
            id: 0,
            name: "Nail trim".to_string(),
            description: String::new(),
            price_cents: 1200,
        })
        .await
        .unwrap();
    let service = db.clinic_services().list_all().await.unwrap().remove(0);
    line_items
        .create(&InvoiceLineItem::for_service(invoice_id, &service, 5))
        .await
        .unwrap();

    let report = db.medications().best_sellers().await.unwrap();
    assert_eq!(report.len(), 2);
    assert_eq!(report[0].name, "Amoxicillin");
    assert_eq!(report[0].total_sold, 5);
    assert_eq!(report[1].name, "Cerenia");
    assert_eq!(report[1].total_sold, 1);
}

#[tokio::test]
async fn foreign_keys_are_enforced_on_insert() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();

    // No parent rows at all: inserting a pet for a missing client fails.
    let err = db
        .pets()
        .create(&Pet {
            id: 0,
            name: "Ghost".to_string(),
            species: "dog".to_string(),
            breed: String::new(),
            age: 1,
            sex: "M".to_string(),
            client_id: 999,
            owner: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::ForeignKeyViolation { .. }));
}
