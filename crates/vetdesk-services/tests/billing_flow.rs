//! End-to-end billing flow through the full service graph, against an
//! in-memory database: register a client and pet, schedule tomorrow's
//! appointment, bill it, add a line, recompute the total.

use chrono::{Duration, Utc};
use vetdesk_core::{
    Appointment, ClinicService, Client, Invoice, Medication, Pet, Veterinarian,
};
use vetdesk_db::{Database, DbConfig};
use vetdesk_services::{DomainError, ServiceContext};

async fn context() -> ServiceContext {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    ServiceContext::new(&db)
}

#[tokio::test]
async fn billing_flow_end_to_end() {
    let ctx = context().await;

    // Register the client.
    ctx.clients
        .save(&Client {
            id: 0,
            name: "Ada Vance".to_string(),
            phone: "555-0101".to_string(),
        })
        .await
        .unwrap();
    let client = ctx.clients.list_all().await.unwrap().remove(0);

    // Register her pet.
    ctx.pets
        .save(&Pet {
            id: 0,
            name: "Luna".to_string(),
            species: "cat".to_string(),
            breed: "shorthair".to_string(),
            age: 3,
            sex: "F".to_string(),
            client_id: client.id,
            owner: None,
        })
        .await
        .unwrap();
    let pet = ctx.pets.list_all().await.unwrap().remove(0);

    ctx.veterinarians
        .save(&Veterinarian {
            id: 0,
            name: "Dr. Imani Okafor".to_string(),
            specialty: "General practice".to_string(),
            phone: "555-0140".to_string(),
            email: "imani@vetdesk.example".to_string(),
        })
        .await
        .unwrap();
    let veterinarian = ctx.veterinarians.list_all().await.unwrap().remove(0);

    // Schedule tomorrow's visit.
    ctx.appointments
        .save(&Appointment {
            id: 0,
            scheduled_at: Utc::now() + Duration::days(1),
            reason: "Annual checkup".to_string(),
            status: "pending".to_string(),
            pet_id: pet.id,
            veterinarian_id: veterinarian.id,
        })
        .await
        .unwrap();
    let appointment = ctx.appointments.list_all().await.unwrap().remove(0);

    // Bill the appointment: the invoice starts empty.
    ctx.invoices
        .save(&Invoice::for_appointment(
            Utc::now().date_naive(),
            client.id,
            appointment.id,
        ))
        .await
        .unwrap();
    let invoice = ctx.invoices.list_all().await.unwrap().remove(0);
    assert_eq!(invoice.total_cents, 0);

    // One service line: qty 1 at $40.00.
    ctx.clinic_services
        .save(&ClinicService {
            id: 0,
            name: "Annual checkup".to_string(),
            description: "Full yearly physical".to_string(),
            price_cents: 4000,
        })
        .await
        .unwrap();
    let service = ctx.clinic_services.list_all().await.unwrap().remove(0);

    ctx.line_items
        .add_service_line(invoice.id, service.id, 1)
        .await
        .unwrap();

    // Recompute: the stored total catches up to the line items.
    let invoice = ctx.aggregator.recompute_total(invoice.id).await.unwrap();
    assert_eq!(invoice.total_cents, 4000);

    // The display row resolves the catalog name.
    let rows = ctx.line_items.rows_for_invoice(invoice.id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Annual checkup");
    assert_eq!(rows[0].kind, "service");
    assert_eq!(rows[0].line_total.cents(), 4000);
}

#[tokio::test]
async fn not_found_handling_differs_per_entity() {
    let ctx = context().await;

    // Appointments promote absence to a failure...
    let err = ctx.appointments.find_by_id(123).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));

    // ...clients report it silently.
    assert!(ctx.clients.find_by_id(123).await.unwrap().is_none());
}

#[tokio::test]
async fn dangling_catalog_reference_renders_placeholder() {
    let ctx = context().await;

    // Minimal chain up to an invoice.
    ctx.clients
        .save(&Client {
            id: 0,
            name: "Ada Vance".to_string(),
            phone: String::new(),
        })
        .await
        .unwrap();
    let client = ctx.clients.list_all().await.unwrap().remove(0);
    ctx.pets
        .save(&Pet {
            id: 0,
            name: "Luna".to_string(),
            species: "cat".to_string(),
            breed: String::new(),
            age: 3,
            sex: "F".to_string(),
            client_id: client.id,
            owner: None,
        })
        .await
        .unwrap();
    let pet = ctx.pets.list_all().await.unwrap().remove(0);
    ctx.veterinarians
        .save(&Veterinarian {
            id: 0,
            name: "Dr. Imani Okafor".to_string(),
            specialty: String::new(),
            phone: String::new(),
            email: String::new(),
        })
        .await
        .unwrap();
    let vet = ctx.veterinarians.list_all().await.unwrap().remove(0);
    ctx.appointments
        .save(&Appointment {
            id: 0,
            scheduled_at: Utc::now() + Duration::days(1),
            reason: "Skin irritation".to_string(),
            status: "confirmed".to_string(),
            pet_id: pet.id,
            veterinarian_id: vet.id,
        })
        .await
        .unwrap();
    let appointment = ctx.appointments.list_all().await.unwrap().remove(0);
    ctx.invoices
        .save(&Invoice::for_appointment(
            Utc::now().date_naive(),
            client.id,
            appointment.id,
        ))
        .await
        .unwrap();
    let invoice = ctx.invoices.list_all().await.unwrap().remove(0);

    // Bill a medication, then retire it from the catalog.
    ctx.medications
        .save(&Medication {
            id: 0,
            name: "Otomax ointment".to_string(),
            description: String::new(),
            price_cents: 2750,
        })
        .await
        .unwrap();
    let medication = ctx.medications.list_all().await.unwrap().remove(0);
    ctx.line_items
        .add_medication_line(invoice.id, medication.id, 1)
        .await
        .unwrap();

    let rows = ctx.line_items.rows_for_invoice(invoice.id).await.unwrap();
    assert_eq!(rows[0].name, "Otomax ointment");

    // Retire the catalog entry. The line keeps its snapshot price and
    // the listing renders a placeholder instead of failing.
    ctx.medications.delete(medication.id).await.unwrap();

    let rows = ctx.line_items.rows_for_invoice(invoice.id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "medication not found");
    assert_eq!(rows[0].unit_subtotal.cents(), 2750);
}
