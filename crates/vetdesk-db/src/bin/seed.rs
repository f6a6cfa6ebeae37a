//! # Seed Data Generator
//!
//! Populates the database with starter catalogs for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p vetdesk-db --bin seed
//!
//! # Specify database path
//! cargo run -p vetdesk-db --bin seed -- --db ./data/vetdesk.db
//! ```
//!
//! The path may also come from the `VETDESK_DB` environment variable;
//! the `--db` flag wins when both are set.
//!
//! ## Generated Data
//! - Medication catalog (common veterinary prescriptions)
//! - Clinic-service catalog (consultations, procedures, grooming)
//! - One demo client, pet and veterinarian so the invoice flow can be
//!   exercised immediately

use std::env;

use vetdesk_core::{ClinicService, Client, Medication, Pet, Veterinarian};
use vetdesk_db::repository::Repository;
use vetdesk_db::{Database, DbConfig};

/// Medication catalog: (name, description, price in cents).
const MEDICATIONS: &[(&str, &str, i64)] = &[
    ("Amoxicillin 250mg", "Broad-spectrum antibiotic", 1250),
    ("Carprofen 75mg", "Anti-inflammatory for dogs", 1850),
    ("Meloxicam oral", "Pain relief suspension", 2100),
    ("Frontline Plus", "Flea and tick treatment", 3500),
    ("Heartgard chewable", "Monthly heartworm preventive", 4200),
    ("Otomax ointment", "Ear infection treatment", 2750),
    ("Cerenia 16mg", "Anti-nausea tablet", 1600),
    ("Apoquel 5.4mg", "Allergy itch relief", 2950),
];

/// Clinic-service catalog: (name, description, price in cents).
const SERVICES: &[(&str, &str, i64)] = &[
    ("General consultation", "Walk-in examination", 3000),
    ("Annual checkup", "Full yearly physical", 4000),
    ("Vaccination", "Single vaccine administration", 2500),
    ("Dental cleaning", "Scale and polish under sedation", 12000),
    ("Spay/neuter", "Routine sterilization surgery", 18000),
    ("Nail trim", "Claw clipping and filing", 1200),
    ("Deworming", "Internal parasite treatment", 1800),
    ("X-ray", "Single radiograph with reading", 9500),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = env::var("VETDESK_DB").unwrap_or_else(|_| "./vetdesk_dev.db".to_string());

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Vetdesk Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./vetdesk_dev.db,");
                println!("                     or the VETDESK_DB environment variable)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Vetdesk Seed Data Generator");
    println!("==============================");
    println!("Database: {}", db_path);
    println!();

    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Guard: don't double-seed the catalogs.
    let existing = db.medications().count().await? + db.clinic_services().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} catalog entries", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let medications = db.medications();
    for (name, description, price_cents) in MEDICATIONS {
        medications
            .create(&Medication {
                id: 0,
                name: name.to_string(),
                description: description.to_string(),
                price_cents: *price_cents,
            })
            .await?;
    }
    println!("✓ Seeded {} medications", MEDICATIONS.len());

    let services = db.clinic_services();
    for (name, description, price_cents) in SERVICES {
        services
            .create(&ClinicService {
                id: 0,
                name: name.to_string(),
                description: description.to_string(),
                price_cents: *price_cents,
            })
            .await?;
    }
    println!("✓ Seeded {} clinic services", SERVICES.len());

    // Demo records so the invoice flow is exercisable out of the box.
    db.clients()
        .create(&Client {
            id: 0,
            name: "Ada Vance".to_string(),
            phone: "555-0101".to_string(),
        })
        .await?;
    let client_id = db.clients().list_all().await?[0].id;

    db.pets()
        .create(&Pet {
            id: 0,
            name: "Luna".to_string(),
            species: "cat".to_string(),
            breed: "European shorthair".to_string(),
            age: 3,
            sex: "F".to_string(),
            client_id,
            owner: None,
        })
        .await?;

    db.veterinarians()
        .create(&Veterinarian {
            id: 0,
            name: "Dr. Imani Okafor".to_string(),
            specialty: "General practice".to_string(),
            phone: "555-0140".to_string(),
            email: "imani@vetdesk.example".to_string(),
        })
        .await?;
    println!("✓ Seeded demo client, pet and veterinarian");

    println!();
    println!("Done.");
    Ok(())
}
