//! # Medication Repository
//!
//! Database operations for the medication catalog, plus the best-sellers
//! report used by the inventory screen.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::error::StoreResult;
use crate::repository::Repository;
use vetdesk_core::{BestSellingMedication, Medication};

/// Repository for medication database operations.
#[derive(Debug, Clone)]
pub struct MedicationRepository {
    pool: SqlitePool,
}

impl MedicationRepository {
    /// Creates a new MedicationRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MedicationRepository { pool }
    }

    /// Counts catalog entries (used by the seed binary's guard).
    pub async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM medications")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Best-selling medications: units billed across all invoices,
    /// descending.
    ///
    /// Only medication-kind line items participate; the quantity is
    /// summed per catalog entry.
    pub async fn best_sellers(&self) -> StoreResult<Vec<BestSellingMedication>> {
        let rows = sqlx::query(
            "SELECT m.name AS name, SUM(li.quantity) AS total_sold \
             FROM invoice_line_items li \
             JOIN medications m ON m.id = li.medication_id \
             WHERE li.kind = 'medication' \
             GROUP BY m.id, m.name \
             ORDER BY total_sold DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(BestSellingMedication {
                    name: row.try_get("name")?,
                    total_sold: row.try_get("total_sold")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(Into::into)
    }
}

fn map_medication(row: &SqliteRow) -> Result<Medication, sqlx::Error> {
    Ok(Medication {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        price_cents: row.try_get("price_cents")?,
    })
}

#[async_trait]
impl Repository<Medication> for MedicationRepository {
    async fn create(&self, medication: &Medication) -> StoreResult<()> {
        debug!(name = %medication.name, "Inserting medication");

        sqlx::query(
            "INSERT INTO medications (name, description, price_cents) VALUES (?1, ?2, ?3)",
        )
        .bind(&medication.name)
        .bind(&medication.description)
        .bind(medication.price_cents)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<Medication>> {
        let rows = sqlx::query("SELECT id, name, description, price_cents FROM medications")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(map_medication)
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(Into::into)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Medication>> {
        let row = sqlx::query(
            "SELECT id, name, description, price_cents FROM medications WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref()
            .map(map_medication)
            .transpose()
            .map_err(Into::into)
    }

    async fn update(&self, medication: &Medication) -> StoreResult<()> {
        sqlx::query(
            "UPDATE medications SET name = ?1, description = ?2, price_cents = ?3 WHERE id = ?4",
        )
        .bind(&medication.name)
        .bind(&medication.description)
        .bind(medication.price_cents)
        .bind(medication.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM medications WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
