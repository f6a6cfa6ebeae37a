//! # Pet Repository
//!
//! Database operations for pets.
//!
//! ## Owner resolution
//! `find_by_id` issues a second query to attach the owning [`Client`]
//! record. `list_all` does not: the bulk listing stays a single statement
//! and leaves `owner` empty, so callers that need owner data on a listing
//! re-fetch each pet individually.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::error::StoreResult;
use crate::repository::client::ClientRepository;
use crate::repository::Repository;
use vetdesk_core::{Client, Pet};

/// Repository for pet database operations.
#[derive(Debug, Clone)]
pub struct PetRepository {
    pool: SqlitePool,
}

impl PetRepository {
    /// Creates a new PetRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PetRepository { pool }
    }
}

fn map_pet(row: &SqliteRow) -> Result<Pet, sqlx::Error> {
    Ok(Pet {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        species: row.try_get("species")?,
        breed: row.try_get("breed")?,
        age: row.try_get("age")?,
        sex: row.try_get("sex")?,
        client_id: row.try_get("client_id")?,
        // Populated by find_by_id only.
        owner: None,
    })
}

#[async_trait]
impl Repository<Pet> for PetRepository {
    async fn create(&self, pet: &Pet) -> StoreResult<()> {
        debug!(name = %pet.name, client_id = pet.client_id, "Inserting pet");

        sqlx::query(
            "INSERT INTO pets (name, species, breed, age, sex, client_id) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&pet.name)
        .bind(&pet.species)
        .bind(&pet.breed)
        .bind(pet.age)
        .bind(&pet.sex)
        .bind(pet.client_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<Pet>> {
        let rows =
            sqlx::query("SELECT id, name, species, breed, age, sex, client_id FROM pets")
                .fetch_all(&self.pool)
                .await?;

        rows.iter()
            .map(map_pet)
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(Into::into)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Pet>> {
        let row = sqlx::query(
            "SELECT id, name, species, breed, age, sex, client_id FROM pets WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut pet = map_pet(&row)?;

        // Second statement: attach the owning client record.
        let owner: Option<Client> = ClientRepository::new(self.pool.clone())
            .find_by_id(pet.client_id)
            .await?;
        pet.owner = owner;

        Ok(Some(pet))
    }

    async fn update(&self, pet: &Pet) -> StoreResult<()> {
        sqlx::query(
            "UPDATE pets SET name = ?1, species = ?2, breed = ?3, age = ?4, sex = ?5, \
             client_id = ?6 WHERE id = ?7",
        )
        .bind(&pet.name)
        .bind(&pet.species)
        .bind(&pet.breed)
        .bind(pet.age)
        .bind(&pet.sex)
        .bind(pet.client_id)
        .bind(pet.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM pets WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
