//! # Client Repository
//!
//! Database operations for clients (pet owners).

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::error::StoreResult;
use crate::repository::Repository;
use vetdesk_core::Client;

/// Repository for client database operations.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    pool: SqlitePool,
}

impl ClientRepository {
    /// Creates a new ClientRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ClientRepository { pool }
    }
}

fn map_client(row: &SqliteRow) -> Result<Client, sqlx::Error> {
    Ok(Client {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        phone: row.try_get("phone")?,
    })
}

#[async_trait]
impl Repository<Client> for ClientRepository {
    async fn create(&self, client: &Client) -> StoreResult<()> {
        debug!(name = %client.name, "Inserting client");

        sqlx::query("INSERT INTO clients (name, phone) VALUES (?1, ?2)")
            .bind(&client.name)
            .bind(&client.phone)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<Client>> {
        let rows = sqlx::query("SELECT id, name, phone FROM clients")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(map_client)
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(Into::into)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Client>> {
        let row = sqlx::query("SELECT id, name, phone FROM clients WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_client).transpose().map_err(Into::into)
    }

    async fn update(&self, client: &Client) -> StoreResult<()> {
        sqlx::query("UPDATE clients SET name = ?1, phone = ?2 WHERE id = ?3")
            .bind(&client.name)
            .bind(&client.phone)
            .bind(client.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM clients WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
