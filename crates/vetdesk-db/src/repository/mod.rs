//! # Repositories
//!
//! Record-store implementations, one per entity, all built on the same
//! generic contract.
//!
//! ## The Generic Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Repository<T>                                      │
//! │                                                                         │
//! │  create(&T)        INSERT without the id column; the store assigns     │
//! │                    the id, observable on subsequent reads              │
//! │  list_all()        every row, no guaranteed ordering                   │
//! │  find_by_id(id)    Ok(None) when absent - absence is not an error      │
//! │  update(&T)        full-row overwrite by id; zero rows affected is     │
//! │                    silently accepted                                   │
//! │  delete(id)        same zero-rows tolerance as update                  │
//! │                                                                         │
//! │  Implementations add entity-specific lookups on their own inherent    │
//! │  impl (line items by invoice, best-selling medications, ...).          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Keeping the five operations identical across every entity is what lets
//! the service layer apply one uniform validate-then-persist and
//! error-translation pattern on top.

use async_trait::async_trait;

use crate::error::StoreResult;

pub mod appointment;
pub mod client;
pub mod clinic_service;
pub mod invoice;
pub mod line_item;
pub mod medication;
pub mod pet;
pub mod veterinarian;

/// Generic persistence contract, parameterized over an entity type.
///
/// Every transport or driver failure surfaces as a `StoreError` carrying
/// the underlying cause; raw `sqlx` errors never escape this layer.
#[async_trait]
pub trait Repository<T> {
    /// Inserts a new row. The entity's `id` field is ignored on input;
    /// the store-generated id becomes observable on subsequent reads
    /// (it is deliberately not returned here - callers re-fetch when
    /// they need it immediately).
    async fn create(&self, entity: &T) -> StoreResult<()>;

    /// Returns every row. Ordering is not guaranteed to be stable.
    async fn list_all(&self) -> StoreResult<Vec<T>>;

    /// Looks up a single row. Absence is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<T>>;

    /// Full-row overwrite keyed by the entity's id. Updating a
    /// non-existent id is not itself an error; callers needing
    /// "must exist" semantics perform an explicit existence check first.
    async fn update(&self, entity: &T) -> StoreResult<()>;

    /// Deletes by id, with the same zero-rows-affected tolerance as
    /// `update`.
    async fn delete(&self, id: i64) -> StoreResult<()>;
}
