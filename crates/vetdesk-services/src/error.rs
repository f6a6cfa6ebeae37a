//! # Domain Error Type
//!
//! Unified failure type for the application services.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Vetdesk                                │
//! │                                                                         │
//! │  Presentation                 Service Layer                             │
//! │  ────────────                 ─────────────                             │
//! │                                                                         │
//! │  save button pressed                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Service Method                                                  │  │
//! │  │  Result<T, DomainError>                                          │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation failed? ── ValidationError ──────────┐              │  │
//! │  │         │                  (store never touched) │              │  │
//! │  │         ▼                                        ▼              │  │
//! │  │  Store failed? ──── StoreError ── wrap ───── DomainError ──────►│  │
//! │  │         │           ("failed to save client: <cause>")          │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The presentation layer renders `DomainError`'s message in a dialog.   │
//! │  There is no retry logic anywhere; a failure is terminal for that      │
//! │  user action.                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use vetdesk_core::ValidationError;
use vetdesk_db::StoreError;

/// The only failure type the presentation boundary handles.
///
/// Wrapped store failures keep the original cause both in the rendered
/// message and in the error chain (`#[source]`), so nothing is lost on
/// the way up.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A business rule was violated; the store was never touched.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An entity that must exist does not. Only raised by services that
    /// promote absence to a failure (appointments, the aggregator);
    /// plain lookups return `Ok(None)` instead.
    #[error("no {entity} found with id {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// A store operation failed; the message carries an
    /// operation-specific prefix plus the underlying cause.
    #[error("{context}: {source}")]
    Store {
        context: String,
        #[source]
        source: StoreError,
    },
}

impl DomainError {
    /// Creates a NotFound error for the given entity and id.
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        DomainError::NotFound { entity, id }
    }

    /// Returns a closure for `map_err` that wraps a store failure with
    /// an operation-specific context prefix. Every service method uses
    /// this, keeping the translation pattern uniform:
    ///
    /// ```rust,ignore
    /// self.repo
    ///     .create(client)
    ///     .await
    ///     .map_err(DomainError::store("failed to save client"))
    /// ```
    pub fn store(context: impl Into<String>) -> impl FnOnce(StoreError) -> Self {
        let context = context.into();
        move |source| DomainError::Store { context, source }
    }
}

/// Result type for application service operations.
pub type DomainResult<T> = Result<T, DomainError>;
