//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`EggSorterError`] via `#[from]`.

/// Top-level error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum EggSorterError {
    /// A value broke a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A looked-up item does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The dataset backing the dashboard could not be read.
    #[error("data source error")]
    DataSource(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A percentage outside `0..=100`.
    #[error("percentage {0} is out of range 0..=100")]
    PercentOutOfRange(u16),

    /// A UTC offset that chrono cannot represent.
    #[error("utc offset of {0} minutes is out of range")]
    UtcOffsetOutOfRange(i32),

    /// A weight that is negative or not a finite number.
    #[error("weight must be a finite, non-negative number of grams")]
    InvalidWeight,
}

/// A named item could not be found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id:?} not found")]
pub struct NotFoundError {
    /// Kind of item (e.g. `"Page"`).
    pub entity: &'static str,
    /// The identifier that was requested.
    pub id: String,
}
