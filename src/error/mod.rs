//! Error types for the fleet records model.
//!
//! Domain failures live in [`fleet::FleetError`]; everything converges on the
//! aggregate [`Error`] via `thiserror`'s `#[from]` conversions so callers can
//! use `?` throughout. Validation runs before any write, and the services
//! translate store-level constraint failures into the domain taxonomy rather
//! than leaking raw database errors for the specified failure modes.

pub mod config;
pub mod fleet;

use thiserror::Error;

use crate::error::{config::ConfigError, fleet::FleetError};

/// Main error type for the jetbench library.
#[derive(Error, Debug)]
pub enum Error {
    /// Domain error (validation, uniqueness conflict, restricted delete, missing record).
    #[error(transparent)]
    FleetError(#[from] FleetError),
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error (query failures, connection issues).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl From<crate::validate::ValidationFailure> for Error {
    fn from(failure: crate::validate::ValidationFailure) -> Self {
        Error::FleetError(FleetError::Validation(failure))
    }
}
