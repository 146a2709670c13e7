use thiserror::Error;

use crate::validate::ValidationFailure;

/// Domain errors for registry and flight-record operations.
///
/// Every failure is terminal for the request; nothing is retried. The
/// variants carry enough detail for a caller to correct their input.
#[derive(Error, Debug)]
pub enum FleetError {
    /// One or more fields violate their declared ranges. Carries the full
    /// list of violations, never a partial one.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
    /// A uniqueness constraint was breached (duplicate engine serial, or
    /// duplicate aircraft serial + registration pair).
    #[error("{entity} already exists: {detail}")]
    ConstraintViolation { entity: &'static str, detail: String },
    /// Delete blocked because dependent records exist.
    #[error("{entity} {id} cannot be deleted: {dependents} dependent flight record(s) exist")]
    ReferentialRestriction {
        entity: &'static str,
        id: i32,
        dependents: u64,
    },
    /// The operation references a nonexistent record id.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },
}
