//! Fleet records model for aircraft and engine maintenance tracking.
//!
//! The crate keeps a registry of aircraft and their installed engines and
//! captures per-flight records: flight conditions for the airframe, engine
//! instrument readings tied to each flight. Engines move between airframes
//! over their lifetime while keeping their own cumulative time/cycle history,
//! which is what overhaul-interval tracking hangs off.
//!
//! Layering follows the usual split: `data` holds repositories speaking
//! sea-orm directly, `service` holds the business rules (uniqueness,
//! referential restrictions, range validation), `entity` (separate crate)
//! holds the table definitions.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod validate;
