//! Input and query types for the fleet registry and flight log.

use chrono::NaiveDate;
use entity::{
    aircraft::{AircraftManufacturer, AircraftType},
    engine::{EngineManufacturer, EngineType},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Registration details for a new airframe.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewAircraft {
    pub manufacturer: AircraftManufacturer,
    pub aircraft_type: AircraftType,
    pub model: String,
    pub serial: String,
    pub registration: String,
}

/// Registration details for a new engine.
///
/// Counters are supplied rather than zeroed because an engine may enter the
/// fleet mid-life, e.g. bought used or transferred from another operator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewEngine {
    pub aircraft_id: Option<i32>,
    pub manufacturer: EngineManufacturer,
    pub engine_type: EngineType,
    pub model: String,
    pub serial: String,
    pub time_since_new: Decimal,
    pub cycles_since_new: i32,
    pub time_since_overhaul: Decimal,
    pub cycles_since_overhaul: i32,
    pub time_between_overhauls: Decimal,
}

/// One flight leg to record against an aircraft.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewFlightLeg {
    pub aircraft_id: i32,
    pub flight_date: NaiveDate,
    pub flight_hours: Decimal,
    pub press_altitude: i32,
    pub outside_air_temp: Decimal,
    pub indicated_air_speed: Option<i32>,
    pub mach_number: Option<Decimal>,
}

/// Instrument readings for one engine on one recorded flight leg.
///
/// Callers submit one reading set per engine installed at flight time; the
/// system does not fan these out automatically.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewEngineReading {
    pub engine_id: i32,
    pub aircraft_flight_record_id: i32,
    pub speed_n1: Option<Decimal>,
    pub speed_n2: Option<Decimal>,
    pub engine_pr: Option<Decimal>,
    pub interstage_tt: Option<Decimal>,
    pub engine_ff: Option<i32>,
    pub oil_press: Option<i32>,
    pub oil_temp: Option<i32>,
    pub oil_added: Option<i32>,
    pub engine_vib: Option<Decimal>,
}

/// Listing filter for the aircraft registry.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AircraftFilter {
    pub manufacturer: Option<AircraftManufacturer>,
    pub aircraft_type: Option<AircraftType>,
    /// Substring match on the registration mark.
    pub registration: Option<String>,
}

/// Listing filter for the engine registry.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EngineFilter {
    pub manufacturer: Option<EngineManufacturer>,
    pub engine_type: Option<EngineType>,
    /// Restrict to engines currently mounted on this aircraft.
    pub aircraft_id: Option<i32>,
    /// `Some(true)` for mounted engines only, `Some(false)` for storage.
    pub mounted: Option<bool>,
}

/// One entry of an engine's flight history: the reading joined to the flight
/// leg it was taken on. The leg's `aircraft_id` is the authoritative answer
/// to "which airframe was this engine on for this flight".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineHistoryEntry {
    pub reading: entity::engine_flight_record::Model,
    pub flight: entity::aircraft_flight_record::Model,
}
