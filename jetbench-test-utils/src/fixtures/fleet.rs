//! Factory functions for fleet database fixtures.
//!
//! Produces active models with standard test values, ready to insert into an
//! in-memory test database. IDs are left unset so the database assigns them.

use chrono::NaiveDate;
use entity::{
    aircraft::{AircraftManufacturer, AircraftType},
    engine::{EngineManufacturer, EngineType},
};
use rust_decimal::Decimal;
use sea_orm::ActiveValue;

/// Create a mock aircraft active model for testing.
pub fn mock_aircraft(serial: &str, registration: &str) -> entity::aircraft::ActiveModel {
    entity::aircraft::ActiveModel {
        manufacturer: ActiveValue::Set(AircraftManufacturer::Textron),
        aircraft_type: ActiveValue::Set(AircraftType::TwinTurboprop),
        model: ActiveValue::Set("KING AIR 350".to_string()),
        serial: ActiveValue::Set(serial.to_string()),
        registration: ActiveValue::Set(registration.to_string()),
        ..Default::default()
    }
}

/// Create a mock engine active model for testing.
///
/// Life counters are non-zero so tests can assert they survive unmounting.
pub fn mock_engine(serial: &str, aircraft_id: Option<i32>) -> entity::engine::ActiveModel {
    entity::engine::ActiveModel {
        aircraft_id: ActiveValue::Set(aircraft_id),
        manufacturer: ActiveValue::Set(EngineManufacturer::PrattWhitney),
        engine_type: ActiveValue::Set(EngineType::Turboprop),
        model: ActiveValue::Set("PT6A-60A".to_string()),
        serial: ActiveValue::Set(serial.to_string()),
        time_since_new: ActiveValue::Set(Decimal::new(12345, 1)),
        cycles_since_new: ActiveValue::Set(980),
        time_since_overhaul: ActiveValue::Set(Decimal::new(2105, 1)),
        cycles_since_overhaul: ActiveValue::Set(160),
        time_between_overhauls: ActiveValue::Set(Decimal::new(35000, 1)),
        ..Default::default()
    }
}

/// Create a mock flight leg active model for testing.
pub fn mock_flight_record(aircraft_id: i32) -> entity::aircraft_flight_record::ActiveModel {
    entity::aircraft_flight_record::ActiveModel {
        aircraft_id: ActiveValue::Set(aircraft_id),
        flight_date: ActiveValue::Set(NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()),
        flight_hours: ActiveValue::Set(Decimal::new(25, 1)),
        press_altitude: ActiveValue::Set(27500),
        outside_air_temp: ActiveValue::Set(Decimal::new(-385, 1)),
        indicated_air_speed: ActiveValue::Set(Some(255)),
        mach_number: ActiveValue::Set(None),
        ..Default::default()
    }
}

/// Create a mock engine reading active model for testing.
pub fn mock_engine_record(
    engine_id: i32,
    aircraft_flight_record_id: i32,
) -> entity::engine_flight_record::ActiveModel {
    entity::engine_flight_record::ActiveModel {
        engine_id: ActiveValue::Set(engine_id),
        aircraft_flight_record_id: ActiveValue::Set(aircraft_flight_record_id),
        speed_n1: ActiveValue::Set(Some(Decimal::new(855, 1))),
        speed_n2: ActiveValue::Set(Some(Decimal::new(972, 1))),
        engine_pr: ActiveValue::Set(Some(Decimal::new(15, 1))),
        interstage_tt: ActiveValue::Set(Some(Decimal::new(10905, 1))),
        engine_ff: ActiveValue::Set(Some(1200)),
        oil_press: ActiveValue::Set(Some(82)),
        oil_temp: ActiveValue::Set(Some(95)),
        oil_added: ActiveValue::Set(Some(1)),
        engine_vib: ActiveValue::Set(Some(Decimal::new(56, 2))),
        ..Default::default()
    }
}
