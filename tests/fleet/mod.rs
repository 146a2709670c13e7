mod flight;
mod registry;

use chrono::NaiveDate;
use entity::{
    aircraft::{AircraftManufacturer, AircraftType},
    engine::{EngineManufacturer, EngineType},
};
use jetbench::model::fleet::{NewAircraft, NewEngine, NewEngineReading, NewFlightLeg};
use jetbench_test_utils::prelude::*;
use rust_decimal::Decimal;

pub async fn setup() -> Result<TestSetup, TestError> {
    test_setup_with_fleet_tables!()
}

pub fn new_aircraft(serial: &str, registration: &str) -> NewAircraft {
    NewAircraft {
        manufacturer: AircraftManufacturer::Textron,
        aircraft_type: AircraftType::TwinTurboprop,
        model: "King Air 350".to_string(),
        serial: serial.to_string(),
        registration: registration.to_string(),
    }
}

pub fn new_engine(serial: &str, aircraft_id: Option<i32>) -> NewEngine {
    NewEngine {
        aircraft_id,
        manufacturer: EngineManufacturer::PrattWhitney,
        engine_type: EngineType::Turboprop,
        model: "PT6A-60A".to_string(),
        serial: serial.to_string(),
        time_since_new: Decimal::new(12345, 1),
        cycles_since_new: 980,
        time_since_overhaul: Decimal::new(2105, 1),
        cycles_since_overhaul: 160,
        time_between_overhauls: Decimal::new(35000, 1),
    }
}

pub fn new_flight_leg(aircraft_id: i32) -> NewFlightLeg {
    NewFlightLeg {
        aircraft_id,
        flight_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        flight_hours: Decimal::new(25, 1),
        press_altitude: 27_500,
        outside_air_temp: Decimal::new(-385, 1),
        indicated_air_speed: Some(255),
        mach_number: None,
    }
}

pub fn new_engine_reading(engine_id: i32, aircraft_flight_record_id: i32) -> NewEngineReading {
    NewEngineReading {
        engine_id,
        aircraft_flight_record_id,
        speed_n1: Some(Decimal::new(855, 1)),
        speed_n2: Some(Decimal::new(972, 1)),
        engine_pr: Some(Decimal::new(15, 1)),
        interstage_tt: Some(Decimal::new(10905, 1)),
        engine_ff: Some(1_200),
        oil_press: Some(82),
        oil_temp: Some(95),
        oil_added: Some(1),
        engine_vib: Some(Decimal::new(56, 2)),
    }
}
