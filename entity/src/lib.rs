pub mod prelude;

pub mod aircraft;
pub mod aircraft_flight_record;
pub mod engine;
pub mod engine_flight_record;
