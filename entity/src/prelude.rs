pub use super::aircraft::Entity as Aircraft;
pub use super::aircraft_flight_record::Entity as AircraftFlightRecord;
pub use super::engine::Entity as Engine;
pub use super::engine_flight_record::Entity as EngineFlightRecord;
