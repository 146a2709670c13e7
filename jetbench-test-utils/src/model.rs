pub type AircraftModel = entity::aircraft::Model;
pub type EngineModel = entity::engine::Model;
pub type AircraftFlightRecordModel = entity::aircraft_flight_record::Model;
pub type EngineFlightRecordModel = entity::engine_flight_record::Model;
