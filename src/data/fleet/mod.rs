pub mod aircraft;
pub mod engine;
pub mod engine_record;
pub mod flight_record;

pub use aircraft::AircraftRepository;
pub use engine::EngineRepository;
pub use engine_record::EngineRecordRepository;
pub use flight_record::FlightRecordRepository;
