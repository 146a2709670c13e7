pub use sea_orm_migration::prelude::*;

mod m20260829_000001_aircraft;
mod m20260829_000002_engine;
mod m20260829_000003_aircraft_flight_record;
mod m20260829_000004_engine_flight_record;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260829_000001_aircraft::Migration),
            Box::new(m20260829_000002_engine::Migration),
            Box::new(m20260829_000003_aircraft_flight_record::Migration),
            Box::new(m20260829_000004_engine_flight_record::Migration),
        ]
    }
}
