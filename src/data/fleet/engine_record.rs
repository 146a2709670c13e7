use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::fleet::NewEngineReading;

pub struct EngineRecordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EngineRecordRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create an engine reading from already-validated instrument values
    pub async fn create(
        &self,
        reading: NewEngineReading,
    ) -> Result<entity::engine_flight_record::Model, DbErr> {
        let record = entity::engine_flight_record::ActiveModel {
            engine_id: ActiveValue::Set(reading.engine_id),
            aircraft_flight_record_id: ActiveValue::Set(reading.aircraft_flight_record_id),
            speed_n1: ActiveValue::Set(reading.speed_n1),
            speed_n2: ActiveValue::Set(reading.speed_n2),
            engine_pr: ActiveValue::Set(reading.engine_pr),
            interstage_tt: ActiveValue::Set(reading.interstage_tt),
            engine_ff: ActiveValue::Set(reading.engine_ff),
            oil_press: ActiveValue::Set(reading.oil_press),
            oil_temp: ActiveValue::Set(reading.oil_temp),
            oil_added: ActiveValue::Set(reading.oil_added),
            engine_vib: ActiveValue::Set(reading.engine_vib),
            ..Default::default()
        };

        record.insert(self.db).await
    }

    /// Get an engine reading by its record ID
    pub async fn get(
        &self,
        record_id: i32,
    ) -> Result<Option<entity::engine_flight_record::Model>, DbErr> {
        entity::prelude::EngineFlightRecord::find_by_id(record_id)
            .one(self.db)
            .await
    }

    /// List the readings taken on one flight leg
    pub async fn list_by_flight_record(
        &self,
        aircraft_flight_record_id: i32,
    ) -> Result<Vec<entity::engine_flight_record::Model>, DbErr> {
        entity::prelude::EngineFlightRecord::find()
            .filter(
                entity::engine_flight_record::Column::AircraftFlightRecordId
                    .eq(aircraft_flight_record_id),
            )
            .all(self.db)
            .await
    }

    /// List an engine's readings joined to their flight legs, newest first.
    ///
    /// The history spans every airframe the engine has flown on; the joined
    /// leg carries the aircraft the engine was mounted on for that flight.
    pub async fn list_by_engine_with_flights(
        &self,
        engine_id: i32,
    ) -> Result<
        Vec<(
            entity::engine_flight_record::Model,
            Option<entity::aircraft_flight_record::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::EngineFlightRecord::find()
            .filter(entity::engine_flight_record::Column::EngineId.eq(engine_id))
            .find_also_related(entity::prelude::AircraftFlightRecord)
            .order_by_desc(entity::aircraft_flight_record::Column::FlightDate)
            .all(self.db)
            .await
    }
}
