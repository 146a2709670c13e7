use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::model::fleet::NewFlightLeg;

pub struct FlightRecordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightRecordRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a flight record from already-validated flight conditions
    pub async fn create(
        &self,
        leg: NewFlightLeg,
    ) -> Result<entity::aircraft_flight_record::Model, DbErr> {
        let record = entity::aircraft_flight_record::ActiveModel {
            aircraft_id: ActiveValue::Set(leg.aircraft_id),
            flight_date: ActiveValue::Set(leg.flight_date),
            flight_hours: ActiveValue::Set(leg.flight_hours),
            press_altitude: ActiveValue::Set(leg.press_altitude),
            outside_air_temp: ActiveValue::Set(leg.outside_air_temp),
            indicated_air_speed: ActiveValue::Set(leg.indicated_air_speed),
            mach_number: ActiveValue::Set(leg.mach_number),
            ..Default::default()
        };

        record.insert(self.db).await
    }

    /// Get a flight record by its record ID
    pub async fn get(
        &self,
        record_id: i32,
    ) -> Result<Option<entity::aircraft_flight_record::Model>, DbErr> {
        entity::prelude::AircraftFlightRecord::find_by_id(record_id)
            .one(self.db)
            .await
    }

    /// List an aircraft's flight records, newest first
    pub async fn list_by_aircraft(
        &self,
        aircraft_id: i32,
    ) -> Result<Vec<entity::aircraft_flight_record::Model>, DbErr> {
        entity::prelude::AircraftFlightRecord::find()
            .filter(entity::aircraft_flight_record::Column::AircraftId.eq(aircraft_id))
            .order_by_desc(entity::aircraft_flight_record::Column::FlightDate)
            .all(self.db)
            .await
    }

    /// Delete a flight record together with its per-engine readings.
    ///
    /// Runs as one transaction. Engines and the aircraft are untouched.
    pub async fn delete(&self, record_id: i32) -> Result<DeleteResult, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::EngineFlightRecord::delete_many()
            .filter(entity::engine_flight_record::Column::AircraftFlightRecordId.eq(record_id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::AircraftFlightRecord::delete_by_id(record_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result)
    }
}
