use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    DeleteResult, EntityTrait, QueryFilter, QuerySelect, TransactionTrait, Value,
};

use crate::model::fleet::{AircraftFilter, NewAircraft};

pub struct AircraftRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create an aircraft from already-normalized registration details
    pub async fn create(&self, aircraft: NewAircraft) -> Result<entity::aircraft::Model, DbErr> {
        let aircraft = entity::aircraft::ActiveModel {
            manufacturer: ActiveValue::Set(aircraft.manufacturer),
            aircraft_type: ActiveValue::Set(aircraft.aircraft_type),
            model: ActiveValue::Set(aircraft.model),
            serial: ActiveValue::Set(aircraft.serial),
            registration: ActiveValue::Set(aircraft.registration),
            ..Default::default()
        };

        aircraft.insert(self.db).await
    }

    /// Get an aircraft by its record ID
    pub async fn get(&self, aircraft_id: i32) -> Result<Option<entity::aircraft::Model>, DbErr> {
        entity::prelude::Aircraft::find_by_id(aircraft_id)
            .one(self.db)
            .await
    }

    /// Get an aircraft by its unique (serial, registration) pair
    pub async fn get_by_serial_and_registration(
        &self,
        serial: &str,
        registration: &str,
    ) -> Result<Option<entity::aircraft::Model>, DbErr> {
        entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::Serial.eq(serial))
            .filter(entity::aircraft::Column::Registration.eq(registration))
            .one(self.db)
            .await
    }

    /// List aircraft matching the given filter
    pub async fn list(&self, filter: &AircraftFilter) -> Result<Vec<entity::aircraft::Model>, DbErr> {
        let mut query = entity::prelude::Aircraft::find();

        if let Some(manufacturer) = filter.manufacturer {
            query = query.filter(entity::aircraft::Column::Manufacturer.eq(manufacturer));
        }
        if let Some(aircraft_type) = filter.aircraft_type {
            query = query.filter(entity::aircraft::Column::AircraftType.eq(aircraft_type));
        }
        if let Some(registration) = &filter.registration {
            query = query.filter(entity::aircraft::Column::Registration.contains(registration));
        }

        query.all(self.db).await
    }

    /// Delete an aircraft together with its flight records.
    ///
    /// Runs as one transaction: the per-engine readings of its flight legs go
    /// first, then the legs, then mounted engines are set adrift (aircraft_id
    /// nulled, counters untouched), then the aircraft row itself. The engines
    /// and their own flight history are deliberately preserved.
    pub async fn delete(&self, aircraft_id: i32) -> Result<DeleteResult, DbErr> {
        let txn = self.db.begin().await?;

        let record_ids: Vec<i32> = entity::prelude::AircraftFlightRecord::find()
            .select_only()
            .column(entity::aircraft_flight_record::Column::Id)
            .filter(entity::aircraft_flight_record::Column::AircraftId.eq(aircraft_id))
            .into_tuple()
            .all(&txn)
            .await?;

        if !record_ids.is_empty() {
            entity::prelude::EngineFlightRecord::delete_many()
                .filter(
                    entity::engine_flight_record::Column::AircraftFlightRecordId
                        .is_in(record_ids.clone()),
                )
                .exec(&txn)
                .await?;

            entity::prelude::AircraftFlightRecord::delete_many()
                .filter(entity::aircraft_flight_record::Column::Id.is_in(record_ids))
                .exec(&txn)
                .await?;
        }

        entity::prelude::Engine::update_many()
            .col_expr(
                entity::engine::Column::AircraftId,
                Expr::value(Value::Int(None)),
            )
            .filter(entity::engine::Column::AircraftId.eq(aircraft_id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Aircraft::delete_by_id(aircraft_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result)
    }
}
