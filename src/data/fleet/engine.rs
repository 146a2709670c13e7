use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::model::fleet::{EngineFilter, NewEngine};

pub struct EngineRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EngineRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create an engine from already-validated registration details
    pub async fn create(&self, engine: NewEngine) -> Result<entity::engine::Model, DbErr> {
        let engine = entity::engine::ActiveModel {
            aircraft_id: ActiveValue::Set(engine.aircraft_id),
            manufacturer: ActiveValue::Set(engine.manufacturer),
            engine_type: ActiveValue::Set(engine.engine_type),
            model: ActiveValue::Set(engine.model),
            serial: ActiveValue::Set(engine.serial),
            time_since_new: ActiveValue::Set(engine.time_since_new),
            cycles_since_new: ActiveValue::Set(engine.cycles_since_new),
            time_since_overhaul: ActiveValue::Set(engine.time_since_overhaul),
            cycles_since_overhaul: ActiveValue::Set(engine.cycles_since_overhaul),
            time_between_overhauls: ActiveValue::Set(engine.time_between_overhauls),
            ..Default::default()
        };

        engine.insert(self.db).await
    }

    /// Get an engine by its record ID
    pub async fn get(&self, engine_id: i32) -> Result<Option<entity::engine::Model>, DbErr> {
        entity::prelude::Engine::find_by_id(engine_id)
            .one(self.db)
            .await
    }

    /// Get an engine by its globally unique serial
    pub async fn get_by_serial(&self, serial: &str) -> Result<Option<entity::engine::Model>, DbErr> {
        entity::prelude::Engine::find()
            .filter(entity::engine::Column::Serial.eq(serial))
            .one(self.db)
            .await
    }

    /// List engines matching the given filter
    pub async fn list(&self, filter: &EngineFilter) -> Result<Vec<entity::engine::Model>, DbErr> {
        let mut query = entity::prelude::Engine::find();

        if let Some(manufacturer) = filter.manufacturer {
            query = query.filter(entity::engine::Column::Manufacturer.eq(manufacturer));
        }
        if let Some(engine_type) = filter.engine_type {
            query = query.filter(entity::engine::Column::EngineType.eq(engine_type));
        }
        if let Some(aircraft_id) = filter.aircraft_id {
            query = query.filter(entity::engine::Column::AircraftId.eq(aircraft_id));
        }
        if let Some(mounted) = filter.mounted {
            query = if mounted {
                query.filter(entity::engine::Column::AircraftId.is_not_null())
            } else {
                query.filter(entity::engine::Column::AircraftId.is_null())
            };
        }

        query.all(self.db).await
    }

    /// Set or clear the engine's current mount.
    ///
    /// The engine's life counters are untouched; they belong to the engine,
    /// not the airframe.
    pub async fn set_aircraft(
        &self,
        engine: entity::engine::Model,
        aircraft_id: Option<i32>,
    ) -> Result<entity::engine::Model, DbErr> {
        let mut engine: entity::engine::ActiveModel = engine.into();
        engine.aircraft_id = ActiveValue::Set(aircraft_id);

        engine.update(self.db).await
    }

    /// Count the flight records referencing an engine
    pub async fn count_flight_records(&self, engine_id: i32) -> Result<u64, DbErr> {
        entity::prelude::EngineFlightRecord::find()
            .filter(entity::engine_flight_record::Column::EngineId.eq(engine_id))
            .count(self.db)
            .await
    }

    /// Delete an engine row.
    ///
    /// Callers must check [`Self::count_flight_records`] first; the schema
    /// restricts deletion while readings reference the engine.
    pub async fn delete(&self, engine_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Engine::delete_by_id(engine_id)
            .exec(self.db)
            .await
    }
}
