use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260829_000002_engine::Engine,
    m20260829_000003_aircraft_flight_record::AircraftFlightRecord,
};

static IDX_ENGINE_FLIGHT_RECORD_ENGINE_ID: &str = "idx_engine_flight_record_engine_id";
static IDX_ENGINE_FLIGHT_RECORD_FLIGHT_ID: &str = "idx_engine_flight_record_aircraft_flight_record_id";
static FK_ENGINE_FLIGHT_RECORD_ENGINE_ID: &str = "fk_engine_flight_record_engine_id";
static FK_ENGINE_FLIGHT_RECORD_FLIGHT_ID: &str = "fk_engine_flight_record_aircraft_flight_record_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EngineFlightRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(EngineFlightRecord::Id))
                    .col(integer(EngineFlightRecord::EngineId))
                    .col(integer(EngineFlightRecord::AircraftFlightRecordId))
                    .col(decimal_len_null(EngineFlightRecord::SpeedN1, 4, 1))
                    .col(decimal_len_null(EngineFlightRecord::SpeedN2, 4, 1))
                    .col(decimal_len_null(EngineFlightRecord::EnginePr, 4, 1))
                    .col(decimal_len_null(EngineFlightRecord::InterstageTt, 5, 1))
                    .col(integer_null(EngineFlightRecord::EngineFf))
                    .col(integer_null(EngineFlightRecord::OilPress))
                    .col(integer_null(EngineFlightRecord::OilTemp))
                    .col(integer_null(EngineFlightRecord::OilAdded))
                    .col(decimal_len_null(EngineFlightRecord::EngineVib, 3, 2))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ENGINE_FLIGHT_RECORD_ENGINE_ID)
                    .table(EngineFlightRecord::Table)
                    .col(EngineFlightRecord::EngineId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ENGINE_FLIGHT_RECORD_FLIGHT_ID)
                    .table(EngineFlightRecord::Table)
                    .col(EngineFlightRecord::AircraftFlightRecordId)
                    .to_owned(),
            )
            .await?;

        // Readings pin the engine: an engine with history cannot be deleted.
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ENGINE_FLIGHT_RECORD_ENGINE_ID)
                    .from_tbl(EngineFlightRecord::Table)
                    .from_col(EngineFlightRecord::EngineId)
                    .to_tbl(Engine::Table)
                    .to_col(Engine::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        // Readings are owned by their flight leg and go with it.
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ENGINE_FLIGHT_RECORD_FLIGHT_ID)
                    .from_tbl(EngineFlightRecord::Table)
                    .from_col(EngineFlightRecord::AircraftFlightRecordId)
                    .to_tbl(AircraftFlightRecord::Table)
                    .to_col(AircraftFlightRecord::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ENGINE_FLIGHT_RECORD_FLIGHT_ID)
                    .table(EngineFlightRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ENGINE_FLIGHT_RECORD_ENGINE_ID)
                    .table(EngineFlightRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ENGINE_FLIGHT_RECORD_FLIGHT_ID)
                    .table(EngineFlightRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ENGINE_FLIGHT_RECORD_ENGINE_ID)
                    .table(EngineFlightRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EngineFlightRecord::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EngineFlightRecord {
    Table,
    Id,
    EngineId,
    AircraftFlightRecordId,
    SpeedN1,
    SpeedN2,
    EnginePr,
    InterstageTt,
    EngineFf,
    OilPress,
    OilTemp,
    OilAdded,
    EngineVib,
}
