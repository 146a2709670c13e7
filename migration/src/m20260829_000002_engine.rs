use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260829_000001_aircraft::Aircraft;

static IDX_ENGINE_AIRCRAFT_ID: &str = "idx_engine_aircraft_id";
static FK_ENGINE_AIRCRAFT_ID: &str = "fk_engine_aircraft_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Engine::Table)
                    .if_not_exists()
                    .col(pk_auto(Engine::Id))
                    .col(integer_null(Engine::AircraftId))
                    .col(string_len(Engine::Manufacturer, 2))
                    .col(string_len(Engine::EngineType, 2))
                    .col(string_len(Engine::Model, 255))
                    .col(string_len_uniq(Engine::Serial, 255))
                    .col(decimal_len(Engine::TimeSinceNew, 7, 1))
                    .col(integer(Engine::CyclesSinceNew))
                    .col(decimal_len(Engine::TimeSinceOverhaul, 6, 1))
                    .col(integer(Engine::CyclesSinceOverhaul))
                    .col(decimal_len(Engine::TimeBetweenOverhauls, 5, 1))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ENGINE_AIRCRAFT_ID)
                    .table(Engine::Table)
                    .col(Engine::AircraftId)
                    .to_owned(),
            )
            .await?;

        // An engine outlives the airframe it is mounted on.
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ENGINE_AIRCRAFT_ID)
                    .from_tbl(Engine::Table)
                    .from_col(Engine::AircraftId)
                    .to_tbl(Aircraft::Table)
                    .to_col(Aircraft::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ENGINE_AIRCRAFT_ID)
                    .table(Engine::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ENGINE_AIRCRAFT_ID)
                    .table(Engine::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Engine::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Engine {
    Table,
    Id,
    AircraftId,
    Manufacturer,
    EngineType,
    Model,
    Serial,
    TimeSinceNew,
    CyclesSinceNew,
    TimeSinceOverhaul,
    CyclesSinceOverhaul,
    TimeBetweenOverhauls,
}
