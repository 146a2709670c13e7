use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260829_000001_aircraft::Aircraft;

static IDX_AIRCRAFT_FLIGHT_RECORD_AIRCRAFT_ID: &str = "idx_aircraft_flight_record_aircraft_id";
static FK_AIRCRAFT_FLIGHT_RECORD_AIRCRAFT_ID: &str = "fk_aircraft_flight_record_aircraft_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AircraftFlightRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(AircraftFlightRecord::Id))
                    .col(integer(AircraftFlightRecord::AircraftId))
                    .col(date(AircraftFlightRecord::FlightDate))
                    .col(decimal_len(AircraftFlightRecord::FlightHours, 3, 1))
                    .col(integer(AircraftFlightRecord::PressAltitude))
                    .col(decimal_len(AircraftFlightRecord::OutsideAirTemp, 4, 1))
                    .col(integer_null(AircraftFlightRecord::IndicatedAirSpeed))
                    .col(decimal_len_null(AircraftFlightRecord::MachNumber, 2, 1))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AIRCRAFT_FLIGHT_RECORD_AIRCRAFT_ID)
                    .table(AircraftFlightRecord::Table)
                    .col(AircraftFlightRecord::AircraftId)
                    .to_owned(),
            )
            .await?;

        // Flight legs are owned by the airframe and go with it.
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AIRCRAFT_FLIGHT_RECORD_AIRCRAFT_ID)
                    .from_tbl(AircraftFlightRecord::Table)
                    .from_col(AircraftFlightRecord::AircraftId)
                    .to_tbl(Aircraft::Table)
                    .to_col(Aircraft::Id)
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
                    .name(FK_AIRCRAFT_FLIGHT_RECORD_AIRCRAFT_ID)
                    .table(AircraftFlightRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AIRCRAFT_FLIGHT_RECORD_AIRCRAFT_ID)
                    .table(AircraftFlightRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(AircraftFlightRecord::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AircraftFlightRecord {
    Table,
    Id,
    AircraftId,
    FlightDate,
    FlightHours,
    PressAltitude,
    OutsideAirTemp,
    IndicatedAirSpeed,
    MachNumber,
}
