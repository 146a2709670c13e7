use sea_orm_migration::{prelude::*, schema::*};

static IDX_AIRCRAFT_SERIAL_REGISTRATION: &str = "idx_aircraft_serial_registration";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Aircraft::Table)
                    .if_not_exists()
                    .col(pk_auto(Aircraft::Id))
                    .col(string_len(Aircraft::Manufacturer, 2))
                    .col(string_len(Aircraft::AircraftType, 2))
                    .col(string_len(Aircraft::Model, 255))
                    .col(string_len(Aircraft::Serial, 255))
                    .col(string_len(Aircraft::Registration, 50))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AIRCRAFT_SERIAL_REGISTRATION)
                    .table(Aircraft::Table)
                    .col(Aircraft::Serial)
                    .col(Aircraft::Registration)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AIRCRAFT_SERIAL_REGISTRATION)
                    .table(Aircraft::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Aircraft::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Aircraft {
    Table,
    Id,
    Manufacturer,
    AircraftType,
    Model,
    Serial,
    Registration,
}
