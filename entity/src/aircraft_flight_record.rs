use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One logged flight leg for an aircraft.
///
/// Deleting the owning aircraft deletes its flight records; deleting a flight
/// record deletes the per-engine readings taken on that leg.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "aircraft_flight_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub aircraft_id: i32,
    pub flight_date: Date,
    /// Leg duration, hours.
    #[sea_orm(column_type = "Decimal(Some((3, 1)))")]
    pub flight_hours: Decimal,
    /// Cruise pressure altitude, feet.
    pub press_altitude: i32,
    /// Cruise outside air temperature, °C.
    #[sea_orm(column_type = "Decimal(Some((4, 1)))")]
    pub outside_air_temp: Decimal,
    /// Cruise indicated airspeed, knots.
    pub indicated_air_speed: Option<i32>,
    /// Cruise Mach number.
    #[sea_orm(column_type = "Decimal(Some((2, 1)))", nullable)]
    pub mach_number: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::aircraft::Entity",
        from = "Column::AircraftId",
        to = "super::aircraft::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Aircraft,
    #[sea_orm(has_many = "super::engine_flight_record::Entity")]
    EngineFlightRecord,
}

impl Related<super::aircraft::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aircraft.def()
    }
}

impl Related<super::engine_flight_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EngineFlightRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
