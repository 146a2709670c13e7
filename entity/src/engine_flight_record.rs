use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Instrument readings for one engine on one flight leg.
///
/// Every reading is optional; a sensor that did not report is stored as null.
/// The engine relation restricts deletion so an engine with history cannot be
/// removed, while the flight-record relation cascades with its leg.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "engine_flight_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub engine_id: i32,
    pub aircraft_flight_record_id: i32,
    /// Low pressure compressor speed, % of rated.
    #[sea_orm(column_type = "Decimal(Some((4, 1)))", nullable)]
    pub speed_n1: Option<Decimal>,
    /// High pressure compressor speed, % of rated.
    #[sea_orm(column_type = "Decimal(Some((4, 1)))", nullable)]
    pub speed_n2: Option<Decimal>,
    /// Engine pressure ratio.
    #[sea_orm(column_type = "Decimal(Some((4, 1)))", nullable)]
    pub engine_pr: Option<Decimal>,
    /// Interstage turbine temperature, °C.
    #[sea_orm(column_type = "Decimal(Some((5, 1)))", nullable)]
    pub interstage_tt: Option<Decimal>,
    /// Fuel flow, kg/h.
    pub engine_ff: Option<i32>,
    /// Oil pressure, psi.
    pub oil_press: Option<i32>,
    /// Oil temperature, °C.
    pub oil_temp: Option<i32>,
    /// Oil added after the leg, quarts.
    pub oil_added: Option<i32>,
    /// Engine vibration, in/s.
    #[sea_orm(column_type = "Decimal(Some((3, 2)))", nullable)]
    pub engine_vib: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::engine::Entity",
        from = "Column::EngineId",
        to = "super::engine::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Engine,
    #[sea_orm(
        belongs_to = "super::aircraft_flight_record::Entity",
        from = "Column::AircraftFlightRecordId",
        to = "super::aircraft_flight_record::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AircraftFlightRecord,
}

impl Related<super::engine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Engine.def()
    }
}

impl Related<super::aircraft_flight_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AircraftFlightRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
