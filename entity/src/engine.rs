use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Engine manufacturer, stored as a stable two-letter code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum EngineManufacturer {
    #[sea_orm(string_value = "HW")]
    Honeywell,
    #[sea_orm(string_value = "RR")]
    RollsRoyce,
    #[sea_orm(string_value = "GE")]
    GeneralElectric,
    #[sea_orm(string_value = "PW")]
    PrattWhitney,
    #[sea_orm(string_value = "WL")]
    Williams,
    #[sea_orm(string_value = "OT")]
    Other,
}

impl EngineManufacturer {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Honeywell => "Honeywell",
            Self::RollsRoyce => "Rolls-Royce",
            Self::GeneralElectric => "General Electric",
            Self::PrattWhitney => "Pratt & Whitney",
            Self::Williams => "Williams",
            Self::Other => "Other",
        }
    }
}

/// Engine class, stored as a stable two-letter code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum EngineType {
    #[sea_orm(string_value = "TJ")]
    Turbojet,
    #[sea_orm(string_value = "TF")]
    Turbofan,
    #[sea_orm(string_value = "TP")]
    Turboprop,
    #[sea_orm(string_value = "TS")]
    Turboshaft,
    #[sea_orm(string_value = "OT")]
    Other,
}

impl EngineType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Turbojet => "Turbojet",
            Self::Turbofan => "Turbofan",
            Self::Turboprop => "Turboprop",
            Self::Turboshaft => "Turboshaft",
            Self::Other => "Other",
        }
    }
}

/// A registered engine.
///
/// `aircraft_id` is the current mount; it is null while the engine sits in
/// storage. The life counters (TSN/CSN/TSO/CSO) belong to the engine itself
/// and survive any reassignment between airframes.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "engine")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub aircraft_id: Option<i32>,
    pub manufacturer: EngineManufacturer,
    pub engine_type: EngineType,
    pub model: String,
    #[sea_orm(unique)]
    pub serial: String,
    /// Time since new, hours.
    #[sea_orm(column_type = "Decimal(Some((7, 1)))")]
    pub time_since_new: Decimal,
    /// Cycles since new.
    pub cycles_since_new: i32,
    /// Time since last overhaul, hours.
    #[sea_orm(column_type = "Decimal(Some((6, 1)))")]
    pub time_since_overhaul: Decimal,
    /// Cycles since last overhaul.
    pub cycles_since_overhaul: i32,
    /// Manufacturer overhaul interval, hours.
    #[sea_orm(column_type = "Decimal(Some((5, 1)))")]
    pub time_between_overhauls: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::aircraft::Entity",
        from = "Column::AircraftId",
        to = "super::aircraft::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
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
