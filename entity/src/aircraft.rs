use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Airframe manufacturer, stored as a stable two-letter code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum AircraftManufacturer {
    #[sea_orm(string_value = "CS")]
    Cessna,
    #[sea_orm(string_value = "PA")]
    Piper,
    #[sea_orm(string_value = "BC")]
    Beechcraft,
    #[sea_orm(string_value = "BD")]
    Bombardier,
    #[sea_orm(string_value = "DH")]
    Daher,
    #[sea_orm(string_value = "DS")]
    Dassault,
    #[sea_orm(string_value = "EB")]
    Embraer,
    #[sea_orm(string_value = "GS")]
    Gulfstream,
    #[sea_orm(string_value = "PL")]
    Pilatus,
    #[sea_orm(string_value = "TX")]
    Textron,
    #[sea_orm(string_value = "OT")]
    Other,
}

impl AircraftManufacturer {
    /// Human-readable name, kept separate from the stored code.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cessna => "Cessna Aircraft",
            Self::Piper => "Piper Aircraft",
            Self::Beechcraft => "Beechcraft Aircraft",
            Self::Bombardier => "Bombardier",
            Self::Daher => "Daher",
            Self::Dassault => "Dassault Aviation",
            Self::Embraer => "Embraer",
            Self::Gulfstream => "Gulfstream Aerospace",
            Self::Pilatus => "Pilatus Aircraft",
            Self::Textron => "Textron Aviation",
            Self::Other => "Other",
        }
    }
}

/// Airframe class, stored as a stable two-letter code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum AircraftType {
    #[sea_orm(string_value = "ST")]
    SingleTurboprop,
    #[sea_orm(string_value = "TT")]
    TwinTurboprop,
    #[sea_orm(string_value = "SJ")]
    SingleJet,
    #[sea_orm(string_value = "TJ")]
    TwinJet,
    #[sea_orm(string_value = "JJ")]
    TriJet,
    #[sea_orm(string_value = "OT")]
    Other,
}

impl AircraftType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SingleTurboprop => "Single Engine Turboprop",
            Self::TwinTurboprop => "Twin Engine Turboprop",
            Self::SingleJet => "Single Engine Jet",
            Self::TwinJet => "Twin Engine Jet",
            Self::TriJet => "Three Engine Jet",
            Self::Other => "Other",
        }
    }
}

/// A registered airframe.
///
/// The (serial, registration) pair is unique across the fleet; the index is
/// declared in the corresponding migration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "aircraft")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub manufacturer: AircraftManufacturer,
    pub aircraft_type: AircraftType,
    pub model: String,
    pub serial: String,
    pub registration: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::aircraft_flight_record::Entity")]
    AircraftFlightRecord,
    #[sea_orm(has_many = "super::engine::Entity")]
    Engine,
}

impl Related<super::aircraft_flight_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AircraftFlightRecord.def()
    }
}

impl Related<super::engine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Engine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
