use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    data::fleet::{
        AircraftRepository, EngineRecordRepository, EngineRepository, FlightRecordRepository,
    },
    error::{fleet::FleetError, Error},
    model::{
        auth::Actor,
        fleet::{EngineHistoryEntry, NewEngineReading, NewFlightLeg},
    },
    validate::{FieldViolation, ValidationFailure, Validator},
};

/// Flight log operations: recording legs, per-engine readings, and history.
pub struct FlightLogService<'a> {
    db: &'a DatabaseConnection,
    actor: Option<Actor>,
}

impl<'a> FlightLogService<'a> {
    /// Creates a new instance of [`FlightLogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db, actor: None }
    }

    /// Attaches the acting identity for audit logging
    pub fn acting_as(mut self, actor: Actor) -> Self {
        self.actor = Some(actor);
        self
    }

    fn actor_id(&self) -> &str {
        self.actor
            .as_ref()
            .map(|actor| actor.id.as_str())
            .unwrap_or("anonymous")
    }

    /// Record a flight leg against an aircraft.
    ///
    /// Every field is range-checked in one pass so the caller receives all
    /// violations together. Fails with [`FleetError::NotFound`] when the
    /// aircraft does not exist.
    pub async fn record_flight(
        &self,
        leg: NewFlightLeg,
    ) -> Result<entity::aircraft_flight_record::Model, Error> {
        let mut validator = Validator::new();
        validator.range(
            "flightHours",
            "Flight hours",
            leg.flight_hours,
            Decimal::ZERO,
            Decimal::from(50),
            "hours",
        );
        validator.range(
            "pressAltitude",
            "Pressure altitude",
            leg.press_altitude,
            0,
            70_000,
            "ft",
        );
        validator.range(
            "outsideAirTemp",
            "OAT",
            leg.outside_air_temp,
            Decimal::from(-100),
            Decimal::from(100),
            "°C",
        );
        validator.optional_range(
            "indicatedAirSpeed",
            "IAS",
            leg.indicated_air_speed,
            0,
            1_000,
            "kt",
        );
        validator.optional_range(
            "machNumber",
            "Mach number",
            leg.mach_number,
            Decimal::ZERO,
            Decimal::from(3),
            "",
        );
        validator.finish()?;

        let aircraft_repository = AircraftRepository::new(self.db);
        if aircraft_repository.get(leg.aircraft_id).await?.is_none() {
            return Err(FleetError::NotFound {
                entity: "aircraft",
                id: leg.aircraft_id,
            }
            .into());
        }

        let record = FlightRecordRepository::new(self.db).create(leg).await?;

        tracing::info!(
            actor = self.actor_id(),
            record_id = record.id,
            aircraft_id = record.aircraft_id,
            flight_date = %record.flight_date,
            "recorded flight leg"
        );

        Ok(record)
    }

    /// Record one engine's instrument readings for a recorded flight leg.
    ///
    /// The engine must be mounted on the aircraft the leg belongs to at
    /// submission time; a reading against an unmounted engine or an engine on
    /// another airframe is reported as a violation on `engineId`.
    pub async fn record_engine_reading(
        &self,
        reading: NewEngineReading,
    ) -> Result<entity::engine_flight_record::Model, Error> {
        let mut validator = Validator::new();
        validator.optional_range(
            "speedN1",
            "N1",
            reading.speed_n1,
            Decimal::ZERO,
            Decimal::from(110),
            "%",
        );
        validator.optional_range(
            "speedN2",
            "N2",
            reading.speed_n2,
            Decimal::ZERO,
            Decimal::from(110),
            "%",
        );
        validator.optional_range(
            "enginePR",
            "EPR",
            reading.engine_pr,
            Decimal::ZERO,
            Decimal::from(100),
            "",
        );
        validator.optional_range(
            "interstageTT",
            "ITT",
            reading.interstage_tt,
            Decimal::ZERO,
            Decimal::from(10_000),
            "°C",
        );
        validator.optional_range("engineFF", "FF", reading.engine_ff, 0, 50_000, "kg/h");
        validator.optional_range("oilPress", "Oil Pressure", reading.oil_press, 0, 1_000, "psi");
        validator.optional_range("oilTemp", "Oil Temperature", reading.oil_temp, 0, 500, "°C");
        validator.optional_range("oilAdded", "Oil added", reading.oil_added, 0, 50, "quarts");
        validator.optional_range(
            "engineVib",
            "Engine vibration",
            reading.engine_vib,
            Decimal::ZERO,
            Decimal::from(10),
            "in/s",
        );
        validator.finish()?;

        let engine_repository = EngineRepository::new(self.db);
        let flight_record_repository = FlightRecordRepository::new(self.db);

        let engine = engine_repository.get(reading.engine_id).await?.ok_or(
            FleetError::NotFound {
                entity: "engine",
                id: reading.engine_id,
            },
        )?;

        let flight = flight_record_repository
            .get(reading.aircraft_flight_record_id)
            .await?
            .ok_or(FleetError::NotFound {
                entity: "flight record",
                id: reading.aircraft_flight_record_id,
            })?;

        if engine.aircraft_id != Some(flight.aircraft_id) {
            return Err(ValidationFailure {
                violations: vec![FieldViolation {
                    field: "engineId",
                    message: format!(
                        "engine {} is not mounted on aircraft {}",
                        engine.id, flight.aircraft_id
                    ),
                }],
            }
            .into());
        }

        let record = EngineRecordRepository::new(self.db).create(reading).await?;

        // TODO: accrue flight_hours and one cycle onto the engine's TSN/CSN
        // and TSO/CSO counters once the accrual policy is settled.

        tracing::info!(
            actor = self.actor_id(),
            record_id = record.id,
            engine_id = record.engine_id,
            flight_record_id = record.aircraft_flight_record_id,
            "recorded engine reading"
        );

        Ok(record)
    }

    /// Delete a flight leg together with its engine readings.
    pub async fn delete_flight(&self, record_id: i32) -> Result<(), Error> {
        let flight_record_repository = FlightRecordRepository::new(self.db);

        if flight_record_repository.get(record_id).await?.is_none() {
            return Err(FleetError::NotFound {
                entity: "flight record",
                id: record_id,
            }
            .into());
        }

        flight_record_repository.delete(record_id).await?;

        tracing::info!(actor = self.actor_id(), record_id, "deleted flight record");

        Ok(())
    }

    /// Get a flight leg by ID
    pub async fn get_flight(
        &self,
        record_id: i32,
    ) -> Result<entity::aircraft_flight_record::Model, Error> {
        FlightRecordRepository::new(self.db)
            .get(record_id)
            .await?
            .ok_or(
                FleetError::NotFound {
                    entity: "flight record",
                    id: record_id,
                }
                .into(),
            )
    }

    /// List an aircraft's flight legs, newest first
    pub async fn aircraft_history(
        &self,
        aircraft_id: i32,
    ) -> Result<Vec<entity::aircraft_flight_record::Model>, Error> {
        let aircraft_repository = AircraftRepository::new(self.db);

        if aircraft_repository.get(aircraft_id).await?.is_none() {
            return Err(FleetError::NotFound {
                entity: "aircraft",
                id: aircraft_id,
            }
            .into());
        }

        Ok(FlightRecordRepository::new(self.db)
            .list_by_aircraft(aircraft_id)
            .await?)
    }

    /// List the readings taken on one flight leg
    pub async fn flight_readings(
        &self,
        record_id: i32,
    ) -> Result<Vec<entity::engine_flight_record::Model>, Error> {
        let flight_record_repository = FlightRecordRepository::new(self.db);

        if flight_record_repository.get(record_id).await?.is_none() {
            return Err(FleetError::NotFound {
                entity: "flight record",
                id: record_id,
            }
            .into());
        }

        Ok(EngineRecordRepository::new(self.db)
            .list_by_flight_record(record_id)
            .await?)
    }

    /// An engine's full flight history across every airframe, newest first.
    pub async fn engine_history(&self, engine_id: i32) -> Result<Vec<EngineHistoryEntry>, Error> {
        let engine_repository = EngineRepository::new(self.db);

        if engine_repository.get(engine_id).await?.is_none() {
            return Err(FleetError::NotFound {
                entity: "engine",
                id: engine_id,
            }
            .into());
        }

        let history = EngineRecordRepository::new(self.db)
            .list_by_engine_with_flights(engine_id)
            .await?;

        Ok(history
            .into_iter()
            .filter_map(|(reading, flight)| {
                flight.map(|flight| EngineHistoryEntry { reading, flight })
            })
            .collect())
    }
}
