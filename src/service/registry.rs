use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    data::fleet::{AircraftRepository, EngineRepository},
    error::{fleet::FleetError, Error},
    model::{
        auth::Actor,
        fleet::{AircraftFilter, EngineFilter, NewAircraft, NewEngine},
    },
    validate::Validator,
};

/// Registry operations for the fleet: aircraft and engine lifecycle.
///
/// Uniqueness is checked before any write so callers get a
/// [`FleetError::ConstraintViolation`] instead of a raw database error; the
/// schema's unique indexes remain the backstop for concurrent writers.
pub struct RegistryService<'a> {
    db: &'a DatabaseConnection,
    actor: Option<Actor>,
}

impl<'a> RegistryService<'a> {
    /// Creates a new instance of [`RegistryService`]
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

    /// Register an aircraft.
    ///
    /// Model, serial, and registration are stored upper-cased so lookups and
    /// the uniqueness check are case-insensitive in practice. Fails with
    /// [`FleetError::ConstraintViolation`] when the (serial, registration)
    /// pair is already registered.
    pub async fn register_aircraft(
        &self,
        new_aircraft: NewAircraft,
    ) -> Result<entity::aircraft::Model, Error> {
        let aircraft_repository = AircraftRepository::new(self.db);

        let new_aircraft = NewAircraft {
            model: new_aircraft.model.to_uppercase(),
            serial: new_aircraft.serial.to_uppercase(),
            registration: new_aircraft.registration.to_uppercase(),
            ..new_aircraft
        };

        let existing = aircraft_repository
            .get_by_serial_and_registration(&new_aircraft.serial, &new_aircraft.registration)
            .await?;

        if existing.is_some() {
            return Err(FleetError::ConstraintViolation {
                entity: "aircraft",
                detail: format!(
                    "serial {} with registration {}",
                    new_aircraft.serial, new_aircraft.registration
                ),
            }
            .into());
        }

        let aircraft = aircraft_repository.create(new_aircraft).await?;

        tracing::info!(
            actor = self.actor_id(),
            aircraft_id = aircraft.id,
            registration = %aircraft.registration,
            "registered aircraft"
        );

        Ok(aircraft)
    }

    /// Register an engine.
    ///
    /// Initial counters are accepted as-is (an engine may join the fleet
    /// mid-life) but every counter must sit in its declared range, time since
    /// overhaul cannot exceed time since new, and likewise for cycles. Fails
    /// with [`FleetError::ConstraintViolation`] on a duplicate serial.
    pub async fn register_engine(
        &self,
        new_engine: NewEngine,
    ) -> Result<entity::engine::Model, Error> {
        let engine_repository = EngineRepository::new(self.db);
        let aircraft_repository = AircraftRepository::new(self.db);

        let mut validator = Validator::new();
        validator.range(
            "timeSinceNew",
            "TSN",
            new_engine.time_since_new,
            Decimal::ZERO,
            Decimal::new(9_999_999, 1),
            "hours",
        );
        validator.range(
            "cyclesSinceNew",
            "CSN",
            new_engine.cycles_since_new,
            0,
            1_000_000,
            "cycles",
        );
        validator.range(
            "timeSinceOverhaul",
            "TSO",
            new_engine.time_since_overhaul,
            Decimal::ZERO,
            Decimal::new(999_999, 1),
            "hours",
        );
        validator.range(
            "cyclesSinceOverhaul",
            "CSO",
            new_engine.cycles_since_overhaul,
            0,
            100_000,
            "cycles",
        );
        validator.range(
            "timeBetweenOverhauls",
            "TBO",
            new_engine.time_between_overhauls,
            Decimal::ZERO,
            Decimal::new(99_999, 1),
            "hours",
        );
        if new_engine.time_since_overhaul > new_engine.time_since_new {
            validator.violation("timeSinceOverhaul", "TSO cannot exceed TSN");
        }
        if new_engine.cycles_since_overhaul > new_engine.cycles_since_new {
            validator.violation("cyclesSinceOverhaul", "CSO cannot exceed CSN");
        }
        validator.finish()?;

        let new_engine = NewEngine {
            model: new_engine.model.to_uppercase(),
            serial: new_engine.serial.to_uppercase(),
            ..new_engine
        };

        if engine_repository
            .get_by_serial(&new_engine.serial)
            .await?
            .is_some()
        {
            return Err(FleetError::ConstraintViolation {
                entity: "engine",
                detail: format!("serial {}", new_engine.serial),
            }
            .into());
        }

        if let Some(aircraft_id) = new_engine.aircraft_id {
            if aircraft_repository.get(aircraft_id).await?.is_none() {
                return Err(FleetError::NotFound {
                    entity: "aircraft",
                    id: aircraft_id,
                }
                .into());
            }
        }

        let engine = engine_repository.create(new_engine).await?;

        tracing::info!(
            actor = self.actor_id(),
            engine_id = engine.id,
            serial = %engine.serial,
            "registered engine"
        );

        Ok(engine)
    }

    /// Mount an engine onto an aircraft.
    ///
    /// Concurrent mounts of the same engine are last-writer-wins at the row
    /// level; there is no version stamp on the mount.
    pub async fn mount_engine(
        &self,
        engine_id: i32,
        aircraft_id: i32,
    ) -> Result<entity::engine::Model, Error> {
        let engine_repository = EngineRepository::new(self.db);
        let aircraft_repository = AircraftRepository::new(self.db);

        let engine = engine_repository.get(engine_id).await?.ok_or(
            FleetError::NotFound {
                entity: "engine",
                id: engine_id,
            },
        )?;

        if aircraft_repository.get(aircraft_id).await?.is_none() {
            return Err(FleetError::NotFound {
                entity: "aircraft",
                id: aircraft_id,
            }
            .into());
        }

        let engine = engine_repository
            .set_aircraft(engine, Some(aircraft_id))
            .await?;

        tracing::info!(
            actor = self.actor_id(),
            engine_id,
            aircraft_id,
            "mounted engine"
        );

        Ok(engine)
    }

    /// Remove an engine from its airframe, leaving it in storage.
    ///
    /// The engine's cumulative counters are untouched; they belong to the
    /// engine, not the airframe.
    pub async fn unmount_engine(&self, engine_id: i32) -> Result<entity::engine::Model, Error> {
        let engine_repository = EngineRepository::new(self.db);

        let engine = engine_repository.get(engine_id).await?.ok_or(
            FleetError::NotFound {
                entity: "engine",
                id: engine_id,
            },
        )?;

        let engine = engine_repository.set_aircraft(engine, None).await?;

        tracing::info!(actor = self.actor_id(), engine_id, "unmounted engine");

        Ok(engine)
    }

    /// Delete an aircraft, cascading its flight records.
    ///
    /// Mounted engines are set adrift rather than deleted so their own
    /// flight history and counters survive the airframe.
    pub async fn delete_aircraft(&self, aircraft_id: i32) -> Result<(), Error> {
        let aircraft_repository = AircraftRepository::new(self.db);

        if aircraft_repository.get(aircraft_id).await?.is_none() {
            return Err(FleetError::NotFound {
                entity: "aircraft",
                id: aircraft_id,
            }
            .into());
        }

        aircraft_repository.delete(aircraft_id).await?;

        tracing::info!(actor = self.actor_id(), aircraft_id, "deleted aircraft");

        Ok(())
    }

    /// Delete an engine.
    ///
    /// Fails with [`FleetError::ReferentialRestriction`] while any flight
    /// reading references the engine; the audit trail cannot be shortcut.
    /// Once the readings are gone, e.g. via their flight legs being deleted,
    /// the engine becomes deletable.
    pub async fn delete_engine(&self, engine_id: i32) -> Result<(), Error> {
        let engine_repository = EngineRepository::new(self.db);

        if engine_repository.get(engine_id).await?.is_none() {
            return Err(FleetError::NotFound {
                entity: "engine",
                id: engine_id,
            }
            .into());
        }

        let dependents = engine_repository.count_flight_records(engine_id).await?;

        if dependents > 0 {
            return Err(FleetError::ReferentialRestriction {
                entity: "engine",
                id: engine_id,
                dependents,
            }
            .into());
        }

        engine_repository.delete(engine_id).await?;

        tracing::info!(actor = self.actor_id(), engine_id, "deleted engine");

        Ok(())
    }

    /// Get an aircraft by ID
    pub async fn get_aircraft(&self, aircraft_id: i32) -> Result<entity::aircraft::Model, Error> {
        AircraftRepository::new(self.db)
            .get(aircraft_id)
            .await?
            .ok_or(
                FleetError::NotFound {
                    entity: "aircraft",
                    id: aircraft_id,
                }
                .into(),
            )
    }

    /// List aircraft matching the filter
    pub async fn list_aircraft(
        &self,
        filter: &AircraftFilter,
    ) -> Result<Vec<entity::aircraft::Model>, Error> {
        Ok(AircraftRepository::new(self.db).list(filter).await?)
    }

    /// Get an engine by ID
    pub async fn get_engine(&self, engine_id: i32) -> Result<entity::engine::Model, Error> {
        EngineRepository::new(self.db).get(engine_id).await?.ok_or(
            FleetError::NotFound {
                entity: "engine",
                id: engine_id,
            }
            .into(),
        )
    }

    /// List engines matching the filter
    pub async fn list_engines(
        &self,
        filter: &EngineFilter,
    ) -> Result<Vec<entity::engine::Model>, Error> {
        Ok(EngineRepository::new(self.db).list(filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use entity::{
        aircraft::{AircraftManufacturer, AircraftType},
        engine::{EngineManufacturer, EngineType},
    };
    use jetbench_test_utils::prelude::*;
    use rust_decimal::Decimal;

    use crate::model::fleet::{NewAircraft, NewEngine};

    pub async fn setup() -> Result<TestSetup, TestError> {
        test_setup_with_fleet_tables!()
    }

    pub fn new_aircraft(serial: &str, registration: &str) -> NewAircraft {
        NewAircraft {
            manufacturer: AircraftManufacturer::Textron,
            aircraft_type: AircraftType::TwinTurboprop,
            model: "King Air 350".to_string(),
            serial: serial.to_string(),
            registration: registration.to_string(),
        }
    }

    pub fn new_engine(serial: &str, aircraft_id: Option<i32>) -> NewEngine {
        NewEngine {
            aircraft_id,
            manufacturer: EngineManufacturer::PrattWhitney,
            engine_type: EngineType::Turboprop,
            model: "PT6A-60A".to_string(),
            serial: serial.to_string(),
            time_since_new: Decimal::new(12345, 1),
            cycles_since_new: 980,
            time_since_overhaul: Decimal::new(2105, 1),
            cycles_since_overhaul: 160,
            time_between_overhauls: Decimal::new(35000, 1),
        }
    }

    mod register_aircraft_tests {
        use crate::{
            error::{fleet::FleetError, Error},
            service::registry::{
                tests::{new_aircraft, setup},
                RegistryService,
            },
        };

        /// Expect model, serial, and registration stored upper-cased
        #[tokio::test]
        async fn test_register_aircraft_normalizes() {
            let test = setup().await.unwrap();
            let registry = RegistryService::new(&test.db);

            let aircraft = registry
                .register_aircraft(new_aircraft("bb-1234", "n123jb"))
                .await
                .unwrap();

            assert_eq!(aircraft.model, "KING AIR 350");
            assert_eq!(aircraft.serial, "BB-1234");
            assert_eq!(aircraft.registration, "N123JB");
        }

        /// Expect ConstraintViolation for a duplicate pair, even when the
        /// caller varies the casing
        #[tokio::test]
        async fn test_register_aircraft_duplicate_pair() {
            let test = setup().await.unwrap();
            let registry = RegistryService::new(&test.db);

            registry
                .register_aircraft(new_aircraft("BB-1234", "N123JB"))
                .await
                .unwrap();

            let result = registry
                .register_aircraft(new_aircraft("bb-1234", "n123jb"))
                .await;

            assert!(matches!(
                result,
                Err(Error::FleetError(FleetError::ConstraintViolation { .. }))
            ));
        }
    }

    mod register_engine_tests {
        use rust_decimal::Decimal;

        use crate::{
            error::{fleet::FleetError, Error},
            service::registry::{
                tests::{new_engine, setup},
                RegistryService,
            },
        };

        /// Expect TSO above TSN rejected as a validation violation
        #[tokio::test]
        async fn test_register_engine_tso_exceeds_tsn() {
            let test = setup().await.unwrap();
            let registry = RegistryService::new(&test.db);

            let mut engine = new_engine("PCE-1", None);
            engine.time_since_overhaul = engine.time_since_new + Decimal::ONE;

            let result = registry.register_engine(engine).await;

            let Err(Error::FleetError(FleetError::Validation(failure))) = result else {
                panic!("expected validation failure, got {:?}", result);
            };
            assert!(failure.field("timeSinceOverhaul").is_some());
        }

        /// Expect NotFound when registering against a nonexistent aircraft
        #[tokio::test]
        async fn test_register_engine_unknown_aircraft() {
            let test = setup().await.unwrap();
            let registry = RegistryService::new(&test.db);

            let result = registry.register_engine(new_engine("PCE-1", Some(42))).await;

            assert!(matches!(
                result,
                Err(Error::FleetError(FleetError::NotFound {
                    entity: "aircraft",
                    id: 42
                }))
            ));
        }

        /// Expect ConstraintViolation on a duplicate serial regardless of mount
        #[tokio::test]
        async fn test_register_engine_duplicate_serial() {
            let test = setup().await.unwrap();
            let registry = RegistryService::new(&test.db);

            registry.register_engine(new_engine("PCE-1", None)).await.unwrap();

            let result = registry.register_engine(new_engine("PCE-1", None)).await;

            assert!(matches!(
                result,
                Err(Error::FleetError(FleetError::ConstraintViolation { .. }))
            ));
        }
    }

    mod mount_engine_tests {
        use crate::{
            error::{fleet::FleetError, Error},
            service::registry::{
                tests::{new_aircraft, new_engine, setup},
                RegistryService,
            },
        };

        /// Expect NotFound when mounting onto a nonexistent aircraft
        #[tokio::test]
        async fn test_mount_engine_unknown_aircraft() {
            let test = setup().await.unwrap();
            let registry = RegistryService::new(&test.db);

            let engine = registry.register_engine(new_engine("PCE-1", None)).await.unwrap();

            let result = registry.mount_engine(engine.id, 42).await;

            assert!(matches!(
                result,
                Err(Error::FleetError(FleetError::NotFound {
                    entity: "aircraft",
                    ..
                }))
            ));
        }

        /// Expect remounting to another airframe to keep the engine's counters
        #[tokio::test]
        async fn test_remount_keeps_counters() {
            let test = setup().await.unwrap();
            let registry = RegistryService::new(&test.db);

            let first = registry
                .register_aircraft(new_aircraft("BB-1", "N100JB"))
                .await
                .unwrap();
            let second = registry
                .register_aircraft(new_aircraft("BB-2", "N200JB"))
                .await
                .unwrap();
            let engine = registry
                .register_engine(new_engine("PCE-1", Some(first.id)))
                .await
                .unwrap();

            let remounted = registry.mount_engine(engine.id, second.id).await.unwrap();

            assert_eq!(remounted.aircraft_id, Some(second.id));
            assert_eq!(remounted.time_since_new, engine.time_since_new);
            assert_eq!(remounted.cycles_since_overhaul, engine.cycles_since_overhaul);
        }
    }
}
