use jetbench::{
    error::{fleet::FleetError, Error},
    service::RegistryService,
};

use super::{new_aircraft, new_engine, setup};

/// Expect the second registration with the same (serial, registration) pair
/// rejected, while changing either field alone succeeds
#[tokio::test]
async fn test_aircraft_uniqueness_is_pairwise() {
    let test = setup().await.unwrap();
    let registry = RegistryService::new(&test.db);

    registry
        .register_aircraft(new_aircraft("BB-1234", "N123JB"))
        .await
        .unwrap();

    let duplicate = registry
        .register_aircraft(new_aircraft("BB-1234", "N123JB"))
        .await;
    assert!(matches!(
        duplicate,
        Err(Error::FleetError(FleetError::ConstraintViolation { .. }))
    ));

    let same_serial = registry
        .register_aircraft(new_aircraft("BB-1234", "N456XY"))
        .await;
    assert!(same_serial.is_ok(), "Error: {:?}", same_serial);

    let same_registration = registry
        .register_aircraft(new_aircraft("BB-9999", "N123JB"))
        .await;
    assert!(same_registration.is_ok(), "Error: {:?}", same_registration);
}

/// Expect a duplicate engine serial rejected even across different airframes
#[tokio::test]
async fn test_engine_serial_unique_fleet_wide() {
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

    registry
        .register_engine(new_engine("PCE-1", Some(first.id)))
        .await
        .unwrap();

    let result = registry
        .register_engine(new_engine("PCE-1", Some(second.id)))
        .await;

    assert!(matches!(
        result,
        Err(Error::FleetError(FleetError::ConstraintViolation {
            entity: "engine",
            ..
        }))
    ));
}

/// Expect deleting an aircraft to remove its flight records but leave its
/// engines in storage with their counters intact
#[tokio::test]
async fn test_delete_aircraft_leaves_engines_in_storage() {
    let test = setup().await.unwrap();
    let registry = RegistryService::new(&test.db);

    let aircraft = registry
        .register_aircraft(new_aircraft("BB-1", "N100JB"))
        .await
        .unwrap();
    let engine = registry
        .register_engine(new_engine("PCE-1", Some(aircraft.id)))
        .await
        .unwrap();

    registry.delete_aircraft(aircraft.id).await.unwrap();

    let surviving = registry.get_engine(engine.id).await.unwrap();
    assert_eq!(surviving.aircraft_id, None);
    assert_eq!(surviving.time_since_new, engine.time_since_new);
    assert_eq!(surviving.cycles_since_new, engine.cycles_since_new);

    let aircraft_gone = registry.get_aircraft(aircraft.id).await;
    assert!(matches!(
        aircraft_gone,
        Err(Error::FleetError(FleetError::NotFound {
            entity: "aircraft",
            ..
        }))
    ));
}
