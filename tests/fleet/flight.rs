use jetbench::{
    error::{fleet::FleetError, Error},
    service::{FlightLogService, RegistryService},
};
use rust_decimal::Decimal;

use super::{new_aircraft, new_engine, new_engine_reading, new_flight_leg, setup};

/// Expect an engine with recorded readings protected from deletion until the
/// flights carrying its history are deleted, after which it becomes deletable
#[tokio::test]
async fn test_engine_deletion_restricted_by_history() {
    let test = setup().await.unwrap();
    let registry = RegistryService::new(&test.db);
    let flight_log = FlightLogService::new(&test.db);

    let aircraft = registry
        .register_aircraft(new_aircraft("BB-1", "N100JB"))
        .await
        .unwrap();
    let engine = registry
        .register_engine(new_engine("PCE-1", Some(aircraft.id)))
        .await
        .unwrap();
    let record = flight_log
        .record_flight(new_flight_leg(aircraft.id))
        .await
        .unwrap();
    flight_log
        .record_engine_reading(new_engine_reading(engine.id, record.id))
        .await
        .unwrap();

    let restricted = registry.delete_engine(engine.id).await;
    assert!(matches!(
        restricted,
        Err(Error::FleetError(FleetError::ReferentialRestriction {
            entity: "engine",
            dependents: 1,
            ..
        }))
    ));

    flight_log.delete_flight(record.id).await.unwrap();

    let deleted = registry.delete_engine(engine.id).await;
    assert!(deleted.is_ok(), "Error: {:?}", deleted);
}

/// Expect deleting a flight leg to remove its readings while the engine's
/// history on other legs survives
#[tokio::test]
async fn test_delete_flight_removes_only_its_readings() {
    let test = setup().await.unwrap();
    let registry = RegistryService::new(&test.db);
    let flight_log = FlightLogService::new(&test.db);

    let aircraft = registry
        .register_aircraft(new_aircraft("BB-1", "N100JB"))
        .await
        .unwrap();
    let engine = registry
        .register_engine(new_engine("PCE-1", Some(aircraft.id)))
        .await
        .unwrap();

    let first = flight_log
        .record_flight(new_flight_leg(aircraft.id))
        .await
        .unwrap();
    let second = flight_log
        .record_flight(new_flight_leg(aircraft.id))
        .await
        .unwrap();
    flight_log
        .record_engine_reading(new_engine_reading(engine.id, first.id))
        .await
        .unwrap();
    let kept = flight_log
        .record_engine_reading(new_engine_reading(engine.id, second.id))
        .await
        .unwrap();

    flight_log.delete_flight(first.id).await.unwrap();

    let history = flight_log.engine_history(engine.id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].reading.id, kept.id);
}

/// Expect a reading rejected once the engine has been unmounted, then
/// accepted again after remounting
#[tokio::test]
async fn test_reading_follows_current_mount() {
    let test = setup().await.unwrap();
    let registry = RegistryService::new(&test.db);
    let flight_log = FlightLogService::new(&test.db);

    let aircraft = registry
        .register_aircraft(new_aircraft("BB-1", "N100JB"))
        .await
        .unwrap();
    let engine = registry
        .register_engine(new_engine("PCE-1", Some(aircraft.id)))
        .await
        .unwrap();
    let record = flight_log
        .record_flight(new_flight_leg(aircraft.id))
        .await
        .unwrap();

    registry.unmount_engine(engine.id).await.unwrap();

    let unmounted = flight_log
        .record_engine_reading(new_engine_reading(engine.id, record.id))
        .await;
    let Err(Error::FleetError(FleetError::Validation(failure))) = unmounted else {
        panic!("expected validation failure, got {:?}", unmounted);
    };
    assert!(failure.field("engineId").is_some());

    registry.mount_engine(engine.id, aircraft.id).await.unwrap();

    let remounted = flight_log
        .record_engine_reading(new_engine_reading(engine.id, record.id))
        .await;
    assert!(remounted.is_ok(), "Error: {:?}", remounted);
}

/// Expect the full leg validation to report hours, altitude, and mach
/// violations together with their documented messages
#[tokio::test]
async fn test_flight_validation_messages() {
    let test = setup().await.unwrap();
    let registry = RegistryService::new(&test.db);
    let flight_log = FlightLogService::new(&test.db);

    let aircraft = registry
        .register_aircraft(new_aircraft("BB-1", "N100JB"))
        .await
        .unwrap();

    let mut leg = new_flight_leg(aircraft.id);
    leg.flight_hours = Decimal::from(51);
    leg.mach_number = Some(Decimal::from(4));

    let result = flight_log.record_flight(leg).await;

    let Err(Error::FleetError(FleetError::Validation(failure))) = result else {
        panic!("expected validation failure, got {:?}", result);
    };
    assert_eq!(failure.violations.len(), 2);
    assert_eq!(
        failure.field("flightHours").unwrap().message,
        "Flight hours must be between 0 hours and 50 hours"
    );
    assert_eq!(
        failure.field("machNumber").unwrap().message,
        "Mach number must be between 0 and 3"
    );
}
