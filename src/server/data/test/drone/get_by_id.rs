use super::*;
use serde_json::json;

/// Tests fetching an existing drone.
///
/// Expected: Ok(Some(drone))
#[tokio::test]
async fn returns_existing_drone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Drone)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::drone::DroneFactory::new(db)
        .name("Scout")
        .possible_missions_ids(vec![2, 4])
        .build()
        .await?;

    let result = DroneRepository::new(db).get_by_id(drone.id).await?;

    let found = result.expect("drone should exist");
    assert_eq!(found.name, "Scout");
    assert_eq!(found.possible_missions_ids, vec![2, 4]);

    Ok(())
}

/// Tests fetching a drone that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_drone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Drone)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = DroneRepository::new(db).get_by_id(404).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that a string mission reference stored by another writer is returned as-is.
///
/// Expected: Ok(Some(drone)) with a label reference
#[tokio::test]
async fn returns_string_mission_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Drone)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::drone::DroneFactory::new(db)
        .current_mission_id(Some(json!("survey-north")))
        .build()
        .await?;

    let found = DroneRepository::new(db).get_by_id(drone.id).await?.unwrap();

    assert_eq!(
        found.current_mission_id,
        Some(MissionReference::Label("survey-north".to_string()))
    );

    Ok(())
}
