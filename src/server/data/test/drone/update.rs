use super::*;

/// Tests updating a drone's status.
///
/// Verifies that only the status changes and every other field keeps its value.
///
/// Expected: Ok(Some(drone)) equal to the original apart from status
#[tokio::test]
async fn updates_only_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Drone)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::drone::DroneFactory::new(db)
        .status("idle")
        .current_mission_id(Some(serde_json::json!(8)))
        .possible_missions_ids(vec![8, 9])
        .build()
        .await?;

    let repo = DroneRepository::new(db);
    let before = repo.get_by_id(drone.id).await?.unwrap();
    let updated = repo
        .update(drone.id, DronePatch::Status("in_flight".to_string()))
        .await?
        .unwrap();

    assert_eq!(updated.status, "in_flight");
    let mut expected = before;
    expected.status = "in_flight".to_string();
    assert_eq!(updated, expected);

    // Verify the stored row matches what was returned
    assert_eq!(repo.get_by_id(drone.id).await?, Some(updated));

    Ok(())
}

/// Tests replacing a drone's possible missions.
///
/// The new list replaces the old one wholesale, order and duplicates preserved.
///
/// Expected: Ok(Some(drone)) with the new list and unchanged status
#[tokio::test]
async fn replaces_possible_missions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Drone)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::drone::DroneFactory::new(db)
        .status("charging")
        .possible_missions_ids(vec![1, 2, 3])
        .build()
        .await?;

    let updated = DroneRepository::new(db)
        .update(drone.id, DronePatch::PossibleMissions(vec![5, 5, 2]))
        .await?
        .unwrap();

    assert_eq!(updated.possible_missions_ids, vec![5, 5, 2]);
    assert_eq!(updated.status, "charging");

    Ok(())
}

/// Tests updating a drone that does not exist.
///
/// Expected: Ok(None) and no row created
#[tokio::test]
async fn returns_none_for_missing_drone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Drone)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = DroneRepository::new(db)
        .update(99, DronePatch::Status("idle".to_string()))
        .await?;

    assert!(result.is_none());
    assert!(entity::prelude::Drone::find().all(db).await?.is_empty());

    Ok(())
}
