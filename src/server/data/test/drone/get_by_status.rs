use super::*;

/// Tests filtering drones by status.
///
/// Expected: Ok with only the matching drones
#[tokio::test]
async fn returns_only_matching_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Drone)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let idle_a = factory::create_drone_with_status(db, "idle").await?;
    factory::create_drone_with_status(db, "charging").await?;
    let idle_b = factory::create_drone_with_status(db, "idle").await?;

    let drones = DroneRepository::new(db).get_by_status("idle").await?;
    let ids: Vec<i32> = drones.iter().map(|d| d.id).collect();

    assert_eq!(ids, vec![idle_a.id, idle_b.id]);

    Ok(())
}

/// Tests that the status filter is an exact match.
///
/// Expected: Ok(empty vec) for a differently-cased status
#[tokio::test]
async fn status_match_is_exact() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Drone)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_drone_with_status(db, "idle").await?;

    let drones = DroneRepository::new(db).get_by_status("IDLE").await?;

    assert!(drones.is_empty());

    Ok(())
}
