use super::*;

/// Tests listing drones on an empty table.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Drone)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drones = DroneRepository::new(db).get_all().await?;

    assert!(drones.is_empty());

    Ok(())
}

/// Tests listing all drones.
///
/// Expected: Ok with every drone, ordered by id
#[tokio::test]
async fn returns_all_drones_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Drone)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::drone::DroneFactory::new(db).id(30).build().await?;
    factory::drone::DroneFactory::new(db).id(10).build().await?;
    factory::drone::DroneFactory::new(db).id(20).build().await?;

    let drones = DroneRepository::new(db).get_all().await?;
    let ids: Vec<i32> = drones.iter().map(|d| d.id).collect();

    assert_eq!(ids, vec![10, 20, 30]);

    Ok(())
}
