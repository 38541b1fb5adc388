use super::*;

/// Tests creating drones on an empty table.
///
/// Verifies that ids come from the allocator in sequence and that the returned
/// drone matches what was stored.
///
/// Expected: Ok with ids 1 and 2
#[tokio::test]
async fn assigns_sequential_ids() -> Result<(), AllocationError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Drone)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let allocator = IdAllocator::default();

    let repo = DroneRepository::new(db);
    let first = repo.create(&allocator, create_param("Alpha", "idle")).await?;
    let second = repo.create(&allocator, create_param("Bravo", "idle")).await?;

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    Ok(())
}

/// Tests that every field of the create parameters is persisted.
///
/// Expected: Ok with the stored drone equal to the returned one
#[tokio::test]
async fn persists_all_fields() -> Result<(), AllocationError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Drone)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let allocator = IdAllocator::default();

    let repo = DroneRepository::new(db);
    let created = repo
        .create(
            &allocator,
            CreateDroneParam {
                name: "Alpha".to_string(),
                status: "in_flight".to_string(),
                current_mission_id: Some(MissionReference::Id(17)),
                possible_missions_ids: vec![17, 3, 17],
            },
        )
        .await?;

    assert_eq!(created.name, "Alpha");
    assert_eq!(created.status, "in_flight");
    assert_eq!(created.current_mission_id, Some(MissionReference::Id(17)));
    assert_eq!(created.possible_missions_ids, vec![17, 3, 17]);

    let stored = repo.get_by_id(created.id).await?;
    assert_eq!(stored, Some(created));

    Ok(())
}

/// Tests that a status update does not make the allocator reuse or skip ids.
///
/// Expected: third drone gets id 3 after the first one was updated
#[tokio::test]
async fn never_reuses_ids_after_update() -> Result<(), AllocationError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Drone)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let allocator = IdAllocator::default();

    let repo = DroneRepository::new(db);
    let a = repo.create(&allocator, create_param("A", "idle")).await?;
    repo.create(&allocator, create_param("B", "idle")).await?;
    repo.update(a.id, DronePatch::Status("busy".to_string()))
        .await?;
    let c = repo.create(&allocator, create_param("C", "idle")).await?;

    assert_eq!(c.id, 3);
    assert_eq!(entity::prelude::Drone::find().all(db).await?.len(), 3);

    Ok(())
}
