use super::*;

/// Tests creating a mission on an empty table.
///
/// Expected: Ok with id 1 and the stored mission equal to the returned one
#[tokio::test]
async fn creates_mission_with_first_id() -> Result<(), AllocationError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let allocator = IdAllocator::default();

    let repo = MissionRepository::new(db);
    let mission = repo
        .create(
            &allocator,
            CreateMissionParam {
                trajectory_id: 12,
                duration: 900,
                priority: 2,
            },
        )
        .await?;

    assert_eq!(mission.id, 1);
    assert_eq!(mission.trajectory_id, 12);
    assert_eq!(mission.duration, 900);
    assert_eq!(mission.priority, 2);
    assert_eq!(repo.get_by_id(1).await?, Some(mission));

    Ok(())
}

/// Tests that allocation continues after rows seeded with explicit ids.
///
/// Expected: Ok with id one above the seeded maximum
#[tokio::test]
async fn continues_after_existing_ids() -> Result<(), AllocationError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let allocator = IdAllocator::default();

    factory::mission::MissionFactory::new(db).id(7).build().await?;

    let mission = MissionRepository::new(db)
        .create(
            &allocator,
            CreateMissionParam {
                trajectory_id: 1,
                duration: 60,
                priority: 1,
            },
        )
        .await?;

    assert_eq!(mission.id, 8);

    Ok(())
}
