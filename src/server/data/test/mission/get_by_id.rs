use super::*;

/// Tests fetching an existing mission.
///
/// Expected: Ok(Some(mission))
#[tokio::test]
async fn returns_existing_mission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mission = factory::mission::MissionFactory::new(db)
        .trajectory_id(40)
        .priority(5)
        .build()
        .await?;

    let found = MissionRepository::new(db).get_by_id(mission.id).await?;

    let found = found.expect("mission should exist");
    assert_eq!(found.trajectory_id, 40);
    assert_eq!(found.priority, 5);

    Ok(())
}

/// Tests fetching a mission that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_mission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = MissionRepository::new(db).get_by_id(1).await?;

    assert!(found.is_none());

    Ok(())
}
