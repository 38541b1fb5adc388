use super::*;

/// Tests filtering schedules by drone.
///
/// Expected: Ok with only that drone's schedules, earliest first
#[tokio::test]
async fn returns_schedules_for_drone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let late = factory::create_schedule_between(db, 1, 1, at(14), at(15)).await?;
    factory::create_schedule_between(db, 2, 1, at(9), at(10)).await?;
    let early = factory::create_schedule_between(db, 1, 2, at(9), at(10)).await?;

    let schedules = ScheduleRepository::new(db).get_by_drone_id(1).await?;
    let ids: Vec<i32> = schedules.iter().map(|s| s.id).collect();

    assert_eq!(ids, vec![early.id, late.id]);

    Ok(())
}

/// Tests filtering by a drone without schedules.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_unscheduled_drone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_schedule(db, 1, 1).await?;

    let schedules = ScheduleRepository::new(db).get_by_drone_id(2).await?;

    assert!(schedules.is_empty());

    Ok(())
}
