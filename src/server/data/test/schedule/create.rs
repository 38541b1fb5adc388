use super::*;

/// Tests creating a schedule.
///
/// Verifies that the allocator assigns the id and that reading the schedule back
/// yields exactly what was returned, timestamps included.
///
/// Expected: Ok with id 1 and matching stored row
#[tokio::test]
async fn creates_schedule() -> Result<(), AllocationError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let allocator = IdAllocator::default();

    let repo = ScheduleRepository::new(db);
    let schedule = repo
        .create(
            &allocator,
            CreateScheduleParam {
                drone_id: 4,
                mission_id: 9,
                start_time: at(8),
                end_time: at(10),
                status: "planned".to_string(),
            },
        )
        .await?;

    assert_eq!(schedule.id, 1);
    assert_eq!(schedule.drone_id, 4);
    assert_eq!(schedule.mission_id, 9);
    assert_eq!(schedule.start_time, at(8));
    assert_eq!(schedule.end_time, at(10));
    assert_eq!(repo.get_by_id(1).await?, Some(schedule));

    Ok(())
}

/// Tests that sub-second precision survives storage.
///
/// Expected: Ok with the stored start time equal to the submitted one
#[tokio::test]
async fn preserves_microseconds() -> Result<(), AllocationError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let allocator = IdAllocator::default();

    let start = at(8) + Duration::microseconds(1234);
    let repo = ScheduleRepository::new(db);
    let schedule = repo
        .create(
            &allocator,
            CreateScheduleParam {
                drone_id: 1,
                mission_id: 1,
                start_time: start,
                end_time: at(9),
                status: "planned".to_string(),
            },
        )
        .await?;

    let stored = repo.get_by_id(schedule.id).await?.unwrap();
    assert_eq!(stored.start_time, start);

    Ok(())
}
