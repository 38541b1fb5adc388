use super::*;

/// Tests the inclusive range query.
///
/// Schedules touching either bound are included; a schedule starting one
/// microsecond before the lower bound or ending after the upper bound is not.
///
/// Expected: Ok with exactly the schedules inside `[t0, t1]`
#[tokio::test]
async fn returns_schedules_inside_inclusive_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let t0 = at(8);
    let t1 = at(12);

    let at_bounds = factory::create_schedule_between(db, 1, 1, t0, t1).await?;
    let inside = factory::create_schedule_between(db, 2, 1, at(9), at(10)).await?;
    factory::create_schedule_between(db, 3, 1, t0 - Duration::microseconds(1), at(10)).await?;
    factory::create_schedule_between(db, 4, 1, at(9), t1 + Duration::seconds(1)).await?;
    factory::create_schedule_between(db, 5, 1, at(13), at(14)).await?;

    let schedules = ScheduleRepository::new(db)
        .get_within(TimeRange {
            lower: t0,
            upper: t1,
        })
        .await?;
    let ids: Vec<i32> = schedules.iter().map(|s| s.id).collect();

    assert_eq!(ids, vec![at_bounds.id, inside.id]);

    Ok(())
}

/// Tests a range that contains no schedule.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_empty_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_schedule_between(db, 1, 1, at(8), at(9)).await?;

    let schedules = ScheduleRepository::new(db)
        .get_within(TimeRange {
            lower: at(10),
            upper: at(20),
        })
        .await?;

    assert!(schedules.is_empty());

    Ok(())
}
