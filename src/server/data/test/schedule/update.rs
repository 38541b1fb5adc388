use super::*;

/// Tests updating a schedule's status.
///
/// Expected: Ok(Some(schedule)) equal to the original apart from status
#[tokio::test]
async fn updates_only_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_schedule_between(db, 3, 5, at(8), at(9)).await?;

    let repo = ScheduleRepository::new(db);
    let before = repo.get_by_id(created.id).await?.unwrap();
    let updated = repo
        .update(created.id, SchedulePatch::Status("completed".to_string()))
        .await?
        .unwrap();

    let mut expected = before;
    expected.status = "completed".to_string();
    assert_eq!(updated, expected);
    assert_eq!(repo.get_by_id(created.id).await?, Some(updated));

    Ok(())
}

/// Tests updating a schedule that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ScheduleRepository::new(db)
        .update(1, SchedulePatch::Status("completed".to_string()))
        .await?;

    assert!(result.is_none());

    Ok(())
}
