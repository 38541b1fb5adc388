use super::*;

/// Tests listing missions.
///
/// Expected: Ok with every mission ordered by id
#[tokio::test]
async fn returns_all_missions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let second = factory::mission::MissionFactory::new(db).id(2).build().await?;
    let first = factory::mission::MissionFactory::new(db).id(1).build().await?;

    let missions = MissionRepository::new(db).get_all().await?;
    let ids: Vec<i32> = missions.iter().map(|m| m.id).collect();

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests listing missions on an empty table.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let missions = MissionRepository::new(db).get_all().await?;

    assert!(missions.is_empty());

    Ok(())
}
