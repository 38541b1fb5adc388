use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedule::Table)
                    .if_not_exists()
                    .col(integer(Schedule::Id).primary_key())
                    .col(integer(Schedule::DroneId))
                    .col(integer(Schedule::MissionId))
                    .col(timestamp_with_time_zone(Schedule::StartTime))
                    .col(timestamp_with_time_zone(Schedule::EndTime))
                    .col(string(Schedule::Status))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schedule_drone_id")
                    .table(Schedule::Table)
                    .col(Schedule::DroneId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schedule_time_range")
                    .table(Schedule::Table)
                    .col(Schedule::StartTime)
                    .col(Schedule::EndTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Schedule {
    Table,
    Id,
    DroneId,
    MissionId,
    StartTime,
    EndTime,
    Status,
}
