use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Drone::Table)
                    .if_not_exists()
                    // Application-assigned, never generated by the database
                    .col(integer(Drone::Id).primary_key())
                    .col(string(Drone::Name))
                    .col(string(Drone::Status))
                    .col(json_null(Drone::CurrentMissionId))
                    .col(json(Drone::PossibleMissionsIds))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_drone_status")
                    .table(Drone::Table)
                    .col(Drone::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Drone::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Drone {
    Table,
    Id,
    Name,
    Status,
    CurrentMissionId,
    PossibleMissionsIds,
}
