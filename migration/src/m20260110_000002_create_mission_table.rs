use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mission::Table)
                    .if_not_exists()
                    .col(integer(Mission::Id).primary_key())
                    .col(integer(Mission::TrajectoryId))
                    .col(integer(Mission::Duration))
                    .col(integer(Mission::Priority))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mission {
    Table,
    Id,
    TrajectoryId,
    Duration,
    Priority,
}
