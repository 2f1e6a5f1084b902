use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Pipelines {
    Table,
    Id,
    EgonId,
    Name,
    LaunchedAt,
}

#[derive(Iden)]
enum StatusUpdates {
    Table,
    Id,
    PipelineId,
    Node,
    Status,
    ReportedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // pipelines
        manager
            .create_table(
                Table::create()
                    .table(Pipelines::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pipelines::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Pipelines::EgonId).string().not_null())
                    .col(ColumnDef::new(Pipelines::Name).string().not_null())
                    .col(
                        ColumnDef::new(Pipelines::LaunchedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // unique index on pipelines.egon_id
        manager
            .create_index(
                Index::create()
                    .name("ux_pipelines_egon_id")
                    .table(Pipelines::Table)
                    .col(Pipelines::EgonId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // status_updates table
        manager
            .create_table(
                Table::create()
                    .table(StatusUpdates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StatusUpdates::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(StatusUpdates::PipelineId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StatusUpdates::Node).string().not_null())
                    .col(ColumnDef::new(StatusUpdates::Status).string().not_null())
                    .col(
                        ColumnDef::new(StatusUpdates::ReportedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_status_updates_pipeline_id")
                            .from(StatusUpdates::Table, StatusUpdates::PipelineId)
                            .to(Pipelines::Table, Pipelines::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_status_updates_pipeline_id")
                    .table(StatusUpdates::Table)
                    .col(StatusUpdates::PipelineId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StatusUpdates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Pipelines::Table).to_owned())
            .await?;

        Ok(())
    }
}
