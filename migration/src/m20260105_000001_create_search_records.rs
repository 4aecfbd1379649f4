use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create search_records table
        manager
            .create_table(
                Table::create()
                    .table(SearchRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SearchRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SearchRecords::Query).string().not_null())
                    .col(ColumnDef::new(SearchRecords::TargetUrl).string().not_null())
                    .col(
                        ColumnDef::new(SearchRecords::SearchEngine)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SearchRecords::Rankings).string().not_null())
                    .col(
                        ColumnDef::new(SearchRecords::SearchDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for newest-first history listing
        manager
            .create_index(
                Index::create()
                    .name("idx_search_records_search_date")
                    .table(SearchRecords::Table)
                    .col(SearchRecords::SearchDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SearchRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SearchRecords {
    Table,
    Id,
    Query,
    TargetUrl,
    SearchEngine,
    Rankings,
    SearchDate,
}
