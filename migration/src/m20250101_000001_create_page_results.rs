// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

/// 创建抓取结果表
///
/// 只追加的结果表，每次抓取尝试写入一行
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite's CURRENT_TIMESTAMP has no offset, store RFC 3339 text instead
        let fetched_at_default = match manager.get_database_backend() {
            DatabaseBackend::Sqlite => Expr::cust("(strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))"),
            _ => Expr::current_timestamp().into(),
        };

        manager
            .create_table(
                Table::create()
                    .table(PageResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PageResults::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PageResults::Url).text().not_null())
                    .col(ColumnDef::new(PageResults::StatusCode).integer().null())
                    .col(ColumnDef::new(PageResults::Title).text().null())
                    .col(ColumnDef::new(PageResults::Description).text().null())
                    .col(
                        ColumnDef::new(PageResults::DurationMs)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PageResults::Error).text().null())
                    .col(
                        ColumnDef::new(PageResults::FetchedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(fetched_at_default),
                    )
                    .to_owned(),
            )
            .await?;

        // The results query sorts by fetch time, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_page_results_fetched_at")
                    .table(PageResults::Table)
                    .col(PageResults::FetchedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PageResults::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PageResults {
    Table,
    Id,
    Url,
    StatusCode,
    Title,
    Description,
    DurationMs,
    Error,
    FetchedAt,
}
