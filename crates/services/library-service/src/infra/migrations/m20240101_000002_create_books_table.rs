//! Migration: Create books table.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_authors_table::Authors;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Books::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Books::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Books::Title).string().not_null())
                    .col(ColumnDef::new(Books::Category).string().not_null())
                    .col(ColumnDef::new(Books::Stock).integer().not_null().default(0))
                    .col(ColumnDef::new(Books::Discount).boolean().not_null().default(false))
                    .col(ColumnDef::new(Books::AuthorId).integer().null())
                    .col(
                        ColumnDef::new(Books::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Books::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_books_author_id")
                            .from(Books::Table, Books::AuthorId)
                            .to(Authors::Table, Authors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Category lookups back the catalog searches
        manager
            .create_index(
                Index::create()
                    .name("idx_books_category")
                    .table(Books::Table)
                    .col(Books::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_books_category")
                    .table(Books::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Books::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Books {
    Table,
    Id,
    Title,
    Category,
    Stock,
    Discount,
    AuthorId,
    CreatedAt,
    UpdatedAt,
}
