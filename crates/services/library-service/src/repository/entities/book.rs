//! Book database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;

use domain::{Book, BookSummary};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub category: String,
    pub stock: i32,
    pub discount: bool,
    pub author_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::AuthorId",
        to = "super::author::Column::Id",
        on_delete = "SetNull"
    )]
    Author,
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Row shape of a `SELECT title, category` projection
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct SummaryRow {
    pub title: String,
    pub category: String,
}

/// Convert database model to domain record
impl From<Model> for Book {
    fn from(model: Model) -> Self {
        Book {
            id: model.id,
            title: model.title,
            category: model.category,
            stock: model.stock,
            discount: model.discount,
            author_id: model.author_id,
            author: None,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<SummaryRow> for BookSummary {
    fn from(row: SummaryRow) -> Self {
        BookSummary {
            title: row.title,
            category: row.category,
        }
    }
}
