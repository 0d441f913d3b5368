//! Category entity - User-defined buckets that group transactions.
//!
//! Each category belongs to one user and is pinned to a single flow at
//! creation: an expense category never holds income transactions. The icon
//! and color fields are display metadata and may be absent.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::flow::Flow;

/// Category database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique identifier for the category
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user who owns this category
    pub user_id: i64,
    /// Display name of the category
    pub name: String,
    /// Optional display icon
    pub icon: Option<String>,
    /// Optional display color
    pub color: Option<String>,
    /// Whether this category groups income or expenses
    pub flow: Flow,
    /// When the category was created
    pub created_at: DateTimeUtc,
    /// When the category was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Category and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each category groups many transactions
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transaction,
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
