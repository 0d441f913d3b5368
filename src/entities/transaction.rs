//! Transaction entity - Represents all financial movements in the ledger.
//!
//! Each transaction has a `user_id`, an optional `category_id` (uncategorized
//! transactions are legal and survive deletion of their category), an amount
//! in minor units, a `flow` (income/expense), a `kind` (fixed/variable), and
//! the date it occurred. Amounts are stored as integer cents so repeated
//! aggregation never accumulates floating-point drift.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::flow::Flow;

/// Recurrence character of a transaction.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Recurs every period (rent, salary)
    #[sea_orm(string_value = "fixed")]
    Fixed,
    /// One-off or irregular
    #[sea_orm(string_value = "variable")]
    Variable,
}

/// Transaction database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user who owns this transaction
    pub user_id: i64,
    /// Category this transaction belongs to, if any
    pub category_id: Option<i64>,
    /// Human-readable description of the transaction
    pub description: String,
    /// Amount in minor units (cents); always non-negative, direction is `flow`
    pub amount_cents: i64,
    /// Whether this is money in or money out
    pub flow: Flow,
    /// Fixed or variable recurrence
    pub kind: TransactionKind,
    /// When the transaction occurred
    pub occurred_at: DateTimeUtc,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Transaction and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each transaction may belong to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
