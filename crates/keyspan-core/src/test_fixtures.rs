//! Shared fixtures for planner tests: a small people table with the index
//! shapes the planning paths care about.

use crate::model::{ColumnModel, IndexModel, TableModel};

pub const COL_ID: usize = 0;
pub const COL_LAST_NAME: usize = 1;
pub const COL_FIRST_NAME: usize = 2;
pub const COL_AGE: usize = 3;
pub const COL_EMAIL: usize = 4;

/// `person(id, last_name, first_name, age, email, team)` with a primary key
/// on `id`, a unique hash index on `email`, an ordered composite index on
/// `(last_name, first_name)`, and an ordered index on `age`. `team` is a
/// relationship column and not comparable.
pub fn person_table() -> TableModel {
    TableModel::new(
        "person",
        vec![
            ColumnModel::scalar("id"),
            ColumnModel::scalar("last_name"),
            ColumnModel::scalar("first_name"),
            ColumnModel::scalar("age"),
            ColumnModel::scalar("email"),
            ColumnModel::relation("team"),
        ],
        vec![
            IndexModel::primary_key("pk", vec![COL_ID]),
            IndexModel::unique("uq_email", vec![COL_EMAIL]),
            IndexModel::ordered("idx_name", vec![COL_LAST_NAME, COL_FIRST_NAME]),
            IndexModel::ordered("idx_age", vec![COL_AGE]),
        ],
    )
}
