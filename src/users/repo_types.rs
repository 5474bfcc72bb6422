use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the `users` table. `id` is assigned by Postgres on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}
