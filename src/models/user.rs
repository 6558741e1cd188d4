use serde::{Deserialize, Serialize};

/// Row of the `public."user"` table, decoded by column name.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow, utoipa::ToSchema)]
pub struct User {
    pub id: i64,
    pub mobile: String,
    pub name: Option<String>,
}
