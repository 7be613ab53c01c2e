use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Post record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub first_name: String, // author name, free text
    pub last_name: String,
    pub title: String,
    pub content: String,
    pub created_at: OffsetDateTime,
}
