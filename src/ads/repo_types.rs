use sqlx::FromRow;
use time::OffsetDateTime;

/// Ad record in the database.
#[derive(Debug, FromRow)]
pub struct Ad {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub creation_time: OffsetDateTime,
    pub user_id: i32,
}
