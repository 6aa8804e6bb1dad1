use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow)]
pub struct Teacher {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Teacher {
    pub async fn find_all(db: &PgPool) -> anyhow::Result<Vec<Teacher>> {
        let rows = sqlx::query_as::<_, Teacher>(
            r#"
            SELECT id, first_name, last_name, created_at, updated_at
            FROM teachers
            ORDER BY id
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(db: &PgPool, id: i64) -> anyhow::Result<Option<Teacher>> {
        let row = sqlx::query_as::<_, Teacher>(
            r#"
            SELECT id, first_name, last_name, created_at, updated_at
            FROM teachers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }
}
