use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: i64,
    pub name: String,
    pub date: OffsetDateTime,
    pub description: String,
    pub teacher_id: Option<i64>,
    pub user_ids: Vec<i64>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Field set written on create and full update; ids are storage-assigned.
#[derive(Debug, Clone)]
pub struct SessionData {
    pub name: String,
    pub date: OffsetDateTime,
    pub description: String,
    pub teacher_id: Option<i64>,
    pub user_ids: Vec<i64>,
}

impl Session {
    pub async fn find_all(db: &PgPool) -> anyhow::Result<Vec<Session>> {
        let rows = sqlx::query_as::<_, Session>(
            r#"
            SELECT id, name, date, description, teacher_id, user_ids, created_at, updated_at
            FROM sessions
            ORDER BY id
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(db: &PgPool, id: i64) -> anyhow::Result<Option<Session>> {
        let row = sqlx::query_as::<_, Session>(
            r#"
            SELECT id, name, date, description, teacher_id, user_ids, created_at, updated_at
            FROM sessions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn create(db: &PgPool, data: &SessionData) -> anyhow::Result<Session> {
        let row = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (name, date, description, teacher_id, user_ids)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, date, description, teacher_id, user_ids, created_at, updated_at
            "#,
        )
        .bind(&data.name)
        .bind(data.date)
        .bind(&data.description)
        .bind(data.teacher_id)
        .bind(&data.user_ids)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    /// Full update; the path id wins over anything in the payload.
    pub async fn update(
        db: &PgPool,
        id: i64,
        data: &SessionData,
    ) -> anyhow::Result<Option<Session>> {
        let row = sqlx::query_as::<_, Session>(
            r#"
            UPDATE sessions
            SET name = $2, date = $3, description = $4, teacher_id = $5,
                user_ids = $6, updated_at = now()
            WHERE id = $1
            RETURNING id, name, date, description, teacher_id, user_ids, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.date)
        .bind(&data.description)
        .bind(data.teacher_id)
        .bind(&data.user_ids)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn delete(db: &PgPool, id: i64) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }

    /// Replace the whole enrollment list; the enrollment manager mutates it
    /// in memory and writes it back.
    pub async fn set_participants(db: &PgPool, id: i64, user_ids: &[i64]) -> anyhow::Result<()> {
        sqlx::query("UPDATE sessions SET user_ids = $2, updated_at = now() WHERE id = $1")
            .bind(id)
            .bind(user_ids)
            .execute(db)
            .await?;
        Ok(())
    }
}
