use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::UserPayload;

/// A stored user. `id` and `created_at` are assigned by the store on
/// insert and never accepted from a client.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub rating: f64,
    pub phone: String,
    pub languages: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Writable fields, i.e. everything except `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct UserFields {
    pub name: String,
    pub age: i32,
    pub rating: f64,
    pub phone: String,
    pub languages: Vec<String>,
}

impl From<UserPayload> for UserFields {
    fn from(p: UserPayload) -> Self {
        Self {
            name: p.name,
            age: p.age,
            rating: p.rating,
            phone: p.phone,
            languages: p.languages,
        }
    }
}

/// List filters. A `None` threshold means "no constraint"; present
/// thresholds are strict greater-than comparisons.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserFilter {
    pub age_above: Option<i32>,
    pub rating_above: Option<f64>,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, fields: UserFields) -> anyhow::Result<UserRecord>;
    /// Matching rows ordered by ascending age.
    async fn list(&self, filter: UserFilter) -> anyhow::Result<Vec<UserRecord>>;
    async fn get(&self, id: Uuid) -> anyhow::Result<Option<UserRecord>>;
    /// Full-field replace. `None` when no row has this id; nothing is
    /// created in that case.
    async fn replace(&self, id: Uuid, fields: UserFields) -> anyhow::Result<Option<UserRecord>>;
    /// Removes the row, returning its last snapshot.
    async fn delete(&self, id: Uuid) -> anyhow::Result<Option<UserRecord>>;
}

pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, fields: UserFields) -> anyhow::Result<UserRecord> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (name, age, rating, phone, languages)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, age, rating, phone, languages, created_at
            "#,
        )
        .bind(&fields.name)
        .bind(fields.age)
        .bind(fields.rating)
        .bind(&fields.phone)
        .bind(&fields.languages)
        .fetch_one(&self.db)
        .await?;
        Ok(user)
    }

    async fn list(&self, filter: UserFilter) -> anyhow::Result<Vec<UserRecord>> {
        let rows = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, age, rating, phone, languages, created_at
            FROM users
            WHERE ($1::int4 IS NULL OR age > $1)
              AND ($2::float8 IS NULL OR rating > $2)
            ORDER BY age ASC
            "#,
        )
        .bind(filter.age_above)
        .bind(filter.rating_above)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn get(&self, id: Uuid) -> anyhow::Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, age, rating, phone, languages, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn replace(&self, id: Uuid, fields: UserFields) -> anyhow::Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            UPDATE users
            SET name = $2, age = $3, rating = $4, phone = $5, languages = $6
            WHERE id = $1
            RETURNING id, name, age, rating, phone, languages, created_at
            "#,
        )
        .bind(id)
        .bind(&fields.name)
        .bind(fields.age)
        .bind(fields.rating)
        .bind(&fields.phone)
        .bind(&fields.languages)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            DELETE FROM users
            WHERE id = $1
            RETURNING id, name, age, rating, phone, languages, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }
}
