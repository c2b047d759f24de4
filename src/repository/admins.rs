//! Administrator accounts repository

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::guest::Admin};

#[derive(Clone)]
pub struct AdminsRepository {
    pool: Pool<Postgres>,
}

impl AdminsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        let row = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Insert an administrator unless one with this email exists
    pub async fn create_if_missing(&self, email: &str, password_hash: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "INSERT INTO admins (email, password) VALUES ($1, $2) ON CONFLICT (email) DO NOTHING"
        )
        .bind(email)
        .bind(password_hash)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
