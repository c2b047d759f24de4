//! Guests and memberships repository

use chrono::{DateTime, Utc};
use sqlx::{PgConnection, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::guest::{Guest, Membership},
};

#[derive(Clone)]
pub struct GuestsRepository {
    pool: Pool<Postgres>,
}

impl GuestsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get guest by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Guest> {
        sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))
    }

    /// Get guest by ID on an existing connection (e.g. a booking transaction)
    pub async fn find_by_id(&self, conn: &mut PgConnection, id: Uuid) -> AppResult<Guest> {
        sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))
    }

    /// Get guest by email (case-insensitive)
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<Guest>> {
        let row = sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM guests WHERE LOWER(email) = LOWER($1))"
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Create a guest; `password_hash` must already be hashed
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        phone: Option<&str>,
    ) -> AppResult<Guest> {
        let row = sqlx::query_as::<_, Guest>(
            r#"
            INSERT INTO guests (name, email, password, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(phone)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    // =========================================================================
    // Memberships
    // =========================================================================

    pub async fn get_membership(&self, guest_id: Uuid) -> AppResult<Option<Membership>> {
        let row = sqlx::query_as::<_, Membership>("SELECT * FROM memberships WHERE guest_id = $1")
            .bind(guest_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Whether the guest holds a membership active at `now`
    pub async fn has_active_membership(
        &self,
        conn: &mut PgConnection,
        guest_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        let active: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM memberships
                WHERE guest_id = $1 AND (expires_at IS NULL OR expires_at > $2)
            )
            "#,
        )
        .bind(guest_id)
        .bind(now)
        .fetch_one(&mut *conn)
        .await?;
        Ok(active)
    }

    /// Create or replace the membership of a guest
    pub async fn upsert_membership(
        &self,
        guest_id: Uuid,
        tier: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> AppResult<Membership> {
        let row = sqlx::query_as::<_, Membership>(
            r#"
            INSERT INTO memberships (guest_id, tier, expires_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (guest_id)
            DO UPDATE SET tier = EXCLUDED.tier, expires_at = EXCLUDED.expires_at
            RETURNING *
            "#,
        )
        .bind(guest_id)
        .bind(tier)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete_membership(&self, guest_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM memberships WHERE guest_id = $1")
            .bind(guest_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Membership not found".to_string()));
        }
        Ok(())
    }
}
