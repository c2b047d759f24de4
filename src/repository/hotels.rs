//! Hotels repository

use sqlx::PgConnection;

use crate::{
    error::AppResult,
    models::hotel::{DefaultHotel, Hotel},
};

/// Hotel queries only run inside inventory transactions, so no pool is held
#[derive(Clone, Default)]
pub struct HotelsRepository;

impl HotelsRepository {
    /// First hotel, creating the default one when the table is empty.
    ///
    /// Serialized with a transaction-scoped advisory lock so concurrent
    /// inventory inserts cannot create two default hotels.
    pub async fn first_or_create_default(&self, conn: &mut PgConnection) -> AppResult<Hotel> {
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext('hotels.default'))")
            .execute(&mut *conn)
            .await?;

        let existing = sqlx::query_as::<_, Hotel>(
            "SELECT * FROM hotels ORDER BY crea_date, name LIMIT 1"
        )
        .fetch_optional(&mut *conn)
        .await?;

        if let Some(hotel) = existing {
            return Ok(hotel);
        }

        tracing::info!("No hotel found, creating '{}'", DefaultHotel::NAME);

        let hotel = sqlx::query_as::<_, Hotel>(
            r#"
            INSERT INTO hotels (name, address, description)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(DefaultHotel::NAME)
        .bind(DefaultHotel::ADDRESS)
        .bind(DefaultHotel::DESCRIPTION)
        .fetch_one(&mut *conn)
        .await?;
        Ok(hotel)
    }
}
