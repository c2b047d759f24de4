//! Room bookings repository

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgConnection, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult, PG_EXCLUSION_VIOLATION},
    models::{booking::RoomBooking, enums::BookingStatus},
    services::availability::BookingWindow,
};

/// Values of a room booking about to be inserted
pub struct NewRoomBooking {
    pub room_id: Uuid,
    pub guest_id: Uuid,
    pub window: BookingWindow,
    pub number_of_guests: i32,
    pub final_price: Decimal,
    pub status: BookingStatus,
}

#[derive(Clone)]
pub struct RoomBookingsRepository {
    pool: Pool<Postgres>,
}

impl RoomBookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Bookings of a guest, most recent check-in first
    pub async fn list_for_guest(&self, guest_id: Uuid) -> AppResult<Vec<RoomBooking>> {
        let rows = sqlx::query_as::<_, RoomBooking>(
            "SELECT * FROM room_bookings WHERE guest_id = $1 ORDER BY check_in DESC"
        )
        .bind(guest_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// All bookings of a room, most recent check-in first
    pub async fn list_for_room(&self, room_id: Uuid) -> AppResult<Vec<RoomBooking>> {
        let rows = sqlx::query_as::<_, RoomBooking>(
            "SELECT * FROM room_bookings WHERE room_id = $1 ORDER BY check_in DESC"
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Count active bookings of a room intersecting `window`
    pub async fn count_overlapping_active(
        &self,
        conn: &mut PgConnection,
        room_id: Uuid,
        window: &BookingWindow,
    ) -> AppResult<i64> {
        let query = format!(
            r#"
            SELECT COUNT(*) FROM room_bookings
            WHERE room_id = $1
              AND check_in < $2
              AND check_out > $3
              AND status IN {}
            "#,
            BookingStatus::sql_list(&BookingStatus::ACTIVE)
        );
        let count: i64 = sqlx::query_scalar(&query)
            .bind(room_id)
            .bind(window.end)
            .bind(window.start)
            .fetch_one(&mut *conn)
            .await?;
        Ok(count)
    }

    /// Count active bookings of a room, whatever their dates
    pub async fn count_active_for_room(&self, conn: &mut PgConnection, room_id: Uuid) -> AppResult<i64> {
        let query = format!(
            "SELECT COUNT(*) FROM room_bookings WHERE room_id = $1 AND status IN {}",
            BookingStatus::sql_list(&BookingStatus::ACTIVE)
        );
        let count: i64 = sqlx::query_scalar(&query)
            .bind(room_id)
            .fetch_one(&mut *conn)
            .await?;
        Ok(count)
    }

    /// Occupying booking of a room with the latest check-out after `now`
    pub async fn latest_occupying(
        &self,
        conn: &mut PgConnection,
        room_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<Option<RoomBooking>> {
        let query = format!(
            r#"
            SELECT * FROM room_bookings
            WHERE room_id = $1 AND check_out > $2 AND status IN {}
            ORDER BY check_out DESC
            LIMIT 1
            "#,
            BookingStatus::sql_list(&BookingStatus::OCCUPYING)
        );
        let row = sqlx::query_as::<_, RoomBooking>(&query)
            .bind(room_id)
            .bind(now)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Insert a booking.
    ///
    /// The table's exclusion constraint rejects overlapping active stays even
    /// if the caller skipped the overlap check; that surfaces as the same
    /// business error.
    pub async fn insert(&self, conn: &mut PgConnection, booking: &NewRoomBooking) -> AppResult<RoomBooking> {
        let result = sqlx::query_as::<_, RoomBooking>(
            r#"
            INSERT INTO room_bookings (room_id, guest_id, check_in, check_out,
                                       number_of_guests, final_price, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(booking.room_id)
        .bind(booking.guest_id)
        .bind(booking.window.start)
        .bind(booking.window.end)
        .bind(booking.number_of_guests)
        .bind(booking.final_price)
        .bind(booking.status)
        .fetch_one(&mut *conn)
        .await;

        match result {
            Ok(row) => Ok(row),
            Err(e) => {
                let err = AppError::from(e);
                if err.db_code().as_deref() == Some(PG_EXCLUSION_VIOLATION) {
                    Err(AppError::BusinessRule(
                        "Room is not available for the selected dates".to_string(),
                    ))
                } else {
                    Err(err)
                }
            }
        }
    }

    /// Count bookings, optionally restricted to one status (for stats)
    pub async fn count(&self, status: Option<BookingStatus>) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM room_bookings WHERE ($1::text IS NULL OR status = $1)"
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Confirmed bookings whose check-in is at or after `since` (for stats)
    pub async fn count_pending_check_ins(&self, since: DateTime<Utc>) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM room_bookings WHERE status = $1 AND check_in >= $2"
        )
        .bind(BookingStatus::Confirmed)
        .bind(since)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
