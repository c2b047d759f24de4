//! Facility bookings repository

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgConnection, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{booking::FacilityBooking, enums::BookingStatus},
    services::availability::BookingWindow,
};

/// Values of a facility booking about to be inserted
pub struct NewFacilityBooking {
    pub facility_id: Uuid,
    pub guest_id: Uuid,
    pub window: BookingWindow,
    pub final_price: Decimal,
    pub status: BookingStatus,
}

#[derive(Clone)]
pub struct FacilityBookingsRepository {
    pool: Pool<Postgres>,
}

impl FacilityBookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Bookings of a guest, most recent start first
    pub async fn list_for_guest(&self, guest_id: Uuid) -> AppResult<Vec<FacilityBooking>> {
        let rows = sqlx::query_as::<_, FacilityBooking>(
            "SELECT * FROM facility_bookings WHERE guest_id = $1 ORDER BY start_time DESC"
        )
        .bind(guest_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn list_for_facility(&self, facility_id: Uuid) -> AppResult<Vec<FacilityBooking>> {
        let rows = sqlx::query_as::<_, FacilityBooking>(
            "SELECT * FROM facility_bookings WHERE facility_id = $1 ORDER BY start_time DESC"
        )
        .bind(facility_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Count active bookings of a facility intersecting `window`
    pub async fn count_overlapping_active(
        &self,
        conn: &mut PgConnection,
        facility_id: Uuid,
        window: &BookingWindow,
    ) -> AppResult<i64> {
        let query = format!(
            r#"
            SELECT COUNT(*) FROM facility_bookings
            WHERE facility_id = $1
              AND start_time < $2
              AND end_time > $3
              AND status IN {}
            "#,
            BookingStatus::sql_list(&BookingStatus::ACTIVE)
        );
        let count: i64 = sqlx::query_scalar(&query)
            .bind(facility_id)
            .bind(window.end)
            .bind(window.start)
            .fetch_one(&mut *conn)
            .await?;
        Ok(count)
    }

    pub async fn count_active_for_facility(&self, conn: &mut PgConnection, facility_id: Uuid) -> AppResult<i64> {
        let query = format!(
            "SELECT COUNT(*) FROM facility_bookings WHERE facility_id = $1 AND status IN {}",
            BookingStatus::sql_list(&BookingStatus::ACTIVE)
        );
        let count: i64 = sqlx::query_scalar(&query)
            .bind(facility_id)
            .fetch_one(&mut *conn)
            .await?;
        Ok(count)
    }

    /// Occupying booking of a facility with the latest end after `now`
    pub async fn latest_occupying(
        &self,
        conn: &mut PgConnection,
        facility_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<Option<FacilityBooking>> {
        let query = format!(
            r#"
            SELECT * FROM facility_bookings
            WHERE facility_id = $1 AND end_time > $2 AND status IN {}
            ORDER BY end_time DESC
            LIMIT 1
            "#,
            BookingStatus::sql_list(&BookingStatus::OCCUPYING)
        );
        let row = sqlx::query_as::<_, FacilityBooking>(&query)
            .bind(facility_id)
            .bind(now)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    pub async fn insert(&self, conn: &mut PgConnection, booking: &NewFacilityBooking) -> AppResult<FacilityBooking> {
        let row = sqlx::query_as::<_, FacilityBooking>(
            r#"
            INSERT INTO facility_bookings (facility_id, guest_id, start_time, end_time,
                                           final_price, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(booking.facility_id)
        .bind(booking.guest_id)
        .bind(booking.window.start)
        .bind(booking.window.end)
        .bind(booking.final_price)
        .bind(booking.status)
        .fetch_one(&mut *conn)
        .await?;
        Ok(row)
    }

    /// Count all facility bookings (for stats)
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM facility_bookings")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
