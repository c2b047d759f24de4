//! Facilities and operating hours repository

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::{PgConnection, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{DayOfWeek, ResourceStatus},
        facility::{CreateFacility, Facility, OperatingHours, OperatingHoursInput, UpdateFacility},
    },
};

#[derive(Clone)]
pub struct FacilitiesRepository {
    pool: Pool<Postgres>,
}

impl FacilitiesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all facilities ordered by name
    pub async fn list(&self) -> AppResult<Vec<Facility>> {
        let rows = sqlx::query_as::<_, Facility>("SELECT * FROM facilities ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get facility by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Facility> {
        sqlx::query_as::<_, Facility>("SELECT * FROM facilities WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Facility not found".to_string()))
    }

    pub async fn get_many(&self, conn: &mut PgConnection, ids: &[Uuid]) -> AppResult<Vec<Facility>> {
        let rows = sqlx::query_as::<_, Facility>("SELECT * FROM facilities WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    /// Get facility by ID and hold a row lock until the transaction ends
    pub async fn lock_by_id(&self, conn: &mut PgConnection, id: Uuid) -> AppResult<Facility> {
        sqlx::query_as::<_, Facility>("SELECT * FROM facilities WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| AppError::NotFound("Facility not found".to_string()))
    }

    /// Create a facility in the given hotel (operating hours are stored separately)
    pub async fn create(
        &self,
        conn: &mut PgConnection,
        hotel_id: Uuid,
        data: &CreateFacility,
    ) -> AppResult<Facility> {
        let row = sqlx::query_as::<_, Facility>(
            r#"
            INSERT INTO facilities (hotel_id, name, facility_type, base_price, vip_discount,
                                    capacity, description, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(hotel_id)
        .bind(&data.name)
        .bind(data.facility_type)
        .bind(data.base_price)
        .bind(data.vip_discount)
        .bind(data.capacity)
        .bind(data.description.as_deref().unwrap_or_default())
        .bind(data.status.unwrap_or_default())
        .fetch_one(&mut *conn)
        .await?;
        Ok(row)
    }

    /// Update the provided scalar fields of a facility
    pub async fn update(&self, conn: &mut PgConnection, id: Uuid, data: &UpdateFacility) -> AppResult<Facility> {
        let now = Utc::now();
        let mut sets = vec!["modif_date = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.name, "name");
        add_field!(data.facility_type, "facility_type");
        add_field!(data.base_price, "base_price");
        add_field!(data.vip_discount, "vip_discount");
        add_field!(data.capacity, "capacity");
        add_field!(data.description, "description");
        add_field!(data.status, "status");

        let query = format!(
            "UPDATE facilities SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Facility>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.facility_type);
        bind_field!(data.base_price);
        bind_field!(data.vip_discount);
        bind_field!(data.capacity);
        bind_field!(data.description);
        bind_field!(data.status);

        builder
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| AppError::NotFound("Facility not found".to_string()))
    }

    /// Delete a facility (hours and historical bookings cascade)
    pub async fn delete(&self, conn: &mut PgConnection, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM facilities WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Facility not found".to_string()));
        }
        Ok(())
    }

    /// Persist a projected status.
    ///
    /// Only rows still in a booking-derived status are written, so a
    /// MAINTENANCE or CLEANING set concurrently by an administrator wins.
    /// Returns whether the row was updated.
    pub async fn set_status(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        status: ResourceStatus,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        let query = format!(
            "UPDATE facilities SET status = $1, modif_date = $2 WHERE id = $3 AND status IN {}",
            ResourceStatus::sql_list(&ResourceStatus::DERIVED)
        );
        let result = sqlx::query(&query)
            .bind(status)
            .bind(now)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count facilities, optionally restricted to one status (for stats)
    pub async fn count(&self, status: Option<ResourceStatus>) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM facilities WHERE ($1::text IS NULL OR status = $1)"
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    // =========================================================================
    // Operating hours
    // =========================================================================

    /// Operating hours of several facilities, grouped by facility
    pub async fn hours_for(&self, facility_ids: &[Uuid]) -> AppResult<HashMap<Uuid, Vec<OperatingHours>>> {
        let rows = sqlx::query_as::<_, OperatingHours>(
            r#"
            SELECT * FROM operating_hours
            WHERE facility_id = ANY($1)
            ORDER BY CASE day_of_week
                WHEN 'MONDAY' THEN 1 WHEN 'TUESDAY' THEN 2 WHEN 'WEDNESDAY' THEN 3
                WHEN 'THURSDAY' THEN 4 WHEN 'FRIDAY' THEN 5 WHEN 'SATURDAY' THEN 6
                ELSE 7 END
            "#,
        )
        .bind(facility_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<Uuid, Vec<OperatingHours>> = HashMap::new();
        for row in rows {
            grouped.entry(row.facility_id).or_default().push(row);
        }
        Ok(grouped)
    }

    /// Operating hours of one facility for one day
    pub async fn hours_for_day(
        &self,
        conn: &mut PgConnection,
        facility_id: Uuid,
        day: DayOfWeek,
    ) -> AppResult<Option<OperatingHours>> {
        let row = sqlx::query_as::<_, OperatingHours>(
            "SELECT * FROM operating_hours WHERE facility_id = $1 AND day_of_week = $2"
        )
        .bind(facility_id)
        .bind(day)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(row)
    }

    /// Replace the full operating-hours set of a facility
    pub async fn replace_hours(
        &self,
        conn: &mut PgConnection,
        facility_id: Uuid,
        hours: &[OperatingHoursInput],
    ) -> AppResult<Vec<OperatingHours>> {
        sqlx::query("DELETE FROM operating_hours WHERE facility_id = $1")
            .bind(facility_id)
            .execute(&mut *conn)
            .await?;

        let mut rows = Vec::with_capacity(hours.len());
        for entry in hours {
            let row = sqlx::query_as::<_, OperatingHours>(
                r#"
                INSERT INTO operating_hours (facility_id, day_of_week, open_time, close_time)
                VALUES ($1, $2, $3, $4)
                RETURNING *
                "#,
            )
            .bind(facility_id)
            .bind(entry.day_of_week)
            .bind(&entry.open_time)
            .bind(&entry.close_time)
            .fetch_one(&mut *conn)
            .await?;
            rows.push(row);
        }
        Ok(rows)
    }
}
