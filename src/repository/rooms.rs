//! Rooms repository

use chrono::{DateTime, Utc};
use sqlx::{PgConnection, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::ResourceStatus,
        room::{CreateRoom, Room, UpdateRoom},
    },
};

#[derive(Clone)]
pub struct RoomsRepository {
    pool: Pool<Postgres>,
}

impl RoomsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all rooms ordered by number
    pub async fn list(&self) -> AppResult<Vec<Room>> {
        let rows = sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY number")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get room by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Room> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))
    }

    /// Fetch several rooms at once
    pub async fn get_many(&self, conn: &mut PgConnection, ids: &[Uuid]) -> AppResult<Vec<Room>> {
        let rows = sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    /// Get room by ID and hold a row lock until the transaction ends.
    ///
    /// Every write that depends on the room's bookings takes this lock first,
    /// which serializes booking creation and deletion per room.
    pub async fn lock_by_id(&self, conn: &mut PgConnection, id: Uuid) -> AppResult<Room> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))
    }

    /// Create a room in the given hotel
    pub async fn create(&self, conn: &mut PgConnection, hotel_id: Uuid, data: &CreateRoom) -> AppResult<Room> {
        let row = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (hotel_id, number, room_type, base_price, vip_discount,
                               size, capacity, amenities, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(hotel_id)
        .bind(&data.number)
        .bind(data.room_type)
        .bind(data.base_price)
        .bind(data.vip_discount)
        .bind(data.size)
        .bind(data.capacity)
        .bind(&data.amenities)
        .bind(data.status.unwrap_or_default())
        .fetch_one(&mut *conn)
        .await?;
        Ok(row)
    }

    /// Update the provided fields of a room
    pub async fn update(&self, id: Uuid, data: &UpdateRoom) -> AppResult<Room> {
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

        add_field!(data.number, "number");
        add_field!(data.room_type, "room_type");
        add_field!(data.base_price, "base_price");
        add_field!(data.vip_discount, "vip_discount");
        add_field!(data.size, "size");
        add_field!(data.capacity, "capacity");
        add_field!(data.amenities, "amenities");
        add_field!(data.status, "status");

        let query = format!(
            "UPDATE rooms SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Room>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.number);
        bind_field!(data.room_type);
        bind_field!(data.base_price);
        bind_field!(data.vip_discount);
        bind_field!(data.size);
        bind_field!(data.capacity);
        bind_field!(data.amenities);
        bind_field!(data.status);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))
    }

    /// Delete a room (its historical bookings cascade)
    pub async fn delete(&self, conn: &mut PgConnection, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Room not found".to_string()));
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
            "UPDATE rooms SET status = $1, modif_date = $2 WHERE id = $3 AND status IN {}",
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

    /// Count rooms, optionally restricted to one status (for stats)
    pub async fn count(&self, status: Option<ResourceStatus>) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM rooms WHERE ($1::text IS NULL OR status = $1)"
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
