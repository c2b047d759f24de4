//! Room inventory service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::room::{CreateRoom, Room, RoomDetails, UpdateRoom},
    repository::Repository,
    services::availability::validate_rates,
};

#[derive(Clone)]
pub struct RoomsService {
    repository: Repository,
}

impl RoomsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Room>> {
        self.repository.rooms.list().await
    }

    /// Room with all its bookings
    pub async fn get(&self, id: Uuid) -> AppResult<RoomDetails> {
        let room = self.repository.rooms.get_by_id(id).await?;
        let bookings = self.repository.room_bookings.list_for_room(id).await?;
        Ok(RoomDetails { room, bookings })
    }

    /// Create a room in the first hotel, creating the default hotel if needed
    pub async fn create(&self, room: CreateRoom) -> AppResult<Room> {
        room.validate()?;
        validate_rates(Some(room.base_price), room.vip_discount)?;

        let mut tx = self.repository.pool.begin().await?;
        let hotel = self.repository.hotels.first_or_create_default(&mut *tx).await?;
        let created = self.repository.rooms.create(&mut *tx, hotel.id, &room).await?;
        tx.commit().await?;

        tracing::info!("Room {} created in hotel '{}'", created.number, hotel.name);
        Ok(created)
    }

    pub async fn update(&self, id: Uuid, room: UpdateRoom) -> AppResult<Room> {
        room.validate()?;
        validate_rates(room.base_price, room.vip_discount.flatten())?;
        self.repository.rooms.update(id, &room).await
    }

    /// Delete a room unless it still has active bookings
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut tx = self.repository.pool.begin().await?;

        let room = self.repository.rooms.lock_by_id(&mut *tx, id).await?;
        let active = self
            .repository
            .room_bookings
            .count_active_for_room(&mut *tx, id)
            .await?;
        if active > 0 {
            return Err(AppError::BusinessRule(
                "Cannot delete room with active bookings".to_string(),
            ));
        }

        self.repository.rooms.delete(&mut *tx, id).await?;
        tx.commit().await?;

        tracing::info!("Room {} deleted", room.number);
        Ok(())
    }
}
