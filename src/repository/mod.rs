//! Repository layer for database operations

pub mod admins;
pub mod facilities;
pub mod facility_bookings;
pub mod guests;
pub mod hotels;
pub mod room_bookings;
pub mod rooms;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub hotels: hotels::HotelsRepository,
    pub rooms: rooms::RoomsRepository,
    pub facilities: facilities::FacilitiesRepository,
    pub guests: guests::GuestsRepository,
    pub admins: admins::AdminsRepository,
    pub room_bookings: room_bookings::RoomBookingsRepository,
    pub facility_bookings: facility_bookings::FacilityBookingsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            hotels: hotels::HotelsRepository,
            rooms: rooms::RoomsRepository::new(pool.clone()),
            facilities: facilities::FacilitiesRepository::new(pool.clone()),
            guests: guests::GuestsRepository::new(pool.clone()),
            admins: admins::AdminsRepository::new(pool.clone()),
            room_bookings: room_bookings::RoomBookingsRepository::new(pool.clone()),
            facility_bookings: facility_bookings::FacilityBookingsRepository::new(pool.clone()),
            pool,
        }
    }
}
