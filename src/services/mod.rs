//! Business logic services

pub mod auth;
pub mod availability;
pub mod bookings;
pub mod facilities;
pub mod guests;
pub mod rooms;
pub mod stats;
pub mod status;

use crate::{config::AppConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub bookings: bookings::BookingsService,
    pub rooms: rooms::RoomsService,
    pub facilities: facilities::FacilitiesService,
    pub guests: guests::GuestsService,
    pub stats: stats::StatsService,
    pub repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, config: &AppConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), config.auth.clone()),
            bookings: bookings::BookingsService::new(repository.clone(), config.booking.clone()),
            rooms: rooms::RoomsService::new(repository.clone()),
            facilities: facilities::FacilitiesService::new(repository.clone()),
            guests: guests::GuestsService::new(repository.clone()),
            stats: stats::StatsService::new(repository.clone(), config.booking.clone()),
            repository,
        }
    }
}
