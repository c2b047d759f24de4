//! Room and facility booking service
//!
//! Each booking is created inside one transaction: the resource row is
//! locked, availability and pricing rules are checked, the booking is
//! inserted and the resource status is refreshed before commit.

use std::collections::HashMap;

use chrono::Utc;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::{
    config::BookingConfig,
    error::{AppError, AppResult},
    models::{
        booking::{
            parse_instant, CreateFacilityBooking, CreateRoomBooking, FacilityBooking,
            FacilityBookingDetails, RoomBooking, RoomBookingDetails,
        },
        enums::BookingStatus,
        session::SessionClaims,
    },
    repository::{
        facility_bookings::NewFacilityBooking, room_bookings::NewRoomBooking, Repository,
    },
    services::{
        availability::{self, BookingWindow},
        status::StatusService,
    },
};

fn missing_fields() -> AppError {
    AppError::Validation("Missing required fields".to_string())
}

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
    status: StatusService,
    config: BookingConfig,
}

impl BookingsService {
    pub fn new(repository: Repository, config: BookingConfig) -> Self {
        Self {
            status: StatusService::new(repository.clone()),
            repository,
            config,
        }
    }

    /// Whether the guest exists and holds an active membership.
    ///
    /// Runs on the booking transaction so no second pool connection is
    /// needed while the resource lock is held.
    async fn guest_membership(&self, conn: &mut PgConnection, guest_id: Uuid) -> AppResult<bool> {
        self.repository.guests.find_by_id(&mut *conn, guest_id).await?;
        self.repository
            .guests
            .has_active_membership(&mut *conn, guest_id, Utc::now())
            .await
    }

    /// Book a room for a stay
    pub async fn create_room_booking(
        &self,
        session: &SessionClaims,
        request: CreateRoomBooking,
    ) -> AppResult<RoomBooking> {
        let guest_id = session.acting_guest(request.guest_id)?;
        let (room_id, guest_id, check_in, check_out, guests) = match (
            request.room_id,
            guest_id,
            request.check_in.as_deref(),
            request.check_out.as_deref(),
            request.guests,
        ) {
            (Some(r), Some(g), Some(i), Some(o), Some(n)) => (r, g, i, o, n),
            _ => return Err(missing_fields()),
        };

        let tz = self.config.timezone;
        let window = BookingWindow::new(
            parse_instant("checkIn", check_in, tz)?,
            parse_instant("checkOut", check_out, tz)?,
            "Check-out must be after check-in",
        )?;

        let mut tx = self.repository.pool.begin().await?;

        let mut room = self.repository.rooms.lock_by_id(&mut *tx, room_id).await?;

        let overlapping = self
            .repository
            .room_bookings
            .count_overlapping_active(&mut *tx, room.id, &window)
            .await?;
        if overlapping > 0 {
            tracing::debug!("Room {} already booked between {} and {}", room.number, window.start, window.end);
            return Err(AppError::BusinessRule(
                "Room is not available for the selected dates".to_string(),
            ));
        }

        availability::check_room_capacity(guests, room.capacity)?;

        let is_member = self.guest_membership(&mut *tx, guest_id).await?;
        let final_price =
            availability::room_price(room.base_price, &window, room.vip_discount, is_member)?;

        let booking = self
            .repository
            .room_bookings
            .insert(
                &mut *tx,
                &NewRoomBooking {
                    room_id: room.id,
                    guest_id,
                    window,
                    number_of_guests: guests,
                    final_price,
                    status: BookingStatus::Confirmed,
                },
            )
            .await?;

        self.status.sync_room(&mut *tx, &mut room, Utc::now()).await?;
        tx.commit().await?;

        tracing::info!(
            "Room {} booked by guest {} for {} night(s), price {}",
            room.number,
            guest_id,
            window.nights(),
            final_price
        );

        Ok(booking)
    }

    /// Book a facility slot
    pub async fn create_facility_booking(
        &self,
        session: &SessionClaims,
        request: CreateFacilityBooking,
    ) -> AppResult<FacilityBooking> {
        let guest_id = session.acting_guest(request.guest_id)?;
        let (facility_id, guest_id, start_time, end_time) = match (
            request.facility_id,
            guest_id,
            request.start_time.as_deref(),
            request.end_time.as_deref(),
        ) {
            (Some(f), Some(g), Some(s), Some(e)) => (f, g, s, e),
            _ => return Err(missing_fields()),
        };

        let tz = self.config.timezone;
        let window = BookingWindow::new(
            parse_instant("startTime", start_time, tz)?,
            parse_instant("endTime", end_time, tz)?,
            "End time must be after start time",
        )?;

        let mut tx = self.repository.pool.begin().await?;

        let mut facility = self
            .repository
            .facilities
            .lock_by_id(&mut *tx, facility_id)
            .await?;

        if !facility.status.is_derived() {
            return Err(AppError::BusinessRule("Facility is not available".to_string()));
        }

        let day = availability::day_of_week(window.start, tz);
        let hours = self
            .repository
            .facilities
            .hours_for_day(&mut *tx, facility.id, day)
            .await?;
        availability::check_operating_hours(hours.as_ref(), &window, tz, self.config.enforce_closing_time)?;

        let is_member = self.guest_membership(&mut *tx, guest_id).await?;
        let final_price =
            availability::facility_price(facility.base_price, &window, facility.vip_discount, is_member)?;

        let overlapping = self
            .repository
            .facility_bookings
            .count_overlapping_active(&mut *tx, facility.id, &window)
            .await?;
        availability::check_facility_capacity(overlapping, facility.capacity)?;

        let booking = self
            .repository
            .facility_bookings
            .insert(
                &mut *tx,
                &NewFacilityBooking {
                    facility_id: facility.id,
                    guest_id,
                    window,
                    final_price,
                    status: BookingStatus::Confirmed,
                },
            )
            .await?;

        self.status.sync_facility(&mut *tx, &mut facility, Utc::now()).await?;
        tx.commit().await?;

        tracing::info!(
            "Facility {} booked by guest {} for {}h, price {}",
            facility.name,
            guest_id,
            window.hours(),
            final_price
        );

        Ok(booking)
    }

    /// Room bookings of a guest with their rooms, statuses refreshed.
    ///
    /// An unknown guest simply has no bookings.
    pub async fn list_room_bookings(&self, guest_id: Uuid) -> AppResult<Vec<RoomBookingDetails>> {
        let bookings = self.repository.room_bookings.list_for_guest(guest_id).await?;

        let mut ids: Vec<Uuid> = bookings.iter().map(|b| b.room_id).collect();
        ids.sort();
        ids.dedup();

        let now = Utc::now();
        let mut conn = self.repository.pool.acquire().await?;
        let mut rooms = HashMap::with_capacity(ids.len());
        for mut room in self.repository.rooms.get_many(&mut *conn, &ids).await? {
            self.status.sync_room(&mut *conn, &mut room, now).await?;
            rooms.insert(room.id, room);
        }

        Ok(bookings
            .into_iter()
            .filter_map(|booking| {
                let room = rooms.get(&booking.room_id)?.clone();
                Some(RoomBookingDetails { booking, room })
            })
            .collect())
    }

    /// Facility bookings of a guest with their facilities, statuses refreshed
    pub async fn list_facility_bookings(&self, guest_id: Uuid) -> AppResult<Vec<FacilityBookingDetails>> {
        let bookings = self.repository.facility_bookings.list_for_guest(guest_id).await?;

        let mut ids: Vec<Uuid> = bookings.iter().map(|b| b.facility_id).collect();
        ids.sort();
        ids.dedup();

        let now = Utc::now();
        let mut conn = self.repository.pool.acquire().await?;
        let mut facilities = HashMap::with_capacity(ids.len());
        for mut facility in self.repository.facilities.get_many(&mut *conn, &ids).await? {
            self.status.sync_facility(&mut *conn, &mut facility, now).await?;
            facilities.insert(facility.id, facility);
        }

        Ok(bookings
            .into_iter()
            .filter_map(|booking| {
                let facility = facilities.get(&booking.facility_id)?.clone();
                Some(FacilityBookingDetails { booking, facility })
            })
            .collect())
    }
}
