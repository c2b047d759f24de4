//! Dashboard statistics

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    config::BookingConfig,
    error::AppResult,
    models::enums::{BookingStatus, ResourceStatus},
    repository::Repository,
};

/// Inventory and booking counters
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_rooms: i64,
    pub total_facilities: i64,
    pub available_rooms: i64,
    pub available_facilities: i64,
    pub total_bookings: i64,
    /// Room bookings currently checked in
    pub active_guests: i64,
    /// Confirmed room bookings arriving today or later
    pub pending_check_ins: i64,
    pub total_facility_bookings: i64,
}

/// Midnight of the current day in `tz`
pub fn start_of_day(now: DateTime<Utc>, tz: Tz) -> DateTime<Utc> {
    let local_date = now.with_timezone(&tz).date_naive();
    local_date
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| tz.from_local_datetime(&midnight).earliest())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(now)
}

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
    config: BookingConfig,
}

impl StatsService {
    pub fn new(repository: Repository, config: BookingConfig) -> Self {
        Self { repository, config }
    }

    pub async fn dashboard(&self) -> AppResult<DashboardStats> {
        let today = start_of_day(Utc::now(), self.config.timezone);

        Ok(DashboardStats {
            total_rooms: self.repository.rooms.count(None).await?,
            total_facilities: self.repository.facilities.count(None).await?,
            available_rooms: self
                .repository
                .rooms
                .count(Some(ResourceStatus::Available))
                .await?,
            available_facilities: self
                .repository
                .facilities
                .count(Some(ResourceStatus::Available))
                .await?,
            total_bookings: self.repository.room_bookings.count(None).await?,
            active_guests: self
                .repository
                .room_bookings
                .count(Some(BookingStatus::CheckedIn))
                .await?,
            pending_check_ins: self.repository.room_bookings.count_pending_check_ins(today).await?,
            total_facility_bookings: self.repository.facility_bookings.count().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_of_day_in_timezone() {
        // 23:30 UTC on Jan 1st is already Jan 2nd in Paris
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 23, 30, 0).unwrap();
        assert_eq!(
            start_of_day(now, chrono_tz::UTC),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            start_of_day(now, chrono_tz::Europe::Paris),
            Utc.with_ymd_and_hms(2024, 1, 1, 23, 0, 0).unwrap()
        );
    }
}
