//! Resource status synchronizer
//!
//! AVAILABLE/OCCUPIED is a projection of the bookings table: a resource is
//! OCCUPIED while a CONFIRMED or CHECKED_IN booking has not ended yet.
//! MAINTENANCE and CLEANING are set by administrators and never touched here.

use chrono::{DateTime, Utc};
use sqlx::PgConnection;

use crate::{
    error::AppResult,
    models::{enums::ResourceStatus, facility::Facility, room::Room},
    repository::Repository,
};

/// Status a resource should have given whether an occupying booking exists.
///
/// Returns `None` when nothing must be written.
pub fn project_status(current: ResourceStatus, occupied: bool) -> Option<ResourceStatus> {
    if !current.is_derived() {
        return None;
    }
    let target = if occupied {
        ResourceStatus::Occupied
    } else {
        ResourceStatus::Available
    };
    (target != current).then_some(target)
}

#[derive(Clone)]
pub struct StatusService {
    repository: Repository,
}

impl StatusService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Recompute and persist the status of `room`, updating it in place
    pub async fn sync_room(&self, conn: &mut PgConnection, room: &mut Room, now: DateTime<Utc>) -> AppResult<()> {
        let latest = self
            .repository
            .room_bookings
            .latest_occupying(&mut *conn, room.id, now)
            .await?;

        if let Some(status) = project_status(room.status, latest.is_some()) {
            if self.repository.rooms.set_status(&mut *conn, room.id, status, now).await? {
                tracing::debug!("Room {} status {} -> {}", room.number, room.status, status);
                room.status = status;
            } else {
                tracing::debug!("Room {} status changed by an administrator, left as is", room.number);
            }
        }
        Ok(())
    }

    /// Recompute and persist the status of `facility`, updating it in place
    pub async fn sync_facility(
        &self,
        conn: &mut PgConnection,
        facility: &mut Facility,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        let latest = self
            .repository
            .facility_bookings
            .latest_occupying(&mut *conn, facility.id, now)
            .await?;

        if let Some(status) = project_status(facility.status, latest.is_some()) {
            let updated = self
                .repository
                .facilities
                .set_status(&mut *conn, facility.id, status, now)
                .await?;
            if updated {
                tracing::debug!("Facility {} status {} -> {}", facility.name, facility.status, status);
                facility.status = status;
            } else {
                tracing::debug!("Facility {} status changed by an administrator, left as is", facility.name);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupying_booking_marks_occupied() {
        assert_eq!(
            project_status(ResourceStatus::Available, true),
            Some(ResourceStatus::Occupied)
        );
        assert_eq!(project_status(ResourceStatus::Occupied, true), None);
    }

    #[test]
    fn test_no_booking_frees_resource() {
        assert_eq!(
            project_status(ResourceStatus::Occupied, false),
            Some(ResourceStatus::Available)
        );
        assert_eq!(project_status(ResourceStatus::Available, false), None);
    }

    #[test]
    fn test_admin_states_untouched() {
        for status in [ResourceStatus::Maintenance, ResourceStatus::Cleaning] {
            assert_eq!(project_status(status, true), None);
            assert_eq!(project_status(status, false), None);
        }
    }
}
