//! Guest profiles and memberships

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::guest::{GuestProfile, Membership, UpsertMembership},
    repository::Repository,
};

const DEFAULT_TIER: &str = "VIP";

#[derive(Clone)]
pub struct GuestsService {
    repository: Repository,
}

impl GuestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get_profile(&self, id: Uuid) -> AppResult<GuestProfile> {
        let guest = self.repository.guests.get_by_id(id).await?;
        let membership = self.repository.guests.get_membership(id).await?;
        Ok(GuestProfile { guest, membership })
    }

    /// Grant or change a membership
    pub async fn upsert_membership(&self, guest_id: Uuid, request: UpsertMembership) -> AppResult<Membership> {
        self.repository.guests.get_by_id(guest_id).await?;
        let tier = request.tier.as_deref().unwrap_or(DEFAULT_TIER);
        let membership = self
            .repository
            .guests
            .upsert_membership(guest_id, tier, request.expires_at)
            .await?;

        if !membership.is_active_at(Utc::now()) {
            tracing::warn!("Membership of guest {} is already expired", guest_id);
        }
        Ok(membership)
    }

    pub async fn revoke_membership(&self, guest_id: Uuid) -> AppResult<()> {
        self.repository.guests.get_by_id(guest_id).await?;
        self.repository.guests.delete_membership(guest_id).await
    }
}
