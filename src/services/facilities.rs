//! Facility inventory service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::facility::{
        validate_operating_hours, CreateFacility, FacilityDetails, FacilityWithHours, UpdateFacility,
    },
    repository::Repository,
    services::availability::validate_rates,
};

#[derive(Clone)]
pub struct FacilitiesService {
    repository: Repository,
}

impl FacilitiesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All facilities with their operating hours
    pub async fn list(&self) -> AppResult<Vec<FacilityWithHours>> {
        let facilities = self.repository.facilities.list().await?;
        let ids: Vec<Uuid> = facilities.iter().map(|f| f.id).collect();
        let mut hours = self.repository.facilities.hours_for(&ids).await?;

        Ok(facilities
            .into_iter()
            .map(|facility| FacilityWithHours {
                operating_hours: hours.remove(&facility.id).unwrap_or_default(),
                facility,
            })
            .collect())
    }

    /// Facility with operating hours and bookings
    pub async fn get(&self, id: Uuid) -> AppResult<FacilityDetails> {
        let facility = self.repository.facilities.get_by_id(id).await?;
        let operating_hours = self
            .repository
            .facilities
            .hours_for(&[id])
            .await?
            .remove(&id)
            .unwrap_or_default();
        let bookings = self.repository.facility_bookings.list_for_facility(id).await?;

        Ok(FacilityDetails {
            facility,
            operating_hours,
            bookings,
        })
    }

    /// Create a facility and its operating hours in the first hotel
    pub async fn create(&self, facility: CreateFacility) -> AppResult<FacilityWithHours> {
        facility.validate()?;
        validate_rates(Some(facility.base_price), facility.vip_discount)?;
        validate_operating_hours(&facility.operating_hours)?;

        let mut tx = self.repository.pool.begin().await?;
        let hotel = self.repository.hotels.first_or_create_default(&mut *tx).await?;
        let created = self
            .repository
            .facilities
            .create(&mut *tx, hotel.id, &facility)
            .await?;
        let operating_hours = self
            .repository
            .facilities
            .replace_hours(&mut *tx, created.id, &facility.operating_hours)
            .await?;
        tx.commit().await?;

        tracing::info!("Facility '{}' created in hotel '{}'", created.name, hotel.name);
        Ok(FacilityWithHours {
            facility: created,
            operating_hours,
        })
    }

    /// Update a facility; a provided hours list replaces the existing set
    pub async fn update(&self, id: Uuid, facility: UpdateFacility) -> AppResult<FacilityWithHours> {
        facility.validate()?;
        validate_rates(facility.base_price, facility.vip_discount.flatten())?;
        if let Some(ref hours) = facility.operating_hours {
            validate_operating_hours(hours)?;
        }

        let mut tx = self.repository.pool.begin().await?;
        let updated = self.repository.facilities.update(&mut *tx, id, &facility).await?;
        if let Some(ref hours) = facility.operating_hours {
            self.repository.facilities.replace_hours(&mut *tx, id, hours).await?;
        }
        tx.commit().await?;

        let operating_hours = self
            .repository
            .facilities
            .hours_for(&[id])
            .await?
            .remove(&id)
            .unwrap_or_default();

        Ok(FacilityWithHours {
            facility: updated,
            operating_hours,
        })
    }

    /// Delete a facility unless it still has active bookings
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut tx = self.repository.pool.begin().await?;

        let facility = self.repository.facilities.lock_by_id(&mut *tx, id).await?;
        let active = self
            .repository
            .facility_bookings
            .count_active_for_facility(&mut *tx, id)
            .await?;
        if active > 0 {
            return Err(AppError::BusinessRule(
                "Cannot delete facility with active bookings".to_string(),
            ));
        }

        self.repository.facilities.delete(&mut *tx, id).await?;
        tx.commit().await?;

        tracing::info!("Facility '{}' deleted", facility.name);
        Ok(())
    }
}
