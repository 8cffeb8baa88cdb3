use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::cities::dtos::{CreateCityDto, UpdateCityDto};
use crate::features::cities::models::{timestamp_now, City, CityPatch, Coordinate};
use crate::features::cities::repositories::CityRepository;

/// Service for city operations.
///
/// Holds no state of its own; every call goes straight to the repository.
pub struct CityService {
    repository: Arc<dyn CityRepository>,
}

impl CityService {
    pub fn new(repository: Arc<dyn CityRepository>) -> Self {
        Self { repository }
    }

    /// Get a city by id, `None` when it does not exist
    pub async fn retrieve(&self, id: &str) -> Result<Option<City>> {
        tracing::debug!("Retrieving city: {}", id);
        self.repository.get(id).await
    }

    /// List every stored city
    pub async fn retrieve_all(&self) -> Result<Vec<City>> {
        tracing::debug!("Retrieving cities");
        self.repository.list_all().await
    }

    /// Create a city from caller-supplied data.
    ///
    /// An existing city with the same id is replaced, including its
    /// `created_at`.
    pub async fn create(&self, dto: CreateCityDto) -> Result<City> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let location = well_formed(dto.location.into())?;

        if self.repository.get(&dto.id).await?.is_some() {
            tracing::warn!("City '{}' already exists and will be overwritten", dto.id);
        }

        let city = City::new(dto.id, dto.name, dto.description, location, timestamp_now());
        let city = self.repository.save(city).await?;

        tracing::info!("City created: id={}, name={}", city.id, city.name);
        Ok(city)
    }

    /// Merge the supplied fields into an existing city.
    ///
    /// Returns `None` without writing anything when the city does not exist.
    pub async fn update(&self, id: &str, dto: UpdateCityDto) -> Result<Option<City>> {
        tracing::debug!("Updating city: {} with data: {:?}", id, dto);

        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let patch = CityPatch::from(dto);
        if let Some(location) = patch.location {
            well_formed(location)?;
        }

        let updated = self
            .repository
            .modify(
                id,
                Box::new(move |current| current.merged_with(patch, timestamp_now())),
            )
            .await?;

        match &updated {
            Some(city) => tracing::info!("City updated: id={}", city.id),
            None => tracing::debug!("City '{}' not found, nothing updated", id),
        }

        Ok(updated)
    }

    /// Delete a city; deleting a missing id succeeds
    pub async fn delete(&self, id: &str) -> Result<()> {
        tracing::debug!("Deleting city with id: {}", id);
        self.repository.delete_by_id(id).await?;

        tracing::info!("City deleted: id={}", id);
        Ok(())
    }
}

fn well_formed(location: Coordinate) -> Result<Coordinate> {
    if location.is_well_formed() {
        Ok(location)
    } else {
        Err(AppError::Validation(format!(
            "location: ({}, {}) is not a valid coordinate",
            location.longitude, location.latitude
        )))
    }
}
