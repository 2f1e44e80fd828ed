use std::sync::Arc;

use uuid::Uuid;

use crate::database::models::{Location, LocationInput};
use crate::database::repositories::LocationStore;
use crate::error::AppError;
use crate::services::geocoding::Geocoder;

/// Orchestrates geocoding and persistence for locations.
///
/// Store writes are only issued after geocoding succeeded, so a failed lookup
/// never leaves a new or half-updated record behind.
#[derive(Clone)]
pub struct LocationService {
    geocoder: Arc<dyn Geocoder>,
    store: Arc<dyn LocationStore>,
}

impl LocationService {
    pub fn new(geocoder: Arc<dyn Geocoder>, store: Arc<dyn LocationStore>) -> Self {
        Self { geocoder, store }
    }

    pub async fn create(&self, input: LocationInput) -> Result<Location, AppError> {
        let details = input.into_details();
        let coordinate = self.geocoder.resolve(&details.geocode_query()).await?;

        let location = Location::new(Uuid::new_v4(), details, coordinate);
        self.store.insert(&location).await?;

        let stored = self.store.fetch(location.id).await?;
        log::info!("Location {} created", stored.id);

        Ok(stored)
    }

    pub async fn read(&self, raw_id: &str) -> Result<Location, AppError> {
        let id = parse_location_id(raw_id)?;

        Ok(self.store.fetch(id).await?)
    }

    /// Merge-then-replace: fields absent from `input` keep their stored value,
    /// the coordinate is always recomputed from the merged address.
    pub async fn update(&self, raw_id: &str, input: LocationInput) -> Result<Location, AppError> {
        let id = parse_location_id(raw_id)?;
        let existing = self.store.fetch(id).await?;

        let details = input.merge_onto(existing.details());
        let coordinate = self.geocoder.resolve(&details.geocode_query()).await?;

        let location = Location::new(id, details, coordinate);
        self.store.update(id, &location).await?;

        let stored = self.store.fetch(id).await?;
        log::info!("Location {} updated", stored.id);

        Ok(stored)
    }

    pub async fn delete(&self, raw_id: &str) -> Result<(), AppError> {
        let id = parse_location_id(raw_id)?;
        self.store.delete(id).await?;
        log::info!("Location {} deleted", id);

        Ok(())
    }
}

fn parse_location_id(raw_id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw_id)
        .map_err(|_| AppError::Validation(format!("'{}' is not a valid location id", raw_id)))
}
