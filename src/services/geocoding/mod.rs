use async_trait::async_trait;
use thiserror::Error;

use crate::database::models::Coordinate;

pub mod google;

pub use google::GoogleGeocoder;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeocodeError {
    #[error("No geocoding result for address '{0}'")]
    NotFound(String),

    #[error("Geocoding provider unreachable: {0}")]
    ProviderUnreachable(String),

    #[error("Geocoding provider returned an invalid response: {0}")]
    ProviderResponseInvalid(String),

    #[error("Geocoding provider rejected the request with status {status}{}", .message.as_ref().map_or(String::new(), |m| format!(": {}", m)))]
    ProviderRejected {
        status: String,
        message: Option<String>,
    },
}

/// Resolves a percent-encoded address query to a coordinate.
///
/// Implementations issue at most one provider call per invocation and never
/// retry or cache.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve(&self, query: &str) -> Result<Coordinate, GeocodeError>;
}
