//! Geocoder backed by the Google Maps geocoding JSON API (or any endpoint
//! speaking the same response format).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{GeocodeError, Geocoder};
use crate::database::models::Coordinate;

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<GeocodeCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeCandidate {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub formatted_address: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
    #[serde(default)]
    pub location_type: String,
    #[serde(default)]
    pub viewport: Option<Viewport>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Viewport {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<LatLng> for Coordinate {
    fn from(value: LatLng) -> Self {
        Coordinate {
            lat: value.lat,
            lng: value.lng,
        }
    }
}

impl GeocodeResponse {
    /// Coordinate of the first candidate. Only that candidate is consumed.
    pub fn first_coordinate(&self, query: &str) -> Result<Coordinate, GeocodeError> {
        if let Some(candidate) = self.results.first() {
            return Ok(candidate.geometry.location.into());
        }

        match self.status.as_str() {
            STATUS_OK | STATUS_ZERO_RESULTS => Err(GeocodeError::NotFound(query.to_string())),
            status => Err(GeocodeError::ProviderRejected {
                status: status.to_string(),
                message: self.error_message.clone(),
            }),
        }
    }
}

pub struct GoogleGeocoder {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GoogleGeocoder {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GeocodeError::ProviderUnreachable(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        })
    }

    /// The query is expected to be percent-encoded already.
    fn request_url(&self, query: &str) -> String {
        match &self.api_key {
            Some(key) => format!(
                "{}?address={}&key={}",
                self.endpoint,
                query,
                urlencoding::encode(key)
            ),
            None => format!("{}?address={}", self.endpoint, query),
        }
    }
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    async fn resolve(&self, query: &str) -> Result<Coordinate, GeocodeError> {
        log::debug!("Geocoding address query '{}'", query);

        let response = self
            .client
            .get(self.request_url(query))
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| GeocodeError::ProviderUnreachable(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| GeocodeError::ProviderUnreachable(e.to_string()))?;

        let parsed: GeocodeResponse = serde_json::from_str(&body)
            .map_err(|e| GeocodeError::ProviderResponseInvalid(e.to_string()))?;

        parsed.first_coordinate(query)
    }
}
