use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A resolved point on the map. Only ever produced by a geocoder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub coordinate: Coordinate,
}

impl Location {
    pub fn new(id: Uuid, details: LocationDetails, coordinate: Coordinate) -> Self {
        Self {
            id,
            name: details.name,
            address: details.address,
            city: details.city,
            state: details.state,
            zip: details.zip,
            coordinate,
        }
    }

    pub fn details(&self) -> LocationDetails {
        LocationDetails {
            name: self.name.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip: self.zip.clone(),
        }
    }
}

/// Client supplied fields. Every field is optional on the wire; on update an
/// absent field keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationInput {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

impl LocationInput {
    /// Fields for a brand new location. Missing values become empty strings.
    pub fn into_details(self) -> LocationDetails {
        self.merge_onto(LocationDetails::default())
    }

    /// Overlay the fields present in this input onto `base`.
    pub fn merge_onto(self, base: LocationDetails) -> LocationDetails {
        LocationDetails {
            name: self.name.unwrap_or(base.name),
            address: self.address.unwrap_or(base.address),
            city: self.city.unwrap_or(base.city),
            state: self.state.unwrap_or(base.state),
            zip: self.zip.unwrap_or(base.zip),
        }
    }
}

/// The user-editable part of a [`Location`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationDetails {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl LocationDetails {
    /// Geocoding query for these details: `address city state zip` joined by
    /// single spaces and percent-encoded as a whole.
    pub fn geocode_query(&self) -> String {
        let joined = [
            self.address.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.zip.as_str(),
        ]
        .join(" ");

        urlencoding::encode(&joined).into_owned()
    }
}
