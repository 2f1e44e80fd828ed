use chrono::NaiveDateTime;
use uuid::Uuid;

use super::models::{Coordinate, Location};

// Database row type that matches the exact SQLite schema
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LocationRow {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub lat: f64,
    pub lng: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            address: row.address,
            city: row.city,
            state: row.state,
            zip: row.zip,
            coordinate: Coordinate {
                lat: row.lat,
                lng: row.lng,
            },
        }
    }
}
