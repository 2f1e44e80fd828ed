use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::StoreError;
use crate::database::models::Location;
use crate::database::types::LocationRow;

const LOCATION_COLUMNS: &str =
    "id, name, address, city, state, zip, lat, lng, created_at, updated_at";

/// Persistence seam for locations. `update` is a full replace of every
/// stored field.
#[async_trait]
pub trait LocationStore: Send + Sync {
    async fn insert(&self, location: &Location) -> Result<Location, StoreError>;
    async fn fetch(&self, id: Uuid) -> Result<Location, StoreError>;
    async fn update(&self, id: Uuid, location: &Location) -> Result<Location, StoreError>;
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct LocationRepository {
    pool: SqlitePool,
}

impl LocationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationStore for LocationRepository {
    async fn insert(&self, location: &Location) -> Result<Location, StoreError> {
        let now = Utc::now().naive_utc();
        let row = sqlx::query_as::<_, LocationRow>(&format!(
            r#"
            INSERT INTO locations (id, name, address, city, state, zip, lat, lng, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            RETURNING {LOCATION_COLUMNS}
            "#
        ))
        .bind(location.id)
        .bind(&location.name)
        .bind(&location.address)
        .bind(&location.city)
        .bind(&location.state)
        .bind(&location.zip)
        .bind(location.coordinate.lat)
        .bind(location.coordinate.lng)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn fetch(&self, id: Uuid) -> Result<Location, StoreError> {
        let row = sqlx::query_as::<_, LocationRow>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Location::from).ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: Uuid, location: &Location) -> Result<Location, StoreError> {
        let now = Utc::now().naive_utc();
        let row = sqlx::query_as::<_, LocationRow>(&format!(
            r#"
            UPDATE locations
            SET name = ?1, address = ?2, city = ?3, state = ?4, zip = ?5, lat = ?6, lng = ?7, updated_at = ?8
            WHERE id = ?9
            RETURNING {LOCATION_COLUMNS}
            "#
        ))
        .bind(&location.name)
        .bind(&location.address)
        .bind(&location.city)
        .bind(&location.state)
        .bind(&location.zip)
        .bind(location.coordinate.lat)
        .bind(location.coordinate.lng)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Location::from).ok_or(StoreError::NotFound(id))
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM locations WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }
}
