#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tempfile::TempDir;

use geoloc::database::init_database;
use geoloc::database::models::Coordinate;
use geoloc::services::GeocodeError;
use geoloc::{Geocoder, LocationRepository, LocationService};

pub const SPRINGFIELD_QUERY: &str = "1%20Main%20St%20Springfield%20IL%2062701";
pub const SPRINGFIELD_NEW_ZIP_QUERY: &str = "1%20Main%20St%20Springfield%20IL%2062702";

pub const SPRINGFIELD: Coordinate = Coordinate {
    lat: 39.78,
    lng: -89.65,
};
pub const SPRINGFIELD_NEW_ZIP: Coordinate = Coordinate {
    lat: 39.80,
    lng: -89.64,
};

// Test database wrapper
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let database_url = format!("sqlite:{}/test.db", temp_dir.path().display());
        let pool = init_database(&database_url).await?;

        Ok(TestDb {
            pool,
            _temp_dir: temp_dir,
        })
    }
}

/// Geocoder answering from a fixed table of encoded queries. Unknown queries
/// resolve to `GeocodeError::NotFound`, like a provider `ZERO_RESULTS`.
#[derive(Default)]
pub struct StubGeocoder {
    answers: Mutex<HashMap<String, Result<Coordinate, GeocodeError>>>,
    queries: Mutex<Vec<String>>,
}

impl StubGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn springfield() -> Self {
        Self::new()
            .with(SPRINGFIELD_QUERY, SPRINGFIELD)
            .with(SPRINGFIELD_NEW_ZIP_QUERY, SPRINGFIELD_NEW_ZIP)
    }

    pub fn with(self, query: &str, coordinate: Coordinate) -> Self {
        self.answers
            .lock()
            .unwrap()
            .insert(query.to_string(), Ok(coordinate));
        self
    }

    pub fn failing(self, query: &str, error: GeocodeError) -> Self {
        self.answers
            .lock()
            .unwrap()
            .insert(query.to_string(), Err(error));
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn resolve(&self, query: &str) -> Result<Coordinate, GeocodeError> {
        self.queries.lock().unwrap().push(query.to_string());

        self.answers
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_else(|| Err(GeocodeError::NotFound(query.to_string())))
    }
}

pub struct TestContext {
    pub db: TestDb,
    pub geocoder: Arc<StubGeocoder>,
    pub service: LocationService,
}

impl TestContext {
    pub async fn new(geocoder: StubGeocoder) -> Result<Self> {
        let db = TestDb::new().await?;
        let geocoder = Arc::new(geocoder);
        let service = LocationService::new(
            geocoder.clone(),
            Arc::new(LocationRepository::new(db.pool.clone())),
        );

        Ok(TestContext {
            db,
            geocoder,
            service,
        })
    }
}

// Test assertion helpers
pub struct TestAssertions;

impl TestAssertions {
    pub async fn assert_record_count(pool: &SqlitePool, table: &str, expected_count: i64) {
        let query = format!("SELECT COUNT(*) as count FROM {}", table);
        let result = sqlx::query_scalar::<_, i64>(&query)
            .fetch_one(pool)
            .await
            .expect("Failed to count records");

        assert_eq!(
            result, expected_count,
            "Expected {} records in {} table, but found {}",
            expected_count, table, result
        );
    }
}

pub fn springfield_input() -> geoloc::database::models::LocationInput {
    geoloc::database::models::LocationInput {
        name: Some("Home".to_string()),
        address: Some("1 Main St".to_string()),
        city: Some("Springfield".to_string()),
        state: Some("IL".to_string()),
        zip: Some("62701".to_string()),
    }
}
