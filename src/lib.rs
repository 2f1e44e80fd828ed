pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;

pub use config::Config;
pub use database::repositories::{LocationRepository, LocationStore};
pub use error::AppError;
pub use services::{Geocoder, GoogleGeocoder, LocationService};
