pub mod geocoding;
pub mod location;

pub use geocoding::{GeocodeError, Geocoder, GoogleGeocoder};
pub use location::LocationService;
