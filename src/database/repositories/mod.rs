pub mod location;

pub use location::{LocationRepository, LocationStore};
