pub mod locations;
pub mod shared;
