pub mod geo;
pub mod locality;
