pub mod api_utils;
pub mod components;
pub mod config;
pub mod error;
pub mod geolocation;
pub mod icons;
pub mod leaflet;
pub mod locality;
