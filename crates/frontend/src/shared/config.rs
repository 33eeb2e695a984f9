//! Frontend configuration
//!
//! The WASM bundle has no file system, so the configuration is a TOML
//! document embedded at build time and parsed once on first access.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub locality: LocalityConfig,
    pub map: MapConfig,
}

/// Backend API location. The host is taken from the current page,
/// only the port is configured.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub port: u16,
}

/// Government locality lookup service (states and cities)
#[derive(Debug, Deserialize, Clone)]
pub struct LocalityConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MapConfig {
    pub tile_url: String,
    pub attribution: String,
    pub zoom: f64,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3333

[locality]
base_url = "https://servicodados.ibge.gov.br/api/v1/localidades"

[map]
tile_url = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
attribution = '&copy; <a href="http://osm.org/copyright">OpenStreetMap</a> contributors'
zoom = 15.0
"#;

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match parse_config(DEFAULT_CONFIG) {
    Ok(config) => config,
    // checked by test_default_config_loads
    Err(e) => panic!("embedded config is invalid: {e}"),
});

pub fn parse_config(source: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(source)
}

/// Global configuration
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.port, 3333);
        assert_eq!(
            config.locality.base_url,
            "https://servicodados.ibge.gov.br/api/v1/localidades"
        );
        assert_eq!(config.map.zoom, 15.0);
        assert!(config.map.tile_url.contains("{z}/{x}/{y}"));
        assert!(config.map.attribution.contains("OpenStreetMap"));
    }

    #[test]
    fn test_missing_section_is_rejected() {
        let config = parse_config("[api]\nport = 80\n");
        assert!(config.is_err());
    }

    #[test]
    fn test_global_config_is_default() {
        assert_eq!(config().api.port, 3333);
    }
}
