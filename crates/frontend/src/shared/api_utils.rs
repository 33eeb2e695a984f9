//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use super::config::config;
use super::error::ApiError;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3333"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    build_base(&protocol, &hostname, config().api.port)
}

fn build_base(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a resource path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("items");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Join a base URL and a relative path with exactly one slash between them
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Check the status and decode a JSON body
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
            url: response.url(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_base() {
        assert_eq!(
            build_base("http:", "localhost", 3333),
            "http://localhost:3333"
        );
        assert_eq!(
            build_base("https:", "example.com", 8443),
            "https://example.com:8443"
        );
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:3333", "items"),
            "http://localhost:3333/items"
        );
        assert_eq!(
            join_url("http://localhost:3333/", "/points"),
            "http://localhost:3333/points"
        );
    }
}
