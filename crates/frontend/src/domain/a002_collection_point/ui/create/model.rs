//! Create Point - Model Layer
//!
//! API functions used by the page. The three mount-time feeds live with
//! their owners and are re-exported here so the view model has a single
//! entry point.

use crate::shared::api_utils::api_url;
use crate::shared::error::ApiError;
use contracts::domain::a002_collection_point::request::CreatePointRequest;
use gloo_net::http::Request;

pub use crate::domain::a001_collection_item::api::fetch_items;
pub use crate::shared::geolocation::current_position;
pub use crate::shared::locality::{fetch_cities, fetch_ufs};

/// Register a collection point. The response body is not read.
pub async fn create_point(payload: &CreatePointRequest) -> Result<(), ApiError> {
    let url = api_url("points");
    let response = Request::post(&url).json(payload)?.send().await?;

    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
            url,
        });
    }

    Ok(())
}
