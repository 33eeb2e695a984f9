//! One-shot device position query.

use super::error::ApiError;
use contracts::shared::geo::GeoPosition;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Ask the browser for the current position.
///
/// Resolves once; permission denial, missing hardware and insecure
/// contexts all come back as `ApiError::Unavailable`.
pub async fn current_position() -> Result<GeoPosition, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Unavailable("no window".into()))?;
    let geolocation = window
        .navigator()
        .geolocation()
        .map_err(|e| ApiError::Unavailable(format!("{e:?}")))?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
        {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    let position = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Unavailable(describe_rejection(&e)))?;

    // GeolocationPosition.coords.{latitude,longitude}
    let coords = js_sys::Reflect::get(&position, &JsValue::from_str("coords"))
        .map_err(|e| ApiError::Decode(format!("{e:?}")))?;

    position_from_parts(
        read_number(&coords, "latitude"),
        read_number(&coords, "longitude"),
    )
}

fn read_number(object: &JsValue, key: &str) -> Option<f64> {
    js_sys::Reflect::get(object, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
}

/// Both coordinates must be present and finite
fn position_from_parts(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<GeoPosition, ApiError> {
    match (latitude, longitude) {
        (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => {
            Ok(GeoPosition::new(lat, lng))
        }
        _ => Err(ApiError::Decode(format!(
            "position without coordinates: latitude={:?}, longitude={:?}",
            latitude, longitude
        ))),
    }
}

/// GeolocationPositionError carries a `message`; anything else is debug-printed
fn describe_rejection(e: &JsValue) -> String {
    js_sys::Reflect::get(e, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{e:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_from_parts() {
        assert_eq!(
            position_from_parts(Some(-23.5), Some(-46.6)),
            Ok(GeoPosition::new(-23.5, -46.6))
        );
    }

    #[test]
    fn test_missing_coordinate_is_rejected() {
        assert!(matches!(
            position_from_parts(Some(-23.5), None),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            position_from_parts(None, None),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_non_finite_coordinate_is_rejected() {
        assert!(position_from_parts(Some(f64::NAN), Some(-46.6)).is_err());
    }
}
