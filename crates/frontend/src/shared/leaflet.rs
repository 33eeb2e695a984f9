//! Minimal bindings to the Leaflet global `L` (loaded by index.html).
//!
//! Only what the map picker uses: a map with one tile layer, one marker
//! and a click listener.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type LeafletMap;

    #[derive(Debug, Clone)]
    pub type TileLayer;

    #[derive(Debug, Clone)]
    pub type Marker;

    #[derive(Debug, Clone)]
    pub type LatLng;

    #[derive(Debug, Clone)]
    pub type LeafletMouseEvent;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn create_map(container: &web_sys::HtmlElement) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method)]
    pub fn on(this: &LeafletMap, event: &str, handler: &js_sys::Function) -> LeafletMap;

    #[wasm_bindgen(method)]
    pub fn remove(this: &LeafletMap) -> LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(position: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_marker_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = setLatLng)]
    pub fn set_lat_lng(this: &Marker, position: &JsValue) -> Marker;

    #[wasm_bindgen(method, getter)]
    pub fn latlng(this: &LeafletMouseEvent) -> LatLng;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &LatLng) -> f64;
}

/// Options object for `L.tileLayer`
#[derive(serde::Serialize)]
pub struct TileLayerOptions<'a> {
    pub attribution: &'a str,
}

/// `[lat, lng]` as a JS array
pub fn lat_lng(pair: [f64; 2]) -> JsValue {
    let array = js_sys::Array::new();
    array.push(&JsValue::from_f64(pair[0]));
    array.push(&JsValue::from_f64(pair[1]));
    array.into()
}
