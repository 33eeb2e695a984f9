use crate::shared::config::config;
use crate::shared::leaflet::{self, LeafletMap, LeafletMouseEvent, Marker, TileLayerOptions};
use contracts::shared::geo::GeoPosition;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Leaflet map with a single marker.
///
/// The view follows `center`, the marker follows `marker`; clicks are
/// reported through `on_click` and never move the marker by themselves.
#[component]
pub fn MapPicker(
    /// Map centre, re-applied whenever it changes
    #[prop(into)]
    center: Signal<GeoPosition>,
    /// Marker position
    #[prop(into)]
    marker: Signal<GeoPosition>,
    /// Click handler, receives the clicked coordinates
    on_click: Callback<GeoPosition>,
) -> impl IntoView {
    let container = NodeRef::<Div>::new();

    // Leaflet objects are JS handles (not Send+Sync), store locally
    let map_handle = StoredValue::new_local(None::<LeafletMap>);
    let marker_handle = StoredValue::new_local(None::<Marker>);
    let click_handler =
        StoredValue::new_local(None::<Closure<dyn FnMut(LeafletMouseEvent)>>);

    // Build the map once the container is in the DOM
    Effect::new(move |_| {
        let Some(element) = container.get() else {
            return;
        };
        if map_handle.with_value(|m| m.is_some()) {
            return;
        }

        let map_config = &config().map;
        let map = leaflet::create_map(&element);
        map.set_view(
            &leaflet::lat_lng(center.get_untracked().as_pair()),
            map_config.zoom,
        );

        let options = TileLayerOptions {
            attribution: &map_config.attribution,
        };
        let options = serde_wasm_bindgen::to_value(&options).unwrap_or_else(|e| {
            log::warn!("Tile layer options not serialized: {}", e);
            JsValue::UNDEFINED
        });
        leaflet::tile_layer(&map_config.tile_url, &options).add_to(&map);

        let pin = leaflet::marker(&leaflet::lat_lng(marker.get_untracked().as_pair()));
        pin.add_marker_to(&map);

        let handler = Closure::<dyn FnMut(LeafletMouseEvent)>::new(
            move |event: LeafletMouseEvent| {
                let latlng = event.latlng();
                on_click.run(GeoPosition::new(latlng.lat(), latlng.lng()));
            },
        );
        map.on("click", handler.as_ref().unchecked_ref());

        click_handler.set_value(Some(handler));
        marker_handle.set_value(Some(pin));
        map_handle.set_value(Some(map));
    });

    Effect::new(move |_| {
        let position = center.get();
        map_handle.with_value(|m| {
            if let Some(map) = m {
                map.set_view(&leaflet::lat_lng(position.as_pair()), config().map.zoom);
            }
        });
    });

    Effect::new(move |_| {
        let position = marker.get();
        marker_handle.with_value(|m| {
            if let Some(pin) = m {
                pin.set_lat_lng(&leaflet::lat_lng(position.as_pair()));
            }
        });
    });

    on_cleanup(move || {
        let _ = map_handle.try_with_value(|m| {
            if let Some(map) = m {
                map.remove();
            }
        });
    });

    view! {
        <div class="map" node_ref=container></div>
    }
}
