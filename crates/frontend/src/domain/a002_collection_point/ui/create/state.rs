//! View state of the create-point page.
//!
//! Plain data plus pure update methods; the view model owns one instance
//! inside a signal and routes every event and fetch result through here.

use crate::shared::error::ApiError;
use contracts::domain::a001_collection_item::aggregate::CollectionItem;
use contracts::domain::a002_collection_point::request::CreatePointRequest;
use contracts::shared::geo::GeoPosition;

/// Value of the placeholder option in the UF and city selects
pub const NO_SELECTION: &str = "0";

/// Map a select value to a selection; the placeholder and an empty value
/// both mean "nothing chosen"
pub fn parse_selection(value: &str) -> Option<String> {
    if value.is_empty() || value == NO_SELECTION {
        None
    } else {
        Some(value.to_string())
    }
}

/// Contact fields of the form, addressed by input `name`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Whatsapp,
}

impl ContactField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "whatsapp" => Some(Self::Whatsapp),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

/// City list fetch issued for one UF selection.
///
/// `generation` identifies the selection that produced it; a result is
/// applied only while that selection is still the current one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityRequest {
    pub uf: String,
    pub generation: u64,
}

#[derive(Clone, Debug, Default)]
pub struct CreatePointState {
    pub items: Vec<CollectionItem>,
    pub ufs: Vec<String>,
    pub cities: Vec<String>,
    pub selected_uf: Option<String>,
    pub selected_city: Option<String>,
    /// Device-reported position, map centre
    pub initial_position: GeoPosition,
    /// Last clicked position, marker
    pub selected_position: GeoPosition,
    /// Selection order is kept and sent as is
    pub selected_items: Vec<i64>,
    pub form: ContactForm,
    city_generation: u64,
}

impl CreatePointState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Data feeds
    // ------------------------------------------------------------------

    pub fn apply_initial_position(&mut self, result: Result<GeoPosition, ApiError>) {
        match result {
            Ok(position) => self.initial_position = position,
            Err(e) => log::warn!("Geolocation unavailable, keeping default position: {}", e),
        }
    }

    pub fn apply_items(&mut self, result: Result<Vec<CollectionItem>, ApiError>) {
        match result {
            Ok(items) => self.items = items,
            Err(e) => log::warn!("Failed to load collection items: {}", e),
        }
    }

    pub fn apply_ufs(&mut self, result: Result<Vec<String>, ApiError>) {
        match result {
            Ok(ufs) => self.ufs = ufs,
            Err(e) => log::warn!("Failed to load states: {}", e),
        }
    }

    /// Apply a city list response. Returns `true` if the list was replaced.
    pub fn apply_cities(
        &mut self,
        request: &CityRequest,
        result: Result<Vec<String>, ApiError>,
    ) -> bool {
        if request.generation != self.city_generation {
            log::debug!(
                "Discarding stale city list for {} (generation {} != {})",
                request.uf,
                request.generation,
                self.city_generation
            );
            return false;
        }

        match result {
            Ok(cities) => {
                self.cities = cities;
                true
            }
            Err(e) => {
                log::warn!("Failed to load cities of {}: {}", request.uf, e);
                false
            }
        }
    }

    // ------------------------------------------------------------------
    // User interaction
    // ------------------------------------------------------------------

    /// Change the UF selection.
    ///
    /// Returns the city fetch to issue: one for every change to a real UF,
    /// none for the placeholder or an unchanged value. Any change makes
    /// in-flight city fetches stale.
    pub fn select_uf(&mut self, selection: Option<String>) -> Option<CityRequest> {
        if selection == self.selected_uf {
            return None;
        }

        self.city_generation += 1;
        self.selected_uf = selection;

        self.selected_uf.clone().map(|uf| CityRequest {
            uf,
            generation: self.city_generation,
        })
    }

    pub fn select_city(&mut self, selection: Option<String>) {
        self.selected_city = selection;
    }

    pub fn click_map(&mut self, position: GeoPosition) {
        self.selected_position = position;
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.form.name = value,
            ContactField::Email => self.form.email = value,
            ContactField::Whatsapp => self.form.whatsapp = value,
        }
    }

    /// Add `id` if absent, remove it if present
    pub fn toggle_item(&mut self, id: i64) {
        if let Some(pos) = self.selected_items.iter().position(|&i| i == id) {
            self.selected_items.remove(pos);
        } else {
            self.selected_items.push(id);
        }
    }

    pub fn is_item_selected(&self, id: i64) -> bool {
        self.selected_items.contains(&id)
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Request body for the create-point call. No validation: empty
    /// fields are sent as they are.
    pub fn submission_payload(&self) -> CreatePointRequest {
        CreatePointRequest {
            name: self.form.name.clone(),
            email: self.form.email.clone(),
            whatsapp: self.form.whatsapp.clone(),
            uf: self.selected_uf.clone().unwrap_or_default(),
            city: self.selected_city.clone().unwrap_or_default(),
            lat: self.selected_position.latitude,
            long: self.selected_position.longitude,
            items: self.selected_items.clone(),
        }
    }
}
