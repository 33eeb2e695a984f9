use serde::{Deserialize, Serialize};

/// Material category accepted by a collection point (lamps, batteries, ...)
///
/// Read-only: the catalog is served by the backend and replaced wholesale
/// on every load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionItem {
    pub id: i64,
    pub title: String,
    /// URL of the item image as returned by the backend
    pub image: String,
}
