//! Domain types shared across the workspace.

use serde::{Deserialize, Serialize};

/// A place name resolved to coordinates by the geocoder.
///
/// Produced once per fresh query and owned by the search session for the
/// lifetime of that session (including any radius-widening continuations).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

impl Location {
    /// `true` when both coordinates are finite numbers.
    #[must_use]
    pub fn has_valid_coordinates(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// A named point of interest returned by the POI provider.
///
/// `name` is never empty: unnamed features are discarded during
/// normalization. `distance_km` is filled in by the search controller
/// relative to the session location; `None` means the distance could not be
/// computed for this record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    /// Label taken from the feature's most significant tag
    /// (amenity, tourism, historic, shop or leisure), or `"unknown"`.
    pub category: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: Option<f64>,
}
