//! Nominatim geocoding: free-text place name to coordinates.

use serde::Deserialize;
use vnpoi_core::Location;

use crate::client::OsmClient;
use crate::error::OsmError;

/// Two-letter country the search is constrained to.
const COUNTRY_CODES: &str = "vn";

/// One entry of a Nominatim `jsonv2` search response. Coordinates arrive as
/// strings and may be absent or malformed, so they are parsed explicitly.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: Option<String>,
    lon: Option<String>,
    #[serde(default)]
    display_name: String,
}

impl OsmClient {
    /// Resolves a free-text place name to the single best-matching
    /// [`Location`] inside Vietnam.
    ///
    /// Issues exactly one lookup constrained to the top match. Callers must
    /// not pass blank input; the search controller rejects empty text before
    /// invoking the resolver.
    ///
    /// # Errors
    ///
    /// - [`OsmError::NotFound`] — the service returned no match.
    /// - [`OsmError::InvalidCoordinates`] — the top match has missing or
    ///   non-numeric coordinates.
    /// - [`OsmError::UnexpectedStatus`] — non-2xx response.
    /// - [`OsmError::Http`] — transport failure.
    /// - [`OsmError::Deserialize`] — the body is not a JSON array of places.
    pub async fn geocode(&self, query: &str) -> Result<Location, OsmError> {
        self.pacer.pace().await;

        let url = format!("{}/search", self.nominatim_base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("format", "jsonv2"),
                ("limit", "1"),
                ("addressdetails", "1"),
                ("countrycodes", COUNTRY_CODES),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OsmError::UnexpectedStatus {
                service: "nominatim",
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("unknown").to_owned(),
            });
        }

        let body = response.text().await?;
        let places: Vec<NominatimPlace> =
            serde_json::from_str(&body).map_err(|e| OsmError::Deserialize {
                context: format!("nominatim search response for \"{query}\""),
                source: e,
            })?;

        let Some(place) = places.into_iter().next() else {
            return Err(OsmError::NotFound {
                query: query.to_owned(),
            });
        };

        let parse_coordinate = |raw: &Option<String>| {
            raw.as_deref()
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|v| v.is_finite())
        };
        let (Some(latitude), Some(longitude)) =
            (parse_coordinate(&place.lat), parse_coordinate(&place.lon))
        else {
            return Err(OsmError::InvalidCoordinates {
                context: format!("nominatim result for \"{query}\""),
            });
        };

        tracing::debug!(query, latitude, longitude, "geocoded place name");
        Ok(Location {
            latitude,
            longitude,
            display_name: place.display_name,
        })
    }
}
