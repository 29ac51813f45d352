//! Overpass POI search: named features around a coordinate.
//!
//! Builds a category-specific tag filter over a generic `nwr(around:...)`
//! query, then normalizes the raw elements into [`PointOfInterest`] records:
//! unnamed features are discarded, the category label follows a fixed tag
//! precedence, and addresses are synthesized from the `addr:*` tags.

use std::collections::BTreeMap;

use serde::Deserialize;
use vnpoi_core::PointOfInterest;

use crate::client::OsmClient;
use crate::error::OsmError;

/// Maximum number of POIs returned per search, in provider order.
pub const MAX_RESULTS: usize = 5;

/// Tag precedence for the category label of a kept result. The first tag
/// present wins; a feature with none of these is labeled `"unknown"`.
const CATEGORY_TAG_PRECEDENCE: [&str; 5] = ["amenity", "tourism", "historic", "shop", "leisure"];

/// Fallback address when a feature carries no usable `addr:*` tags.
const NO_ADDRESS: &str = "no address available";

/// Category-to-filter lookup. Unknown categories map to `None`, which
/// [`OsmClient::find_pois`] turns into an empty result rather than an error —
/// the search controller relies on that to short-circuit gracefully.
fn tag_filters(category: &str) -> Option<&'static [&'static str]> {
    match category {
        "cafe" => Some(&[r#"["amenity"="cafe"]"#]),
        "restaurant" => Some(&[r#"["amenity"~"restaurant|fast_food"]"#]),
        "tourism" => Some(&[r#"["tourism"~"attraction|museum|viewpoint"]"#]),
        "all" => Some(&[
            r#"["amenity"~"restaurant|cafe|bar|fast_food"]"#,
            r#"["tourism"~"attraction|museum|viewpoint"]"#,
            r#"["historic"]"#,
            r#"["shop"~"mall|market"]"#,
            r#"["leisure"~"park|garden"]"#,
        ]),
        _ => None,
    }
}

/// Renders the Overpass QL body for one search. A single filter produces one
/// `nwr` clause; several filters are wrapped in a union block.
fn build_query(radius_m: u32, latitude: f64, longitude: f64, filters: &[&str]) -> String {
    let clauses = if let [filter] = filters {
        format!("nwr(around:{radius_m},{latitude},{longitude}){filter};")
    } else {
        let mut block = String::from("(\n");
        for filter in filters {
            block.push_str(&format!(
                "  nwr(around:{radius_m},{latitude},{longitude}){filter};\n"
            ));
        }
        block.push_str(");");
        block
    };
    format!("[out:json][timeout:60];\n{clauses}\nout center meta tags;\n")
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

/// A raw way/node/relation feature. Nodes carry their own `lat`/`lon`; ways
/// and relations carry a computed `center` instead.
#[derive(Debug, Deserialize)]
struct OverpassElement {
    lat: Option<f64>,
    lon: Option<f64>,
    center: Option<OverpassCenter>,
    #[serde(default)]
    tags: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct OverpassCenter {
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Normalizes one raw element into a [`PointOfInterest`], or discards it.
///
/// Discarded: features without a non-blank `name` tag (not useful to the end
/// user) and features with neither own coordinates nor a centroid.
fn normalize_element(element: OverpassElement) -> Option<PointOfInterest> {
    let name = element.tags.get("name")?.trim();
    if name.is_empty() {
        return None;
    }

    let category = CATEGORY_TAG_PRECEDENCE
        .iter()
        .find_map(|tag| element.tags.get(*tag))
        .cloned()
        .unwrap_or_else(|| "unknown".to_owned());

    let (latitude, longitude) = match (element.lat, element.lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            let center = element.center.as_ref()?;
            (center.lat?, center.lon?)
        }
    };

    Some(PointOfInterest {
        name: name.to_owned(),
        category,
        address: synthesize_address(&element.tags),
        latitude,
        longitude,
        distance_km: None,
    })
}

/// Joins house number + street, then suburb/district, then city, with comma
/// separation. Falls back to a fixed placeholder when nothing is available.
fn synthesize_address(tags: &BTreeMap<String, String>) -> String {
    let get = |key: &str| tags.get(key).map(String::as_str).unwrap_or_default();

    let house_number = get("addr:housenumber");
    let street = get("addr:street");
    let suburb = tags
        .get("addr:suburb")
        .or_else(|| tags.get("addr:district"))
        .map(String::as_str)
        .unwrap_or_default();
    let city = get("addr:city");

    let mut address = format!("{house_number} {street}").trim().to_owned();
    if !suburb.is_empty() {
        if !address.is_empty() {
            address.push_str(", ");
        }
        address.push_str(suburb);
    }
    if !city.is_empty() {
        if !address.is_empty() {
            address.push_str(", ");
        }
        address.push_str(city);
    }
    if address.is_empty() {
        address = NO_ADDRESS.to_owned();
    }
    address
}

impl OsmClient {
    /// Searches for named POIs of `category` within `radius_m` meters of a
    /// coordinate. Returns at most [`MAX_RESULTS`] records in provider order;
    /// distance annotation and ordering are the caller's concern.
    ///
    /// An unrecognized category yields `Ok(vec![])` without issuing a
    /// request.
    ///
    /// # Errors
    ///
    /// - [`OsmError::UnexpectedStatus`] — non-2xx response.
    /// - [`OsmError::Http`] — transport failure.
    /// - [`OsmError::Deserialize`] — the body is not an Overpass JSON result.
    pub async fn find_pois(
        &self,
        latitude: f64,
        longitude: f64,
        radius_m: u32,
        category: &str,
    ) -> Result<Vec<PointOfInterest>, OsmError> {
        let Some(filters) = tag_filters(category) else {
            tracing::debug!(category, "unrecognized category, returning no results");
            return Ok(Vec::new());
        };

        self.pacer.pace().await;

        let query = build_query(radius_m, latitude, longitude, filters);
        let response = self
            .client
            .post(&self.overpass_url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OsmError::UnexpectedStatus {
                service: "overpass",
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("unknown").to_owned(),
            });
        }

        let body = response.text().await?;
        let parsed: OverpassResponse =
            serde_json::from_str(&body).map_err(|e| OsmError::Deserialize {
                context: format!("overpass response for category \"{category}\""),
                source: e,
            })?;

        let total = parsed.elements.len();
        let pois: Vec<PointOfInterest> = parsed
            .elements
            .into_iter()
            .filter_map(normalize_element)
            .take(MAX_RESULTS)
            .collect();
        tracing::debug!(
            category,
            radius_m,
            raw = total,
            kept = pois.len(),
            "overpass search finished"
        );
        Ok(pois)
    }
}

#[cfg(test)]
#[path = "overpass_test.rs"]
mod tests;
