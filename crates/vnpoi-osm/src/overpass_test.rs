use std::collections::BTreeMap;

use super::*;

fn tags(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

fn element(
    lat: Option<f64>,
    lon: Option<f64>,
    center: Option<(f64, f64)>,
    tag_pairs: &[(&str, &str)],
) -> OverpassElement {
    OverpassElement {
        lat,
        lon,
        center: center.map(|(lat, lon)| OverpassCenter {
            lat: Some(lat),
            lon: Some(lon),
        }),
        tags: tags(tag_pairs),
    }
}

// ---------------------------------------------------------------------------
// Category filter lookup
// ---------------------------------------------------------------------------

#[test]
fn cafe_maps_to_amenity_cafe() {
    assert_eq!(tag_filters("cafe"), Some(&[r#"["amenity"="cafe"]"#][..]));
}

#[test]
fn restaurant_includes_fast_food() {
    assert_eq!(
        tag_filters("restaurant"),
        Some(&[r#"["amenity"~"restaurant|fast_food"]"#][..])
    );
}

#[test]
fn tourism_covers_attraction_museum_viewpoint() {
    assert_eq!(
        tag_filters("tourism"),
        Some(&[r#"["tourism"~"attraction|museum|viewpoint"]"#][..])
    );
}

#[test]
fn all_is_a_union_of_five_filters() {
    let filters = tag_filters("all").expect("all is a known category");
    assert_eq!(filters.len(), 5);
    assert!(filters[0].contains("restaurant|cafe|bar|fast_food"));
    assert!(filters[2].contains("historic"));
    assert!(filters[3].contains("mall|market"));
    assert!(filters[4].contains("park|garden"));
}

#[test]
fn unknown_category_has_no_filter() {
    assert_eq!(tag_filters("hotel"), None);
    assert_eq!(tag_filters(""), None);
    assert_eq!(tag_filters("CAFE"), None, "categories are case-sensitive");
}

// ---------------------------------------------------------------------------
// Query construction
// ---------------------------------------------------------------------------

#[test]
fn single_filter_query_has_one_clause() {
    let query = build_query(1000, 10.7626, 106.6602, tag_filters("cafe").unwrap());
    assert!(query.starts_with("[out:json][timeout:60];"));
    assert!(query.contains(r#"nwr(around:1000,10.7626,106.6602)["amenity"="cafe"];"#));
    assert!(query.contains("out center meta tags;"));
    assert!(!query.contains("(\n"), "no union block for a single filter");
}

#[test]
fn union_query_wraps_each_clause() {
    let query = build_query(5000, 21.0285, 105.8542, tag_filters("all").unwrap());
    assert!(query.contains("(\n"));
    assert!(query.contains(");"));
    assert_eq!(query.matches("nwr(around:5000,21.0285,105.8542)").count(), 5);
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

#[test]
fn unnamed_features_are_discarded() {
    assert!(normalize_element(element(
        Some(10.0),
        Some(106.0),
        None,
        &[("amenity", "cafe")]
    ))
    .is_none());
    assert!(
        normalize_element(element(
            Some(10.0),
            Some(106.0),
            None,
            &[("name", "   "), ("amenity", "cafe")]
        ))
        .is_none(),
        "blank names count as unnamed"
    );
}

#[test]
fn name_is_trimmed() {
    let poi = normalize_element(element(
        Some(10.0),
        Some(106.0),
        None,
        &[("name", "  Cà Phê Sữa  "), ("amenity", "cafe")],
    ))
    .unwrap();
    assert_eq!(poi.name, "Cà Phê Sữa");
}

#[test]
fn category_label_follows_tag_precedence() {
    let poi = normalize_element(element(
        Some(10.0),
        Some(106.0),
        None,
        &[
            ("name", "War Remnants Museum"),
            ("tourism", "museum"),
            ("historic", "yes"),
        ],
    ))
    .unwrap();
    assert_eq!(poi.category, "museum", "tourism outranks historic");

    let poi = normalize_element(element(
        Some(10.0),
        Some(106.0),
        None,
        &[
            ("name", "Bánh Mì Corner"),
            ("amenity", "fast_food"),
            ("tourism", "attraction"),
        ],
    ))
    .unwrap();
    assert_eq!(poi.category, "fast_food", "amenity outranks tourism");

    let poi = normalize_element(element(
        Some(10.0),
        Some(106.0),
        None,
        &[("name", "Tao Đàn Park"), ("leisure", "park")],
    ))
    .unwrap();
    assert_eq!(poi.category, "park");
}

#[test]
fn category_defaults_to_unknown() {
    let poi = normalize_element(element(
        Some(10.0),
        Some(106.0),
        None,
        &[("name", "Somewhere")],
    ))
    .unwrap();
    assert_eq!(poi.category, "unknown");
}

#[test]
fn coordinates_fall_back_to_the_center() {
    let poi = normalize_element(element(
        None,
        None,
        Some((10.775, 106.7)),
        &[("name", "Bến Thành Market"), ("shop", "market")],
    ))
    .unwrap();
    assert!((poi.latitude - 10.775).abs() < 1e-9);
    assert!((poi.longitude - 106.7).abs() < 1e-9);
}

#[test]
fn features_without_any_coordinates_are_discarded() {
    assert!(normalize_element(element(None, None, None, &[("name", "Ghost")])).is_none());
    let missing_center_lon = OverpassElement {
        lat: None,
        lon: None,
        center: Some(OverpassCenter {
            lat: Some(10.0),
            lon: None,
        }),
        tags: tags(&[("name", "Half a center")]),
    };
    assert!(normalize_element(missing_center_lon).is_none());
}

#[test]
fn distance_is_left_unset_by_normalization() {
    let poi = normalize_element(element(
        Some(10.0),
        Some(106.0),
        None,
        &[("name", "Cafe"), ("amenity", "cafe")],
    ))
    .unwrap();
    assert!(poi.distance_km.is_none());
}

// ---------------------------------------------------------------------------
// Address synthesis
// ---------------------------------------------------------------------------

#[test]
fn full_address_is_comma_joined() {
    let address = synthesize_address(&tags(&[
        ("addr:housenumber", "97"),
        ("addr:street", "Hai Bà Trưng"),
        ("addr:suburb", "Bến Nghé"),
        ("addr:city", "Thành phố Hồ Chí Minh"),
    ]));
    assert_eq!(
        address,
        "97 Hai Bà Trưng, Bến Nghé, Thành phố Hồ Chí Minh"
    );
}

#[test]
fn district_substitutes_for_suburb() {
    let address = synthesize_address(&tags(&[
        ("addr:street", "Tràng Tiền"),
        ("addr:district", "Hoàn Kiếm"),
    ]));
    assert_eq!(address, "Tràng Tiền, Hoàn Kiếm");
}

#[test]
fn city_only_address_has_no_leading_separator() {
    let address = synthesize_address(&tags(&[("addr:city", "Đà Nẵng")]));
    assert_eq!(address, "Đà Nẵng");
}

#[test]
fn missing_address_tags_yield_the_placeholder() {
    assert_eq!(synthesize_address(&tags(&[])), "no address available");
}
