//! Address Model
//!
//! Shape of the structured address returned by the lookup provider.

use serde::{Deserialize, Serialize};

/// Geographic point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Structured delivery address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    pub postcode: String,
    /// ISO 3166-1 alpha-2
    pub country_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

impl Address {
    /// Single-line form, skipping empty parts
    pub fn formatted(&self) -> String {
        [
            Some(self.line1.as_str()),
            self.line2.as_deref(),
            Some(self.city.as_str()),
            Some(self.postcode.as_str()),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// Lat/lng rectangle the lookup is restricted to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.south..=self.north).contains(&point.lat) && (self.west..=self.east).contains(&point.lng)
    }
}

/// Constraints handed to the address autocomplete widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressLookupConfig {
    pub country_code: String,
    pub bounds: BoundingBox,
}

impl AddressLookupConfig {
    /// Whether a looked-up address is acceptable for delivery
    pub fn accepts(&self, address: &Address) -> bool {
        if !address.country_code.eq_ignore_ascii_case(&self.country_code) {
            return false;
        }
        address.location.is_none_or(|p| self.bounds.contains(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn london() -> AddressLookupConfig {
        AddressLookupConfig {
            country_code: "GB".into(),
            bounds: BoundingBox { south: 51.28, west: -0.51, north: 51.69, east: 0.33 },
        }
    }

    #[test]
    fn test_formatted_skips_empty_parts() {
        let addr = Address {
            line1: "1 Canada Square".into(),
            line2: Some(" ".into()),
            city: "London".into(),
            postcode: "E14 5AB".into(),
            country_code: "GB".into(),
            location: None,
        };
        assert_eq!(addr.formatted(), "1 Canada Square, London, E14 5AB");
    }

    #[test]
    fn test_lookup_accepts_inside_bounds_only() {
        let mut addr = Address {
            country_code: "gb".into(),
            location: Some(GeoPoint { lat: 51.5, lng: -0.02 }),
            ..Address::default()
        };
        assert!(london().accepts(&addr));

        addr.location = Some(GeoPoint { lat: 53.48, lng: -2.24 });
        assert!(!london().accepts(&addr));

        addr.location = None;
        addr.country_code = "FR".into();
        assert!(!london().accepts(&addr));
    }
}
