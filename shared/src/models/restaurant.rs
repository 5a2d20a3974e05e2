//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Restaurant as listed to consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub cuisine: Vec<String>,
    #[serde(default)]
    pub price_range: Option<String>,
    /// Average rating, 0-5
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub address: Option<crate::models::Address>,
}

/// Restaurant search filters.
///
/// Each filter is sent only when set; `None` means "no constraint",
/// never "match empty".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    /// Minimum rating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl RestaurantFilter {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn with_price_range(mut self, price_range: impl Into<String>) -> Self {
        self.price_range = Some(price_range.into());
        self
    }

    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn paginate(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    /// Drop blank strings so they are not sent as empty constraints
    pub fn cleaned(mut self) -> Self {
        fn blank_to_none(v: Option<String>) -> Option<String> {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        }
        self.cuisine = blank_to_none(self.cuisine);
        self.price_range = blank_to_none(self.price_range);
        self.search = blank_to_none(self.search);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_serializes_only_present_fields() {
        let filter = RestaurantFilter::search("thai").with_min_rating(4.0).paginate(1, 12);
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({"search": "thai", "rating": 4.0, "page": 1, "limit": 12})
        );
    }

    #[test]
    fn test_cleaned_drops_blank_strings() {
        let filter = RestaurantFilter::search("  ").with_cuisine("Italian").cleaned();
        assert_eq!(filter.search, None);
        assert_eq!(filter.cuisine.as_deref(), Some("Italian"));
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({"cuisine": "Italian"})
        );
    }
}
