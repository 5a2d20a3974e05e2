//! Menu Item Model
//!
//! The API hands out menu items in a loose shape: prices may be numbers or
//! numeric strings, flags may be missing, ids may be numbers. [`RawMenuItem`]
//! mirrors that shape and [`RawMenuItem::normalize`] turns it into the strict
//! [`MenuItem`] used everywhere else.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ModelError, ModelResult};
use crate::money::{coerce_decimal, loose_value};

/// Menu item as served to consumers (normalised)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub restaurant_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub is_discount: bool,
    pub is_available: bool,
    pub addons: Vec<Addon>,
}

impl MenuItem {
    /// Price the customer actually pays for the base item
    pub fn effective_price(&self) -> Decimal {
        effective_price(self.price, self.discount_price, self.is_discount)
    }

    /// Immutable snapshot stored in a cart line
    pub fn snapshot(&self) -> MenuItemRef {
        MenuItemRef {
            id: self.id.clone(),
            name: self.name.clone(),
            image: self.image.clone(),
            price: self.price,
            discount_price: self.discount_price,
            is_discount: self.is_discount,
        }
    }

    /// Find an add-on group by title
    pub fn addon(&self, title: &str) -> Option<&Addon> {
        self.addons.iter().find(|a| a.title == title)
    }
}

/// `discount_price` applies only when the discount flag is set and the
/// discount price is positive.
pub fn effective_price(price: Decimal, discount_price: Option<Decimal>, is_discount: bool) -> Decimal {
    match discount_price {
        Some(dp) if is_discount && dp > Decimal::ZERO => dp,
        _ => price,
    }
}

/// Snapshot of a menu item at the time it was added to the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRef {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub is_discount: bool,
}

impl MenuItemRef {
    pub fn effective_price(&self) -> Decimal {
        effective_price(self.price, self.discount_price, self.is_discount)
    }
}

/// Add-on group (e.g. "Sauces", "Extra toppings")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Addon {
    pub title: String,
    pub selection: SelectionLimits,
    pub options: Vec<AddonOption>,
}

impl Addon {
    pub fn option(&self, name: &str) -> Option<&AddonOption> {
        self.options.iter().find(|o| o.name == name)
    }
}

/// Selectable option within an add-on group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonOption {
    pub name: String,
    pub price: Decimal,
}

/// Selection constraint of an add-on group.
///
/// Carried for display only; the server enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionLimits {
    pub required: bool,
    pub min: u32,
    pub max: Option<u32>,
}

/// Add-on option chosen for a cart line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedAddon {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub group_title: String,
}

impl SelectedAddon {
    /// Select `quantity` of an option from the given group
    pub fn from_option(group: &Addon, option: &AddonOption, quantity: u32) -> Self {
        Self {
            name: option.name.clone(),
            price: option.price,
            quantity,
            group_title: group.title.clone(),
        }
    }

    /// `price * quantity`
    pub fn total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

// ==================== Raw (API) shapes ====================

/// Menu item exactly as the API returns it
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMenuItem {
    #[serde(default, deserialize_with = "loose_value", alias = "_id")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "loose_value")]
    pub restaurant_id: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "imageUrl")]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "loose_value")]
    pub price: Option<Value>,
    #[serde(default, deserialize_with = "loose_value")]
    pub discount_price: Option<Value>,
    #[serde(default)]
    pub is_discount: Option<bool>,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default)]
    pub addons: Vec<RawAddon>,
}

/// Add-on group exactly as the API returns it
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAddon {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default, deserialize_with = "loose_value")]
    pub min: Option<Value>,
    #[serde(default, deserialize_with = "loose_value")]
    pub max: Option<Value>,
    #[serde(default)]
    pub options: Vec<RawAddonOption>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAddonOption {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_value")]
    pub price: Option<Value>,
}

impl RawMenuItem {
    /// Validate and coerce into a [`MenuItem`]
    pub fn normalize(self) -> ModelResult<MenuItem> {
        let id = coerce_id("id", self.id.as_ref())?.ok_or(ModelError::MissingField("id"))?;
        let restaurant_id = coerce_id("restaurantId", self.restaurant_id.as_ref())?;
        let name = non_empty(self.name).ok_or(ModelError::MissingField("name"))?;
        let price = coerce_decimal("price", self.price.as_ref())?
            .ok_or(ModelError::MissingField("price"))?;
        if price.is_sign_negative() {
            return Err(ModelError::invalid("price", "must not be negative"));
        }
        let discount_price = coerce_decimal("discountPrice", self.discount_price.as_ref())?;
        let addons = self
            .addons
            .into_iter()
            .map(RawAddon::normalize)
            .collect::<ModelResult<Vec<_>>>()?;

        Ok(MenuItem {
            id,
            restaurant_id,
            name,
            description: non_empty(self.description),
            image: non_empty(self.image),
            category: non_empty(self.category),
            price,
            discount_price,
            is_discount: self.is_discount.unwrap_or(false),
            is_available: self.is_available.unwrap_or(true),
            addons,
        })
    }
}

impl RawAddon {
    pub fn normalize(self) -> ModelResult<Addon> {
        let title = non_empty(self.title).ok_or(ModelError::MissingField("addon.title"))?;
        let required = self.required.unwrap_or(false);
        let min = coerce_count("addon.min", self.min.as_ref())?.unwrap_or(0);
        let max = coerce_count("addon.max", self.max.as_ref())?;
        let min = if required { min.max(1) } else { min };
        if let Some(max) = max
            && max < min
        {
            return Err(ModelError::invalid(
                "addon.max",
                format!("max ({max}) is below min ({min})"),
            ));
        }

        let options = self
            .options
            .into_iter()
            .map(|o| {
                let name = non_empty(o.name).ok_or(ModelError::MissingField("addon.option.name"))?;
                let price = coerce_decimal("addon.option.price", o.price.as_ref())?
                    .unwrap_or(Decimal::ZERO);
                Ok(AddonOption { name, price })
            })
            .collect::<ModelResult<Vec<_>>>()?;

        Ok(Addon {
            title,
            selection: SelectionLimits { required, min, max },
            options,
        })
    }
}

/// Normalise a whole menu, failing on the first bad item
pub fn normalize_menu(raw: Vec<RawMenuItem>) -> ModelResult<Vec<MenuItem>> {
    raw.into_iter().map(RawMenuItem::normalize).collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn coerce_id(field: &'static str, value: Option<&Value>) -> ModelResult<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(non_empty(Some(s.clone()))),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(ModelError::invalid(field, format!("unexpected id {other}"))),
    }
}

fn coerce_count(field: &'static str, value: Option<&Value>) -> ModelResult<Option<u32>> {
    let Some(dec) = coerce_decimal(field, value)? else {
        return Ok(None);
    };
    if dec.is_sign_negative() || !dec.fract().is_zero() {
        return Err(ModelError::InvalidNumber {
            field,
            value: dec.to_string(),
        });
    }
    dec.to_u32().map(Some).ok_or_else(|| ModelError::InvalidNumber {
        field,
        value: dec.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn raw(value: Value) -> RawMenuItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_normalize_coerces_string_prices() {
        let item = raw(json!({
            "id": 42,
            "name": " Burger ",
            "price": "10.00",
            "discountPrice": "7.50",
            "isDiscount": true,
            "addons": [{
                "title": "Sauces",
                "required": true,
                "options": [{"name": "Mayo", "price": "0.50"}, {"name": "Ketchup"}]
            }]
        }))
        .normalize()
        .unwrap();

        assert_eq!(item.id, "42");
        assert_eq!(item.name, "Burger");
        assert_eq!(item.price, d("10.00"));
        assert_eq!(item.discount_price, Some(d("7.50")));
        assert!(item.is_available);
        assert_eq!(item.effective_price(), d("7.50"));

        let sauces = item.addon("Sauces").unwrap();
        assert_eq!(sauces.selection, SelectionLimits { required: true, min: 1, max: None });
        assert_eq!(sauces.option("Mayo").unwrap().price, d("0.50"));
        assert_eq!(sauces.option("Ketchup").unwrap().price, Decimal::ZERO);
    }

    #[test]
    fn test_normalize_numeric_prices_and_missing_flags() {
        let item = raw(json!({"_id": "abc", "name": "Soup", "price": 4.25, "discountPrice": null}))
            .normalize()
            .unwrap();
        assert_eq!(item.id, "abc");
        assert_eq!(item.price, d("4.25"));
        assert_eq!(item.discount_price, None);
        assert!(!item.is_discount);
        assert!(item.addons.is_empty());
    }

    #[test]
    fn test_normalize_rejects_missing_price() {
        let err = raw(json!({"id": 1, "name": "Tea", "price": ""})).normalize().unwrap_err();
        assert_eq!(err, ModelError::MissingField("price"));
    }

    #[test]
    fn test_normalize_rejects_garbage_price() {
        let err = raw(json!({"id": 1, "name": "Tea", "price": "cheap"})).normalize().unwrap_err();
        assert!(matches!(err, ModelError::InvalidNumber { field: "price", .. }));
    }

    #[test]
    fn test_normalize_rejects_inverted_limits() {
        let err = raw(json!({
            "id": 1, "name": "Wrap", "price": 6,
            "addons": [{"title": "Fillings", "min": "3", "max": 2, "options": []}]
        }))
        .normalize()
        .unwrap_err();
        assert!(matches!(err, ModelError::Invalid { field: "addon.max", .. }));
    }

    #[test]
    fn test_effective_price_ignores_zero_discount() {
        assert_eq!(effective_price(d("9"), Some(Decimal::ZERO), true), d("9"));
        assert_eq!(effective_price(d("9"), Some(d("5")), false), d("9"));
        assert_eq!(effective_price(d("9"), Some(d("5")), true), d("5"));
    }

    #[test]
    fn test_snapshot_keeps_pricing_fields() {
        let item = raw(json!({"id": 7, "name": "Salad", "price": "8", "discountPrice": 6, "isDiscount": true}))
            .normalize()
            .unwrap();
        let snap = item.snapshot();
        assert_eq!(snap.id, "7");
        assert_eq!(snap.effective_price(), d("6"));
    }
}
