//! Corporate Order Model
//!
//! Orders, sub-orders and pricing lines are computed by the server
//! (customer total, commission, restaurant net) and only displayed here.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Address, SelectedAddon};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    PendingApproval,
    Approved,
    Rejected,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Whether an employee may still cancel the order
    pub fn is_cancellable(&self) -> bool {
        matches!(self, Self::PendingApproval | Self::Approved | Self::Confirmed)
    }

    /// Whether the order has reached a final state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Delivered | Self::Cancelled)
    }
}

/// Corporate order (one checkout, possibly several restaurants)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub order_number: Option<String>,
    pub status: OrderStatus,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
    #[serde(default)]
    pub delivery_address: Option<Address>,
    pub customer_total: Decimal,
    #[serde(default)]
    pub requires_approval: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub sub_orders: Vec<SubOrder>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Per-restaurant slice of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubOrder {
    pub id: String,
    pub restaurant_id: String,
    #[serde(default)]
    pub restaurant_name: Option<String>,
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<PricingOrderItem>,
    pub customer_total: Decimal,
    #[serde(default)]
    pub commission: Decimal,
    #[serde(default)]
    pub restaurant_net: Decimal,
}

/// Server-priced order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingOrderItem {
    pub menu_item_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    #[serde(default)]
    pub addons: Vec<SelectedAddon>,
    pub customer_total: Decimal,
    #[serde(default)]
    pub commission: Decimal,
    #[serde(default)]
    pub restaurant_net: Decimal,
}

/// Order creation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub restaurant_id: String,
    pub items: Vec<OrderItemRequest>,
    pub delivery_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One requested line of a new order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub menu_item_id: String,
    pub quantity: u32,
    pub selected_addons: Vec<SelectedAddon>,
}

/// Order listing filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Manager rejection payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectOrderRequest {
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_deserializes_server_totals() {
        let order: Order = serde_json::from_value(json!({
            "id": "ord_1",
            "status": "PENDING_APPROVAL",
            "customerTotal": "31.50",
            "requiresApproval": true,
            "subOrders": [{
                "id": "sub_1",
                "restaurantId": "r1",
                "status": "PENDING_APPROVAL",
                "customerTotal": 31.5,
                "commission": "3.15",
                "restaurantNet": "28.35",
                "items": [{
                    "menuItemId": "m1",
                    "name": "Burger",
                    "quantity": 3,
                    "unitPrice": "10.50",
                    "customerTotal": "31.50"
                }]
            }]
        }))
        .unwrap();

        assert_eq!(order.status, OrderStatus::PendingApproval);
        assert!(order.status.is_cancellable());
        assert_eq!(order.customer_total.to_string(), "31.50");
        assert_eq!(order.sub_orders[0].items[0].quantity, 3);
        assert_eq!(order.sub_orders[0].items[0].commission, Decimal::ZERO);
    }

    #[test]
    fn test_order_filter_status_wire_name() {
        let filter = OrderFilter {
            status: Some(OrderStatus::OutForDelivery),
            ..OrderFilter::default()
        };
        assert_eq!(
            serde_json::to_value(filter).unwrap(),
            json!({"status": "OUT_FOR_DELIVERY"})
        );
    }
}
