// lunchbox/tests/checkout_flow.rs
// Ordering session end to end against the recording transport

use chrono::{NaiveTime, TimeZone, Utc};
use lunchbox::{AppError, OrderingSession};
use lunchbox_client::{Api, MockHttpClient};
use rust_decimal::Decimal;
use serde_json::json;
use shared::models::{
    Addon, AddonOption, Address, AddressLookupConfig, BoundingBox, GeoPoint, MenuItem, OrderStatus,
    SelectedAddon, SelectionLimits,
};

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn eleven() -> NaiveTime {
    NaiveTime::from_hms_opt(11, 0, 0).unwrap()
}

fn burger() -> MenuItem {
    MenuItem {
        id: "m1".into(),
        restaurant_id: Some("r1".into()),
        name: "Burger".into(),
        description: None,
        image: None,
        category: Some("Mains".into()),
        price: d("10.00"),
        discount_price: Some(d("7.50")),
        is_discount: true,
        is_available: true,
        addons: vec![Addon {
            title: "Sauces".into(),
            selection: SelectionLimits::default(),
            options: vec![AddonOption {
                name: "Truffle mayo".into(),
                price: d("1.50"),
            }],
        }],
    }
}

fn created_order() -> serde_json::Value {
    json!({
        "id": "o1",
        "orderNumber": "CO-1001",
        "status": "PENDING_APPROVAL",
        "customerTotal": "31.50",
        "requiresApproval": true,
        "deliveryDate": "2025-03-05"
    })
}

#[tokio::test]
async fn test_place_order_sends_cart_and_clears_it() {
    let api = Api::new(MockHttpClient::new().reply(created_order()));
    let mut session = OrderingSession::begin("r1", eleven());

    let item = burger();
    let group = &item.addons[0];
    let sauce = SelectedAddon::from_option(group, &group.options[0], 2);
    session.add_item(&item, 3, vec![sauce]).unwrap();
    let fries = session.add_item(&item, 1, vec![]).unwrap();
    session.cart_mut().set_quantity(fries, 0).unwrap();
    assert_eq!(session.total(), d("31.50"));

    // Tuesday 09:00, before the 11:00 cutoff for Wednesday delivery
    let now = Utc.with_ymd_and_hms(2025, 3, 4, 9, 0, 0).unwrap();
    let order = session
        .place_order(&api, &now, None, Some("  Leave at reception ".into()))
        .await
        .unwrap();

    assert_eq!(order.status, OrderStatus::PendingApproval);
    assert!(order.requires_approval);
    assert!(session.cart().is_empty());

    let call = api.http().last_call().unwrap();
    assert_eq!(call.method, "POST");
    assert_eq!(call.path, "corporate-orders");
    assert_eq!(
        call.body,
        Some(json!({
            "restaurantId": "r1",
            "items": [{
                "menuItemId": "m1",
                "quantity": 3,
                "selectedAddons": [{
                    "name": "Truffle mayo",
                    "price": "1.50",
                    "quantity": 2,
                    "groupTitle": "Sauces"
                }]
            }],
            "deliveryDate": "2025-03-05",
            "notes": "Leave at reception"
        }))
    );
}

#[tokio::test]
async fn test_closed_window_keeps_cart() {
    let api = Api::new(MockHttpClient::new());
    let mut session = OrderingSession::begin("r1", eleven());
    session.add_item(&burger(), 1, vec![]).unwrap();

    let late = Utc.with_ymd_and_hms(2025, 3, 4, 11, 0, 1).unwrap();
    let err = session.place_order(&api, &late, None, None).await.unwrap_err();

    assert!(matches!(err, AppError::OrderingClosed { .. }));
    assert_eq!(session.cart().len(), 1);
    assert!(api.http().calls().is_empty());
}

#[tokio::test]
async fn test_empty_or_zeroed_cart_is_rejected() {
    let api = Api::new(MockHttpClient::new());
    let mut session = OrderingSession::begin("r1", eleven());
    let now = Utc.with_ymd_and_hms(2025, 3, 4, 9, 0, 0).unwrap();

    let err = session.place_order(&api, &now, None, None).await.unwrap_err();
    assert!(matches!(err, AppError::EmptyCart));

    let line = session.add_item(&burger(), 2, vec![]).unwrap();
    session.cart_mut().set_quantity(line, 0).unwrap();
    let err = session.place_order(&api, &now, None, None).await.unwrap_err();
    assert!(matches!(err, AppError::EmptyCart));
    assert!(api.http().calls().is_empty());
}

#[tokio::test]
async fn test_server_rejection_keeps_cart_for_retry() {
    let api = Api::new(
        MockHttpClient::new()
            .fail(422, r#"{"message":["Restaurant is closed on that day"]}"#)
            .reply(created_order()),
    );
    let mut session = OrderingSession::begin("r1", eleven());
    session.add_item(&burger(), 1, vec![]).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 3, 4, 9, 0, 0).unwrap();

    let err = session.place_order(&api, &now, None, None).await.unwrap_err();
    assert_eq!(err.user_message(), "Restaurant is closed on that day");
    assert_eq!(session.cart().len(), 1);
    assert!(!session.is_submitting());

    session.place_order(&api, &now, None, None).await.unwrap();
    assert!(session.cart().is_empty());
}

#[test]
fn test_items_from_other_restaurants_are_refused() {
    let mut session = OrderingSession::begin("r2", eleven());
    let err = session.add_item(&burger(), 1, vec![]).unwrap_err();
    assert_eq!(err.field(), Some("item"));

    let mut sold_out = burger();
    sold_out.restaurant_id = Some("r2".into());
    sold_out.is_available = false;
    assert!(session.add_item(&sold_out, 1, vec![]).is_err());
    assert!(session.cart().is_empty());
}

#[tokio::test]
async fn test_address_outside_lookup_bounds_is_refused() {
    let api = Api::new(MockHttpClient::new().reply(created_order()));
    let lookup = AddressLookupConfig {
        country_code: "GB".into(),
        bounds: BoundingBox { south: 51.28, west: -0.51, north: 51.69, east: 0.33 },
    };
    let mut session = OrderingSession::begin("r1", eleven()).with_address_lookup(lookup);
    session.add_item(&burger(), 1, vec![]).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 3, 4, 9, 0, 0).unwrap();

    let mut address = Address {
        line1: "1 Piccadilly".into(),
        city: "Manchester".into(),
        postcode: "M1 1AA".into(),
        country_code: "GB".into(),
        location: Some(GeoPoint { lat: 53.48, lng: -2.24 }),
        ..Address::default()
    };
    let err = session
        .place_order(&api, &now, Some(address.clone()), None)
        .await
        .unwrap_err();
    assert_eq!(err.field(), Some("deliveryAddress"));
    assert!(api.http().calls().is_empty());
    assert_eq!(session.cart().len(), 1);

    address.location = Some(GeoPoint { lat: 51.5, lng: -0.02 });
    session.place_order(&api, &now, Some(address), None).await.unwrap();
    let body = api.http().last_call().unwrap().body.unwrap();
    assert_eq!(body["deliveryAddress"]["city"], "Manchester");
}
