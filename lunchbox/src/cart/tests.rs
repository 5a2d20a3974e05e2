use super::*;
use shared::models::{Addon, AddonOption, SelectionLimits};

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn item(id: &str, price: &str) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        restaurant_id: Some("r1".into()),
        name: format!("Item {id}"),
        description: None,
        image: None,
        category: None,
        price: d(price),
        discount_price: None,
        is_discount: false,
        is_available: true,
        addons: vec![],
    }
}

fn discounted_with_sauce() -> (MenuItem, SelectedAddon) {
    let group = Addon {
        title: "Sauces".into(),
        selection: SelectionLimits::default(),
        options: vec![AddonOption {
            name: "Truffle mayo".into(),
            price: d("1.50"),
        }],
    };
    let mut menu_item = item("m1", "10.00");
    menu_item.discount_price = Some(d("7.50"));
    menu_item.is_discount = true;
    menu_item.addons = vec![group.clone()];
    let addon = SelectedAddon::from_option(&group, &group.options[0], 2);
    (menu_item, addon)
}

#[test]
fn test_line_subtotal_uses_discount_and_addons() {
    let (menu_item, addon) = discounted_with_sauce();
    let mut cart = Cart::new();
    let id = cart.add(&menu_item, 3, vec![addon]);

    assert_eq!(cart.line_subtotal(id).unwrap(), d("31.50"));
    assert_eq!(cart.total(), d("31.50"));
    assert_eq!(cart.item_count(), 3);
}

#[test]
fn test_discount_flag_without_positive_price_is_ignored() {
    let mut menu_item = item("m1", "10.00");
    menu_item.discount_price = Some(Decimal::ZERO);
    menu_item.is_discount = true;
    let mut cart = Cart::new();
    cart.add(&menu_item, 1, vec![]);
    assert_eq!(cart.total(), d("10.00"));
}

#[test]
fn test_same_item_twice_makes_two_lines() {
    let menu_item = item("m1", "4.00");
    let mut cart = Cart::new();
    let a = cart.add(&menu_item, 1, vec![]);
    let b = cart.add(&menu_item, 1, vec![]);
    assert_ne!(a, b);
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.total(), d("8.00"));
}

#[test]
fn test_set_quantity_zero_keeps_line() {
    let mut cart = Cart::new();
    let id = cart.add(&item("m1", "4.00"), 2, vec![]);
    cart.add(&item("m2", "3.00"), 1, vec![]);

    cart.set_quantity(id, 0).unwrap();

    assert_eq!(cart.len(), 2);
    assert_eq!(cart.line(id).unwrap().quantity, 0);
    assert_eq!(cart.total(), d("3.00"));
    assert_eq!(cart.to_order_items().len(), 1);
}

#[test]
fn test_remove_shifts_positions() {
    let mut cart = Cart::new();
    let ids: Vec<_> = ["1.00", "2.00", "3.00", "4.00"]
        .iter()
        .enumerate()
        .map(|(i, p)| cart.add(&item(&format!("m{i}"), p), 1, vec![]))
        .collect();

    let removed = cart.remove_at(1).unwrap();
    assert_eq!(removed.id, ids[1]);
    assert_eq!(cart.len(), 3);
    assert_eq!(cart.position(ids[2]), Some(1));
    assert_eq!(cart.position(ids[3]), Some(2));
    assert_eq!(cart.total(), d("8.00"));

    cart.remove(ids[0]).unwrap();
    assert_eq!(cart.position(ids[2]), Some(0));
    assert_eq!(cart.total(), d("7.00"));
}

#[test]
fn test_bad_position_fails_fast() {
    let mut cart = Cart::new();
    cart.add(&item("m1", "1.00"), 1, vec![]);

    assert_eq!(
        cart.remove_at(1).unwrap_err(),
        CartError::IndexOutOfRange { index: 1, len: 1 }
    );
    assert_eq!(
        cart.set_quantity_at(5, 2).unwrap_err(),
        CartError::IndexOutOfRange { index: 5, len: 1 }
    );
    assert_eq!(cart.len(), 1);
}

#[test]
fn test_unknown_id_fails_fast() {
    let mut other = Cart::new();
    let foreign = other.add(&item("m1", "1.00"), 1, vec![]);

    let mut cart = Cart::new();
    assert_eq!(cart.remove(foreign).unwrap_err(), CartError::LineNotFound(foreign));
    assert!(cart.set_quantity(foreign, 1).is_err());
    assert!(cart.line_subtotal(foreign).is_err());
}

#[test]
fn test_edit_line_in_place() {
    let (menu_item, addon) = discounted_with_sauce();
    let mut cart = Cart::new();
    cart.add(&item("m0", "1.00"), 1, vec![]);
    let id = cart.add(&menu_item, 1, vec![]);

    cart.edit_line(id, 2, vec![addon]).unwrap();

    assert_eq!(cart.position(id), Some(1));
    assert_eq!(cart.line_subtotal(id).unwrap(), d("21.00"));
}

#[test]
fn test_snapshot_does_not_track_price_changes() {
    let mut menu_item = item("m1", "5.00");
    let mut cart = Cart::new();
    cart.add(&menu_item, 1, vec![]);
    menu_item.price = d("9.00");
    assert_eq!(cart.total(), d("5.00"));
}

#[test]
fn test_order_items_carry_addons() {
    let (menu_item, addon) = discounted_with_sauce();
    let mut cart = Cart::new();
    cart.add(&menu_item, 3, vec![addon.clone()]);
    let items = cart.to_order_items();
    assert_eq!(items[0].menu_item_id, "m1");
    assert_eq!(items[0].quantity, 3);
    assert_eq!(items[0].selected_addons, vec![addon]);

    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.total(), Decimal::ZERO);
}

#[test]
fn test_item_count_saturates() {
    let mut cart = Cart::new();
    cart.add(&item("m1", "1.00"), u32::MAX, vec![]);
    cart.add(&item("m2", "1.00"), 5, vec![]);
    assert_eq!(cart.item_count(), u32::MAX);
}
