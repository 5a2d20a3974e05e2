//! Ordering session
//!
//! A session owns the cart for one restaurant from the moment the user
//! starts ordering until checkout succeeds or the session is cleared.

use chrono::{DateTime, NaiveTime, TimeZone};
use lunchbox_client::{Api, HttpClient};
use rust_decimal::Decimal;
use shared::models::{Address, AddressLookupConfig, CreateOrderRequest, MenuItem, Order, SelectedAddon};

use crate::cart::{Cart, LineId};
use crate::core::{AppError, AppResult};
use crate::delivery::DeliveryWindow;
use crate::forms::SubmitGuard;
use crate::forms::validation::{MAX_NOTE_LEN, validate_optional_text};

#[derive(Debug)]
pub struct OrderingSession {
    restaurant_id: String,
    cutoff: NaiveTime,
    cart: Cart,
    guard: SubmitGuard,
    address_lookup: Option<AddressLookupConfig>,
}

impl OrderingSession {
    pub fn begin(restaurant_id: impl Into<String>, cutoff: NaiveTime) -> Self {
        let restaurant_id = restaurant_id.into();
        tracing::debug!(%restaurant_id, "ordering session started");
        Self {
            restaurant_id,
            cutoff,
            cart: Cart::new(),
            guard: SubmitGuard::new(),
            address_lookup: None,
        }
    }

    /// Restrict delivery addresses to the lookup provider's country and bounds
    pub fn with_address_lookup(mut self, lookup: AddressLookupConfig) -> Self {
        self.address_lookup = Some(lookup);
        self
    }

    pub fn restaurant_id(&self) -> &str {
        &self.restaurant_id
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn is_submitting(&self) -> bool {
        self.guard.is_submitting()
    }

    /// Add a menu item; it must belong to this session's restaurant
    pub fn add_item(
        &mut self,
        item: &MenuItem,
        quantity: u32,
        selected_addons: Vec<SelectedAddon>,
    ) -> AppResult<LineId> {
        if let Some(owner) = &item.restaurant_id
            && owner != &self.restaurant_id
        {
            return Err(AppError::validation(
                "item",
                "Items from different restaurants cannot share a cart",
            ));
        }
        if !item.is_available {
            return Err(AppError::validation("item", format!("{} is currently unavailable", item.name)));
        }
        Ok(self.cart.add(item, quantity, selected_addons))
    }

    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    pub fn window<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DeliveryWindow<Tz> {
        DeliveryWindow::for_now(now, self.cutoff)
    }

    /// Discard the cart without ordering
    pub fn clear(&mut self) {
        self.cart.clear();
    }

    /// Checkout. On success the cart is emptied and the server's order
    /// returned; on failure the cart is left untouched for a retry.
    pub async fn place_order<C: HttpClient, Tz: TimeZone>(
        &mut self,
        api: &Api<C>,
        now: &DateTime<Tz>,
        delivery_address: Option<Address>,
        notes: Option<String>,
    ) -> AppResult<Order> {
        let window = self.window(now);
        if !window.is_open {
            return Err(window.closed_error());
        }

        let items = self.cart.to_order_items();
        if items.is_empty() {
            return Err(AppError::EmptyCart);
        }
        let notes = notes.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
        validate_optional_text(notes.as_deref(), "notes", MAX_NOTE_LEN)?;
        if let (Some(lookup), Some(address)) = (&self.address_lookup, &delivery_address)
            && !lookup.accepts(address)
        {
            return Err(AppError::validation(
                "deliveryAddress",
                "We don't deliver to that address",
            ));
        }

        let request = CreateOrderRequest {
            restaurant_id: self.restaurant_id.clone(),
            items,
            delivery_date: window.delivery_date,
            delivery_address,
            notes,
        };
        let order = self
            .guard
            .run(async { Ok(api.create_order(&request).await?) })
            .await?;

        tracing::info!(
            order_id = %order.id,
            status = ?order.status,
            delivery_date = %request.delivery_date,
            "order placed"
        );
        self.cart.clear();
        Ok(order)
    }
}
