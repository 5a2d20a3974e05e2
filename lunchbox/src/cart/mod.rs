//! Cart state
//!
//! The cart is the single source of truth for what the user intends to
//! order. Lines keep a stable [`LineId`] from creation until removal; they
//! can also be addressed by position for list rendering, and positions
//! shift down after a removal.
//!
//! Totals are recomputed on every read.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{MenuItem, MenuItemRef, OrderItemRequest, SelectedAddon};
use thiserror::Error;
use uuid::Uuid;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Cart position {index} out of range (cart has {len} lines)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cart line not found: {0}")]
    LineNotFound(LineId),
}

pub type CartResult<T> = Result<T, CartError>;

/// Stable identity of a cart line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(Uuid);

impl LineId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One entry of the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: LineId,
    /// Snapshot taken when the line was added
    pub item: MenuItemRef,
    pub quantity: u32,
    pub selected_addons: Vec<SelectedAddon>,
}

impl CartLine {
    /// Base price plus add-ons, for a single unit
    pub fn unit_price(&self) -> Decimal {
        let addons: Decimal = self.selected_addons.iter().map(SelectedAddon::total).sum();
        self.item.effective_price() + addons
    }

    /// `unit_price * quantity`
    pub fn subtotal(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Mutation ==========

    /// Append a new line. Adding the same item twice yields two lines.
    pub fn add(&mut self, item: &MenuItem, quantity: u32, selected_addons: Vec<SelectedAddon>) -> LineId {
        let id = LineId::new();
        self.lines.push(CartLine {
            id,
            item: item.snapshot(),
            quantity,
            selected_addons,
        });
        tracing::debug!(line = %id, item = %item.name, quantity, "cart line added");
        id
    }

    /// Set a line's quantity. Zero keeps the line; use [`Cart::remove`] to drop it.
    pub fn set_quantity(&mut self, id: LineId, quantity: u32) -> CartResult<()> {
        self.line_mut(id)?.quantity = quantity;
        Ok(())
    }

    pub fn set_quantity_at(&mut self, index: usize, quantity: u32) -> CartResult<()> {
        let len = self.lines.len();
        let line = self
            .lines
            .get_mut(index)
            .ok_or(CartError::IndexOutOfRange { index, len })?;
        line.quantity = quantity;
        Ok(())
    }

    /// Replace quantity and add-ons in place, keeping id and position
    pub fn edit_line(
        &mut self,
        id: LineId,
        quantity: u32,
        selected_addons: Vec<SelectedAddon>,
    ) -> CartResult<()> {
        let line = self.line_mut(id)?;
        line.quantity = quantity;
        line.selected_addons = selected_addons;
        Ok(())
    }

    pub fn remove(&mut self, id: LineId) -> CartResult<CartLine> {
        let index = self.position(id).ok_or(CartError::LineNotFound(id))?;
        Ok(self.lines.remove(index))
    }

    pub fn remove_at(&mut self, index: usize) -> CartResult<CartLine> {
        if index >= self.lines.len() {
            return Err(CartError::IndexOutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        Ok(self.lines.remove(index))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    // ========== Queries ==========

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: LineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    pub fn position(&self, id: LineId) -> Option<usize> {
        self.lines.iter().position(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines, saturating at `u32::MAX`
    pub fn item_count(&self) -> u32 {
        self.lines.iter().fold(0u32, |count, l| count.saturating_add(l.quantity))
    }

    pub fn line_subtotal(&self, id: LineId) -> CartResult<Decimal> {
        self.line(id)
            .map(CartLine::subtotal)
            .ok_or(CartError::LineNotFound(id))
    }

    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Order payload lines; zero-quantity lines are left out
    pub fn to_order_items(&self) -> Vec<OrderItemRequest> {
        self.lines
            .iter()
            .filter(|l| l.quantity > 0)
            .map(|l| OrderItemRequest {
                menu_item_id: l.item.id.clone(),
                quantity: l.quantity,
                selected_addons: l.selected_addons.clone(),
            })
            .collect()
    }

    fn line_mut(&mut self, id: LineId) -> CartResult<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(CartError::LineNotFound(id))
    }
}
