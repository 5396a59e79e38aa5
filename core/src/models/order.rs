// core/src/models/order.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::cart::{Cart, Totals};

/// Snapshot of one purchased line. Prices are captured at purchase time so
/// the record stands on its own once the cart is cleared.
#[derive(Debug, Clone, Serialize)]
pub struct OrderLine {
  pub product_id: u32,
  pub name: String,
  pub price_at_purchase_cents: i64,
  pub quantity: u32,
}

/// The record produced by a successful checkout. Checkout in this system is
/// unconditionally successful, so there is no status machinery; an `Order`
/// existing means it completed.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
  pub id: Uuid,
  pub lines: Vec<OrderLine>,
  pub totals: Totals,
  pub placed_at: DateTime<Utc>,
}

impl Order {
  /// Captures the current cart contents as a completed order.
  pub fn from_cart(cart: &Cart) -> Self {
    Order {
      id: Uuid::new_v4(),
      lines: cart
        .lines()
        .iter()
        .map(|line| OrderLine {
          product_id: line.product.id,
          name: line.product.name.clone(),
          price_at_purchase_cents: line.product.price_cents,
          quantity: line.quantity,
        })
        .collect(),
      totals: cart.totals(),
      placed_at: Utc::now(),
    }
  }
}
