// core/src/cart.rs

//! The cart aggregate: the one piece of mutable state in the storefront.
//!
//! Every view reads the same `Cart`; mutation happens only through
//! [`Cart::add`], [`Cart::remove`] and [`Cart::set_quantity`], and the
//! monetary figures are always derived, never stored. All operations are
//! total: nothing here returns an error.

use serde::Serialize;
use tracing::debug;

use crate::models::product::Product;

/// Fixed 8% sales tax applied to the subtotal.
pub const TAX_RATE_PERCENT: i64 = 8;
/// Shipping is free once the subtotal exceeds ₱500.00.
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 50_000;
/// Flat shipping fee below the free-shipping threshold.
pub const FLAT_SHIPPING_CENTS: i64 = 5_000;

/// One (product, quantity) pairing. Quantity is always positive; a line
/// whose quantity would drop to zero is removed instead.
#[derive(Debug, Clone, Serialize)]
pub struct CartLine {
  pub product: Product,
  pub quantity: u32,
}

impl CartLine {
  pub fn line_total_cents(&self) -> i64 {
    self.product.price_cents * i64::from(self.quantity)
  }
}

/// Derived monetary snapshot of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
  pub subtotal_cents: i64,
  pub tax_cents: i64,
  pub shipping_cents: i64,
  pub total_cents: i64,
}

/// Ordered collection of cart lines; at most one line per product id.
///
/// Created empty at session start and cleared on successful checkout.
#[derive(Debug, Clone, Default)]
pub struct Cart {
  lines: Vec<CartLine>,
}

impl Cart {
  pub fn new() -> Self {
    Cart { lines: Vec::new() }
  }

  pub fn lines(&self) -> &[CartLine] {
    &self.lines
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  /// Adds `quantity` units of `product`. Merges into the existing line for
  /// the same product id if there is one, otherwise appends a new line.
  /// A zero quantity is a no-op; callers reject non-positive quantities
  /// before they reach the aggregate. Merged quantities saturate at
  /// `u32::MAX` so the operation stays total.
  pub fn add(&mut self, product: &Product, quantity: u32) {
    if quantity == 0 {
      debug!(product_id = product.id, "ignoring add with zero quantity");
      return;
    }
    match self.lines.iter_mut().find(|line| line.product.id == product.id) {
      Some(line) => {
        line.quantity = line.quantity.saturating_add(quantity);
        debug!(
          product_id = product.id,
          quantity = line.quantity,
          "merged into existing cart line"
        );
      }
      None => {
        self.lines.push(CartLine {
          product: product.clone(),
          quantity,
        });
        debug!(product_id = product.id, quantity, "appended new cart line");
      }
    }
  }

  /// Removes the line for `product_id`. No-op if absent.
  pub fn remove(&mut self, product_id: u32) {
    let before = self.lines.len();
    self.lines.retain(|line| line.product.id != product_id);
    if self.lines.len() != before {
      debug!(product_id, "removed cart line");
    }
  }

  /// Replaces the quantity of the line for `product_id`. A zero quantity is
  /// equivalent to [`Cart::remove`]. No-op if the id is absent.
  pub fn set_quantity(&mut self, product_id: u32, quantity: u32) {
    if quantity == 0 {
      self.remove(product_id);
      return;
    }
    if let Some(line) = self.lines.iter_mut().find(|line| line.product.id == product_id) {
      line.quantity = quantity;
      debug!(product_id, quantity, "updated cart line quantity");
    }
  }

  /// Empties the cart. Called after a successful checkout.
  pub fn clear(&mut self) {
    self.lines.clear();
  }

  /// Total number of units across all lines (the header badge figure).
  /// Saturates at `u32::MAX`, like [`Cart::add`].
  pub fn count(&self) -> u32 {
    self
      .lines
      .iter()
      .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
  }

  /// Σ price × quantity over all lines.
  pub fn subtotal_cents(&self) -> i64 {
    self.lines.iter().map(CartLine::line_total_cents).sum()
  }

  /// 8% of the subtotal, rounded half-up to the centavo.
  pub fn tax_cents(&self) -> i64 {
    (self.subtotal_cents() * TAX_RATE_PERCENT + 50) / 100
  }

  /// Flat ₱50.00, waived once the subtotal exceeds ₱500.00.
  pub fn shipping_cents(&self) -> i64 {
    if self.subtotal_cents() > FREE_SHIPPING_THRESHOLD_CENTS {
      0
    } else {
      FLAT_SHIPPING_CENTS
    }
  }

  pub fn total_cents(&self) -> i64 {
    self.subtotal_cents() + self.tax_cents() + self.shipping_cents()
  }

  pub fn totals(&self) -> Totals {
    Totals {
      subtotal_cents: self.subtotal_cents(),
      tax_cents: self.tax_cents(),
      shipping_cents: self.shipping_cents(),
      total_cents: self.total_cents(),
    }
  }
}
