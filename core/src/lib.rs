// core/src/lib.rs

//! Tape Store domain library.
//!
//! Everything the storefront views share lives here:
//!  - The product model and the fixed category set.
//!  - The compiled-in catalog (no load step, no persistence).
//!  - The `Cart` aggregate: add/remove/set-quantity plus the derived
//!    subtotal/tax/shipping/total figures every screen renders.
//!  - Peso display formatting.
//!  - The `Order` record produced by a successful checkout.
//!
//! The crate is pure and synchronous. All cart operations are total
//! functions; catalog lookup returns `Option` for unknown ids.

pub mod cart;
pub mod catalog;
pub mod models;
pub mod money;

// --- Re-exports for the Public API ---

pub use crate::cart::{Cart, CartLine, Totals};
pub use crate::catalog::Catalog;
pub use crate::models::order::{Order, OrderLine};
pub use crate::models::product::{Category, Product};
pub use crate::money::format_cents;
