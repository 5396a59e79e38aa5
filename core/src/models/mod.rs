// core/src/models/mod.rs

//! Data structures shared by the storefront views.

pub mod order;
pub mod product;

pub use order::{Order, OrderLine};
pub use product::{Category, Product};
