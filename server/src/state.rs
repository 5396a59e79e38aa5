// server/src/state.rs

use crate::config::AppConfig;
use parking_lot::RwLock;
use std::sync::Arc;
use tapestore::{Cart, Catalog};

/// Shared application state, cloned into every Actix worker.
///
/// The cart is the single source of truth for all three views. Its lock is
/// blocking (`parking_lot`): guards MUST NOT be held across `.await`
/// suspension points. Read what you need, drop the guard, then await.
#[derive(Clone)]
pub struct AppState {
  pub catalog: Arc<Catalog>,
  pub cart: Arc<RwLock<Cart>>,
  pub config: Arc<AppConfig>,
}

impl AppState {
  pub fn new(config: Arc<AppConfig>) -> Self {
    AppState {
      catalog: Arc::new(Catalog::built_in()),
      cart: Arc::new(RwLock::new(Cart::new())),
      config,
    }
  }
}
