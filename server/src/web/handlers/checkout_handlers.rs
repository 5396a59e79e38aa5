// server/src/web/handlers/checkout_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::services::order_mock;
use crate::state::AppState;
use crate::web::handlers::cart_handlers::{cart_json, totals_json};
use tapestore::Order;

// --- Request DTO ---

/// The checkout form: contact information, shipping address, and payment
/// details. None of it is charged or stored; required fields must simply be
/// non-empty before the mock order is processed.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequestPayload {
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  #[serde(default)]
  pub phone: Option<String>,
  pub address: String,
  pub city: String,
  pub state: String,
  pub zip_code: String,
  pub card_number: String,
  pub expiry_date: String,
  pub cvv: String,
}

impl CheckoutRequestPayload {
  fn validate(&self) -> Result<(), AppError> {
    let required = [
      ("firstName", &self.first_name),
      ("lastName", &self.last_name),
      ("email", &self.email),
      ("address", &self.address),
      ("city", &self.city),
      ("state", &self.state),
      ("zipCode", &self.zip_code),
      ("cardNumber", &self.card_number),
      ("expiryDate", &self.expiry_date),
      ("cvv", &self.cvv),
    ];
    for (field, value) in required {
      if value.trim().is_empty() {
        return Err(AppError::Validation(format!("Field '{}' is required.", field)));
      }
    }
    Ok(())
  }
}

// --- Handler Implementations ---

/// The checkout view: the empty-cart state when there is nothing to buy,
/// otherwise the order summary backing the form.
#[instrument(name = "handler::checkout_summary", skip(app_state))]
pub async fn checkout_summary_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let cart = app_state.cart.read();
  if cart.is_empty() {
    return Ok(HttpResponse::Ok().json(json!({
        "state": "empty-cart",
        "message": "Your cart is empty.",
        "hint": "Add some products to your cart to continue shopping."
    })));
  }

  Ok(HttpResponse::Ok().json(json!({
      "state": "order-form",
      "message": "Ready to check out.",
      "cart": cart_json(&cart)
  })))
}

#[instrument(name = "handler::submit_checkout", skip(app_state, req_payload))]
pub async fn submit_checkout_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CheckoutRequestPayload>,
) -> Result<HttpResponse, AppError> {
  // 1. An empty cart never reaches the order form, let alone submission.
  //    Snapshot the order up front so the lock is released before the
  //    simulated processing delay.
  let order = {
    let cart = app_state.cart.read();
    if cart.is_empty() {
      warn!("Checkout submitted against an empty cart.");
      return Err(AppError::EmptyCart);
    }
    Order::from_cart(&cart)
  };

  // 2. Validate the form.
  req_payload.validate()?;

  info!(
    "Checkout submission accepted for {} {} ({} line(s)).",
    req_payload.first_name,
    req_payload.last_name,
    order.lines.len()
  );

  // 3. Simulated processing: fixed delay, unconditional success.
  let delay = Duration::from_millis(app_state.config.checkout_processing_ms);
  let order = order_mock::process_mock_order(order, delay).await?;

  // 4. Clear the cart only once processing has succeeded.
  app_state.cart.write().clear();

  info!("Order {} complete; cart cleared.", order.id);

  Ok(HttpResponse::Ok().json(json!({
      "state": "order-complete",
      "message": "Order Complete! Thank you for your purchase. You will receive a confirmation email shortly.",
      "orderId": order.id.to_string(),
      "placedAt": order.placed_at,
      "totals": totals_json(&order.totals)
  })))
}
