// server/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use tapestore::{format_cents, Cart, Totals};

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequestPayload {
  pub product_id: u32,
  // Defaults to 1: the listing view's "Add to Cart" button sends no quantity.
  pub quantity: Option<i64>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartRequestPayload {
  pub product_id: u32,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SetQuantityRequestPayload {
  pub product_id: u32,
  pub quantity: i64,
}

// --- View payload ---

pub(crate) fn totals_json(totals: &Totals) -> Value {
  json!({
    "subtotalCents": totals.subtotal_cents,
    "subtotalDisplay": format_cents(totals.subtotal_cents),
    "taxCents": totals.tax_cents,
    "taxDisplay": format_cents(totals.tax_cents),
    "shippingCents": totals.shipping_cents,
    "shippingDisplay": if totals.shipping_cents == 0 {
      "Free".to_string()
    } else {
      format_cents(totals.shipping_cents)
    },
    "totalCents": totals.total_cents,
    "totalDisplay": format_cents(totals.total_cents),
  })
}

pub(crate) fn cart_json(cart: &Cart) -> Value {
  let lines: Vec<Value> = cart
    .lines()
    .iter()
    .map(|line| {
      json!({
        "productId": line.product.id,
        "name": line.product.name,
        "priceCents": line.product.price_cents,
        "priceDisplay": format_cents(line.product.price_cents),
        "imageUrl": line.product.image_url,
        "quantity": line.quantity,
        "lineTotalCents": line.line_total_cents(),
        "lineTotalDisplay": format_cents(line.line_total_cents()),
      })
    })
    .collect();

  json!({
    "lines": lines,
    "totals": totals_json(&cart.totals()),
    "count": cart.count(),
    "empty": cart.is_empty(),
  })
}

// --- Handler Implementations ---

#[instrument(name = "handler::view_cart", skip(app_state))]
pub async fn view_cart_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let cart_body = cart_json(&app_state.cart.read());
  Ok(HttpResponse::Ok().json(json!({
      "message": "Cart fetched successfully.",
      "cart": cart_body
  })))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, req_payload),
    fields(product_id = %req_payload.product_id)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddToCartRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let quantity = req_payload.quantity.unwrap_or(1);
  if quantity <= 0 {
    warn!("Invalid quantity ({}) provided. Must be positive.", quantity);
    return Err(AppError::Validation("Quantity must be a positive number.".to_string()));
  }
  let quantity =
    u32::try_from(quantity).map_err(|_| AppError::Validation("Quantity is too large.".to_string()))?;

  let product = app_state
    .catalog
    .get(req_payload.product_id)
    .cloned()
    .ok_or_else(|| AppError::NotFound(format!("Product with ID {} not found.", req_payload.product_id)))?;

  let cart_body = {
    let mut cart = app_state.cart.write();
    cart.add(&product, quantity);
    cart_json(&cart)
  };

  info!("Added product {} (x{}) to cart.", product.id, quantity);

  Ok(HttpResponse::Ok().json(json!({
      "message": "Item added to cart successfully.",
      "cart": cart_body
  })))
}

#[instrument(
    name = "handler::remove_from_cart",
    skip(app_state, req_payload),
    fields(product_id = %req_payload.product_id)
)]
pub async fn remove_from_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<RemoveFromCartRequestPayload>,
) -> Result<HttpResponse, AppError> {
  // Removal is total: an absent id is a no-op, not an error.
  let cart_body = {
    let mut cart = app_state.cart.write();
    cart.remove(req_payload.product_id);
    cart_json(&cart)
  };

  info!("Removed product {} from cart.", req_payload.product_id);

  Ok(HttpResponse::Ok().json(json!({
      "message": "Item removed from cart.",
      "cart": cart_body
  })))
}

#[instrument(
    name = "handler::set_quantity",
    skip(app_state, req_payload),
    fields(product_id = %req_payload.product_id, quantity = %req_payload.quantity)
)]
pub async fn set_quantity_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<SetQuantityRequestPayload>,
) -> Result<HttpResponse, AppError> {
  // A non-positive quantity removes the line, matching the quantity
  // steppers on the checkout view.
  let quantity = u32::try_from(req_payload.quantity.max(0))
    .map_err(|_| AppError::Validation("Quantity is too large.".to_string()))?;

  let cart_body = {
    let mut cart = app_state.cart.write();
    cart.set_quantity(req_payload.product_id, quantity);
    cart_json(&cart)
  };

  info!("Set product {} quantity to {}.", req_payload.product_id, quantity);

  Ok(HttpResponse::Ok().json(json!({
      "message": "Cart updated.",
      "cart": cart_body
  })))
}
