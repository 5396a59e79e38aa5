// server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use tapestore::{format_cents, Category, Product};

// Static feature bullets shown on every detail page.
const PRODUCT_FEATURES: [&str; 4] = [
  "Premium quality adhesive tape",
  "Strong and reliable bonding",
  "Easy to use and apply",
  "Perfect for various applications",
];

fn product_json(product: &Product) -> Value {
  json!({
    "id": product.id,
    "name": product.name,
    "priceCents": product.price_cents,
    "priceDisplay": format_cents(product.price_cents),
    "description": product.description,
    "imageUrl": product.image_url,
    "category": product.category,
    "categoryLabel": product.category.label(),
  })
}

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  pub category: Option<String>,
}

#[instrument(name = "handler::list_products", skip(app_state, query_params))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  // `all` (or no filter at all) means the full catalog.
  let filter = match query_params.category.as_deref() {
    None | Some("all") => None,
    Some(slug) => Some(Category::from_slug(slug).ok_or_else(|| {
      warn!("Unknown category filter '{}' requested.", slug);
      AppError::Validation(format!("Unknown category '{}'.", slug))
    })?),
  };

  let products: Vec<Value> = match filter {
    Some(category) => app_state
      .catalog
      .by_category(category)
      .into_iter()
      .map(product_json)
      .collect(),
    None => app_state.catalog.products().iter().map(product_json).collect(),
  };

  info!("Listing {} products (filter: {:?}).", products.len(), filter);

  let categories: Vec<Value> = Category::ALL
    .iter()
    .map(|c| json!({ "slug": c.slug(), "label": c.label() }))
    .collect();
  let cart_count = app_state.cart.read().count();

  Ok(HttpResponse::Ok().json(json!({
      "message": "Products fetched successfully.",
      "products": products,
      "categories": categories,
      "cartCount": cart_count
  })))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<u32>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  match app_state.catalog.get(product_id) {
    Some(product) => {
      info!("Product {} fetched successfully.", product_id);
      let mut body = product_json(product);
      body["details"] = json!(product.details);
      Ok(HttpResponse::Ok().json(json!({
          "message": "Product fetched successfully.",
          "product": body,
          "features": PRODUCT_FEATURES,
          "cartCount": app_state.cart.read().count()
      })))
    }
    None => {
      // The not-found state, not a failure of the whole view.
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
    }
  }
}
