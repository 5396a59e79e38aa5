// tests/storefront_flow_tests.rs

use actix_web::{test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;

use tapestore_server::web::configure_app_routes;
use tapestore_server::{AppConfig, AppState};

fn test_state() -> AppState {
  AppState::new(Arc::new(AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    // Keep the simulated processing delay negligible in tests.
    checkout_processing_ms: 1,
  }))
}

// Builds the same app the binary runs, sharing `$state` with the test body.
macro_rules! test_app {
  ($state:expr) => {
    test::init_service(
      App::new()
        .app_data(web::Data::new($state.clone()))
        .configure(configure_app_routes),
    )
    .await
  };
}

fn checkout_form() -> Value {
  json!({
    "firstName": "Maria",
    "lastName": "Santos",
    "email": "maria.santos@example.com",
    "phone": "09170000000",
    "address": "123 Rizal Ave",
    "city": "Manila",
    "state": "Metro Manila",
    "zipCode": "1000",
    "cardNumber": "1234 5678 9012 3456",
    "expiryDate": "12/29",
    "cvv": "123"
  })
}

#[actix_web::test]
async fn health_check_responds_ok() {
  let state = test_state();
  let app = test_app!(state);

  let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
  assert!(resp.status().is_success());
}

#[actix_web::test]
async fn listing_returns_full_catalog_and_category_set() {
  let state = test_state();
  let app = test_app!(state);

  let body: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request()).await;
  assert_eq!(body["products"].as_array().unwrap().len(), 8);
  assert_eq!(body["categories"].as_array().unwrap().len(), 8);
  assert_eq!(body["cartCount"], json!(0));

  let first = &body["products"][0];
  assert_eq!(first["id"], json!(1));
  assert_eq!(first["priceDisplay"], json!("₱85.00"));
}

#[actix_web::test]
async fn listing_filters_by_category_slug() {
  let state = test_state();
  let app = test_app!(state);

  let body: Value =
    test::call_and_read_body_json(&app, test::TestRequest::get().uri("/?category=duct").to_request()).await;
  let products = body["products"].as_array().unwrap();
  assert_eq!(products.len(), 1);
  assert_eq!(products[0]["name"], json!("Scotch Duct Tape"));

  // `all` is the unfiltered view.
  let body: Value =
    test::call_and_read_body_json(&app, test::TestRequest::get().uri("/?category=all").to_request()).await;
  assert_eq!(body["products"].as_array().unwrap().len(), 8);
}

#[actix_web::test]
async fn listing_rejects_unknown_category() {
  let state = test_state();
  let app = test_app!(state);

  let resp = test::call_service(&app, test::TestRequest::get().uri("/?category=gaffer").to_request()).await;
  assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn product_detail_includes_extended_copy_and_features() {
  let state = test_state();
  let app = test_app!(state);

  let body: Value =
    test::call_and_read_body_json(&app, test::TestRequest::get().uri("/product/3").to_request()).await;
  assert_eq!(body["product"]["name"], json!("Scotch Double-Sided Tape"));
  assert_eq!(body["product"]["categoryLabel"], json!("Double-Sided"));
  assert!(body["product"]["details"].as_str().unwrap().len() > 50);
  assert_eq!(body["features"].as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn unknown_product_yields_not_found_state() {
  let state = test_state();
  let app = test_app!(state);

  let resp = test::call_service(&app, test::TestRequest::get().uri("/product/999").to_request()).await;
  assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn cart_add_merges_and_defaults_quantity_to_one() {
  let state = test_state();
  let app = test_app!(state);

  let body: Value = test::call_and_read_body_json(
    &app,
    test::TestRequest::post()
      .uri("/cart/add")
      .set_json(json!({ "productId": 1, "quantity": 2 }))
      .to_request(),
  )
  .await;
  assert_eq!(body["cart"]["count"], json!(2));

  // No quantity field: the listing view's button adds a single unit.
  let body: Value = test::call_and_read_body_json(
    &app,
    test::TestRequest::post()
      .uri("/cart/add")
      .set_json(json!({ "productId": 1 }))
      .to_request(),
  )
  .await;
  assert_eq!(body["cart"]["count"], json!(3));
  assert_eq!(body["cart"]["lines"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn cart_add_rejects_non_positive_quantity() {
  let state = test_state();
  let app = test_app!(state);

  for quantity in [0, -3] {
    let resp = test::call_service(
      &app,
      test::TestRequest::post()
        .uri("/cart/add")
        .set_json(json!({ "productId": 1, "quantity": quantity }))
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
  }
  assert!(state.cart.read().is_empty());
}

#[actix_web::test]
async fn cart_add_rejects_unknown_product() {
  let state = test_state();
  let app = test_app!(state);

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/cart/add")
      .set_json(json!({ "productId": 999, "quantity": 1 }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn set_quantity_zero_removes_and_remove_is_total() {
  let state = test_state();
  let app = test_app!(state);

  let _: Value = test::call_and_read_body_json(
    &app,
    test::TestRequest::post()
      .uri("/cart/add")
      .set_json(json!({ "productId": 2, "quantity": 4 }))
      .to_request(),
  )
  .await;

  let body: Value = test::call_and_read_body_json(
    &app,
    test::TestRequest::post()
      .uri("/cart/quantity")
      .set_json(json!({ "productId": 2, "quantity": 0 }))
      .to_request(),
  )
  .await;
  assert_eq!(body["cart"]["empty"], json!(true));

  // Removing an id that is not in the cart still succeeds.
  let body: Value = test::call_and_read_body_json(
    &app,
    test::TestRequest::post()
      .uri("/cart/remove")
      .set_json(json!({ "productId": 2 }))
      .to_request(),
  )
  .await;
  assert_eq!(body["cart"]["empty"], json!(true));
}

#[actix_web::test]
async fn cart_view_reports_totals_with_display_strings() {
  let state = test_state();
  let app = test_app!(state);

  // Product 1 is ₱85.00; two units stay under the free-shipping threshold.
  let _: Value = test::call_and_read_body_json(
    &app,
    test::TestRequest::post()
      .uri("/cart/add")
      .set_json(json!({ "productId": 1, "quantity": 2 }))
      .to_request(),
  )
  .await;

  let body: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/cart").to_request()).await;
  let totals = &body["cart"]["totals"];
  assert_eq!(totals["subtotalCents"], json!(17000));
  assert_eq!(totals["taxCents"], json!(1360));
  assert_eq!(totals["shippingCents"], json!(5000));
  assert_eq!(totals["totalCents"], json!(23360));
  assert_eq!(totals["shippingDisplay"], json!("₱50.00"));
}

#[actix_web::test]
async fn free_shipping_applies_above_threshold_through_the_api() {
  let state = test_state();
  let app = test_app!(state);

  // Five units of product 4 (₱150.00) put the subtotal at ₱750.00.
  let body: Value = test::call_and_read_body_json(
    &app,
    test::TestRequest::post()
      .uri("/cart/add")
      .set_json(json!({ "productId": 4, "quantity": 5 }))
      .to_request(),
  )
  .await;
  let totals = &body["cart"]["totals"];
  assert_eq!(totals["subtotalCents"], json!(75000));
  assert_eq!(totals["shippingCents"], json!(0));
  assert_eq!(totals["shippingDisplay"], json!("Free"));
}

#[actix_web::test]
async fn checkout_view_shows_empty_cart_state() {
  let state = test_state();
  let app = test_app!(state);

  let body: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/checkout").to_request()).await;
  assert_eq!(body["state"], json!("empty-cart"));
}

#[actix_web::test]
async fn checkout_submission_on_empty_cart_is_rejected() {
  let state = test_state();
  let app = test_app!(state);

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/checkout")
      .set_json(checkout_form())
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), actix_web::http::StatusCode::CONFLICT);
}

#[actix_web::test]
async fn checkout_rejects_blank_required_fields() {
  let state = test_state();
  let app = test_app!(state);

  let _: Value = test::call_and_read_body_json(
    &app,
    test::TestRequest::post()
      .uri("/cart/add")
      .set_json(json!({ "productId": 1, "quantity": 1 }))
      .to_request(),
  )
  .await;

  let mut form = checkout_form();
  form["email"] = json!("   ");
  let resp = test::call_service(
    &app,
    test::TestRequest::post().uri("/checkout").set_json(form).to_request(),
  )
  .await;
  assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

  // A failed submission leaves the cart untouched.
  assert_eq!(state.cart.read().count(), 1);
}

#[actix_web::test]
async fn successful_checkout_clears_the_cart() {
  let state = test_state();
  let app = test_app!(state);

  let _: Value = test::call_and_read_body_json(
    &app,
    test::TestRequest::post()
      .uri("/cart/add")
      .set_json(json!({ "productId": 1, "quantity": 2 }))
      .to_request(),
  )
  .await;

  let body: Value = test::call_and_read_body_json(
    &app,
    test::TestRequest::post()
      .uri("/checkout")
      .set_json(checkout_form())
      .to_request(),
  )
  .await;
  assert_eq!(body["state"], json!("order-complete"));
  assert!(body["orderId"].as_str().is_some());
  assert_eq!(body["totals"]["subtotalCents"], json!(17000));

  // The cart is emptied, and the checkout view is back to the empty state.
  assert!(state.cart.read().is_empty());
  let body: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/checkout").to_request()).await;
  assert_eq!(body["state"], json!("empty-cart"));
}
