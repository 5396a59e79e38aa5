// server/src/web/routes.rs

use actix_web::web;

// Simple liveness probe; there are no downstream services to check.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called in `main.rs` (and by the integration tests) to configure services
// for the Actix App. The path layout mirrors the storefront's navigation:
// `/` for the listing, `/product/{id}` for details, `/checkout` for the
// order flow, with the cart mutations grouped under `/cart`.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    // Catalog listing (optionally filtered by ?category=<slug>)
    .route(
      "/",
      web::get().to(crate::web::handlers::product_handlers::list_products_handler),
    )
    // Product detail view
    .route(
      "/product/{id}",
      web::get().to(crate::web::handlers::product_handlers::get_product_handler),
    )
    // Cart Routes
    .service(
      web::scope("/cart")
        .route("", web::get().to(crate::web::handlers::cart_handlers::view_cart_handler))
        .route(
          "/add",
          web::post().to(crate::web::handlers::cart_handlers::add_to_cart_handler),
        )
        .route(
          "/remove",
          web::post().to(crate::web::handlers::cart_handlers::remove_from_cart_handler),
        )
        .route(
          "/quantity",
          web::post().to(crate::web::handlers::cart_handlers::set_quantity_handler),
        ),
    )
    // Checkout Routes (one resource, method-dispatched: GET is the summary
    // view, POST is the submission)
    .service(
      web::resource("/checkout")
        .route(web::get().to(crate::web::handlers::checkout_handlers::checkout_summary_handler))
        .route(web::post().to(crate::web::handlers::checkout_handlers::submit_checkout_handler)),
    );
}
