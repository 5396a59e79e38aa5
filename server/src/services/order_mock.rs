// server/src/services/order_mock.rs
use crate::errors::Result as AppResult;
use std::time::Duration;
use tapestore::{format_cents, Order};
use tracing::{info, instrument};

/// Simulates order processing: a fixed delay followed by unconditional
/// success. There is no payment validation, retry, or failure path here;
/// this is explicitly a stub.
#[instrument(skip(order, processing_delay), fields(order_id = %order.id, total_cents = order.totals.total_cents))]
pub async fn process_mock_order(order: Order, processing_delay: Duration) -> AppResult<Order> {
  info!(
    "Simulating order processing for order {} ({})",
    order.id,
    format_cents(order.totals.total_cents)
  );
  tokio::time::sleep(processing_delay).await; // Simulate payment/fulfilment latency

  info!("Mock order processing SUCCEEDED for order {}", order.id);
  Ok(order)
}
