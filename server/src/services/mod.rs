// server/src/services/mod.rs

pub mod order_mock;
