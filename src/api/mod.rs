/// Order store API module
///
/// Talks to the two REST endpoints the screen depends on:
/// - `GET /api/orders` for the full collection
/// - `PUT /api/orders/{id}` to change an order's status

pub mod client;

pub use client::OrdersClient;
