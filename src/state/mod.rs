/// State management module
///
/// This module holds everything the orders screen knows, independent of
/// how it is drawn:
/// - Order store documents (data.rs)
/// - Client-side pagination (pagination.rs)
/// - The loaded order collection (orders.rs)
/// - Per-order edit drafts (edit.rs)
/// - Tickets for discarding stale responses (ticket.rs)
/// - The screen state machine tying them together (screen.rs)

pub mod data;
pub mod edit;
pub mod orders;
pub mod pagination;
pub mod screen;
pub mod ticket;
