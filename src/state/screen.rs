/// State machine of the orders screen
///
/// `Closed -> Open` on select, `Open -> Open(modified)` on a status edit,
/// `Open -> Closed` on back or on a confirmed save. A failed save leaves the
/// session exactly where it was. The iced shell only forwards events here
/// and turns the returned requests into tasks.

use super::data::{Order, OrderStatus};
use super::edit::{EditSession, SaveRequest};
use super::orders::{Applied, OrderBook};
use super::pagination::PageNav;
use super::ticket::{Generation, Ticket};
use crate::error::{ApiError, OrdersError};

pub const SAVE_SUCCESS_NOTICE: &str = "Order status updated successfully!";

#[derive(Debug)]
pub struct OrdersScreen {
    book: OrderBook,
    session: Option<EditSession>,
    sessions: Generation,
    /// Shown on the list view after a successful save
    notice: Option<String>,
}

impl OrdersScreen {
    pub fn new(page_size: usize) -> Self {
        Self {
            book: OrderBook::new(page_size),
            session: None,
            sessions: Generation::default(),
            notice: None,
        }
    }

    /// Reset to a freshly mounted screen and start the one load
    pub fn mount(&mut self) -> Ticket {
        self.session = None;
        self.notice = None;
        self.book.begin_load()
    }

    pub fn finish_load(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<Order>, ApiError>,
    ) -> Result<Applied, OrdersError> {
        self.book.finish_load(ticket, result)
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn navigate(&mut self, nav: PageNav) {
        self.book.navigate(nav);
    }

    /// Open an edit session on the order at `index` of the collection
    pub fn select(&mut self, index: usize) -> Option<&EditSession> {
        let order = self.book.get(index)?.clone();
        self.notice = None;
        self.session = Some(EditSession::open(order, self.sessions.advance()));
        self.session.as_ref()
    }

    /// Leave the detail view, dropping any unsaved edits
    pub fn back(&mut self) {
        self.session = None;
    }

    pub fn set_status(&mut self, index: usize, status: OrderStatus) -> bool {
        self.session
            .as_mut()
            .is_some_and(|session| session.set_status(index, status))
    }

    pub fn begin_save(&mut self) -> Option<SaveRequest> {
        self.session.as_mut()?.begin_save()
    }

    /// Apply the store's answer to `request`.
    ///
    /// A confirmed order always replaces its copy in the list, since the
    /// store now holds it. Only the session the request was issued for is
    /// closed (on success) or reopened for retry (on failure).
    pub fn finish_save(
        &mut self,
        request: &SaveRequest,
        result: Result<Order, ApiError>,
    ) -> Result<Applied, OrdersError> {
        let is_current = self
            .session
            .as_ref()
            .is_some_and(|session| session.ticket() == request.ticket);

        match result {
            Ok(updated) => {
                self.book.replace(&updated);
                if !is_current {
                    return Ok(Applied::Stale);
                }
                self.session = None;
                self.notice = Some(SAVE_SUCCESS_NOTICE.to_string());
                Ok(Applied::Yes)
            }
            Err(source) => {
                if is_current {
                    if let Some(session) = self.session.as_mut() {
                        session.save_failed();
                    }
                }
                Err(OrdersError::SaveFailure {
                    order_id: request.order_id.clone(),
                    source,
                })
            }
        }
    }
}
