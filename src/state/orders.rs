/// The order collection behind the list view
///
/// The book is the single source of truth for orders on screen. It is
/// filled once per mount and only changes afterwards when a save succeeds.

use super::data::Order;
use super::pagination::{self, PageNav, PageWindow};
use super::ticket::{Generation, Ticket};
use crate::error::{ApiError, OrdersError};

/// Where the one load per mount currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// What happened to an async completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Yes,
    /// Issued under a ticket that is no longer current; nothing changed
    Stale,
}

#[derive(Debug)]
pub struct OrderBook {
    orders: Vec<Order>,
    /// Requested page; the window clamps it on read
    page: usize,
    page_size: usize,
    load_state: LoadState,
    loads: Generation,
}

impl OrderBook {
    pub fn new(page_size: usize) -> Self {
        Self {
            orders: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
            load_state: LoadState::Idle,
            loads: Generation::default(),
        }
    }

    /// Start a (re)load: forget everything shown and invalidate older loads
    pub fn begin_load(&mut self) -> Ticket {
        self.orders.clear();
        self.page = 1;
        self.load_state = LoadState::Loading;
        self.loads.advance()
    }

    /// Apply the result of the load issued under `ticket`.
    ///
    /// A failure leaves the collection empty and is returned for logging.
    pub fn finish_load(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<Order>, ApiError>,
    ) -> Result<Applied, OrdersError> {
        if !self.loads.is_current(ticket) {
            return Ok(Applied::Stale);
        }

        match result {
            Ok(orders) => {
                self.orders = orders;
                self.load_state = LoadState::Loaded;
                Ok(Applied::Yes)
            }
            Err(err) => {
                self.orders.clear();
                self.load_state = LoadState::Failed;
                Err(OrdersError::LoadFailure(err))
            }
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Order> {
        self.orders.get(index)
    }

    pub fn window(&self) -> PageWindow {
        pagination::window(self.orders.len(), self.page_size, self.page)
    }

    /// Orders on the current page, paired with their index in the collection
    pub fn visible(&self) -> impl Iterator<Item = (usize, &Order)> {
        let range = self.window().range;
        self.orders[range.clone()]
            .iter()
            .enumerate()
            .map(move |(offset, order)| (range.start + offset, order))
    }

    pub fn navigate(&mut self, nav: PageNav) {
        self.page = pagination::navigate(self.page, nav, self.orders.len(), self.page_size);
    }

    /// Replace every order carrying `updated.id` with the server's copy.
    ///
    /// Returns how many entries were replaced.
    pub fn replace(&mut self, updated: &Order) -> usize {
        let mut replaced = 0;
        for order in self.orders.iter_mut().filter(|o| o.id == updated.id) {
            *order = updated.clone();
            replaced += 1;
        }
        replaced
    }
}
