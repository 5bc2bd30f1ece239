/// Edit session for a single selected order
///
/// Opening a session copies the order's line items into a draft, every
/// entry seeded with the order's overall status. The draft is a working
/// copy: the source order is untouched until the store confirms a save.

use rust_decimal::Decimal;

use super::data::{Order, OrderStatus};
use super::ticket::Ticket;

/// Editable copy of one line item
#[derive(Debug, Clone, PartialEq)]
pub struct DraftItem {
    pub id: String,
    pub name: String,
    /// Product picture URL
    pub image: String,
    pub price: Option<Decimal>,
    pub quantity: u32,
    pub status: OrderStatus,
}

/// Everything the persistence bridge needs to issue one PUT
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub ticket: Ticket,
    pub order_id: String,
    pub status: OrderStatus,
}

#[derive(Debug, Clone)]
pub struct EditSession {
    ticket: Ticket,
    order: Order,
    draft: Vec<DraftItem>,
    /// Set by any status edit, never cleared while the session lives
    modified: bool,
    /// A PUT for this session is in flight
    saving: bool,
}

impl EditSession {
    /// Build the draft for `order`. The session starts unmodified.
    pub fn open(order: Order, ticket: Ticket) -> Self {
        let seed = order.effective_status();
        let draft = order
            .items
            .iter()
            .map(|item| DraftItem {
                id: item.id.clone(),
                name: item.product_name.clone(),
                image: item.product_image.clone(),
                price: item.price,
                quantity: item.quantity,
                status: seed,
            })
            .collect();

        Self {
            ticket,
            order,
            draft,
            modified: false,
            saving: false,
        }
    }

    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn draft(&self) -> &[DraftItem] {
        &self.draft
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Change the status of draft entry `index`.
    ///
    /// Returns `false` and changes nothing if `index` is out of range.
    pub fn set_status(&mut self, index: usize, status: OrderStatus) -> bool {
        match self.draft.get_mut(index) {
            Some(item) => {
                item.status = status;
                self.modified = true;
                true
            }
            None => false,
        }
    }

    /// Save is offered only for a modified session whose order has an id
    pub fn can_save(&self) -> bool {
        self.modified && !self.saving && self.order.has_id() && !self.draft.is_empty()
    }

    /// Mark the session as saving and describe the request to send.
    ///
    /// The first draft entry's status becomes the status of the whole order.
    /// Returns `None` (and sends nothing) when save is not allowed.
    pub fn begin_save(&mut self) -> Option<SaveRequest> {
        if !self.can_save() {
            return None;
        }
        let status = self.draft.first()?.status;
        self.saving = true;

        Some(SaveRequest {
            ticket: self.ticket,
            order_id: self.order.id.clone(),
            status,
        })
    }

    /// The store rejected the save; the draft and the modified flag stay as they are
    pub fn save_failed(&mut self) {
        self.saving = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::orders::tests::order;
    use crate::state::ticket::Generation;

    fn session(order: Order) -> EditSession {
        let mut generation = Generation::default();
        EditSession::open(order, generation.advance())
    }

    #[test]
    fn test_draft_mirrors_line_items() {
        let mut source = order("o1");
        source.status = Some(OrderStatus::ReadyForDispatch);
        let session = session(source.clone());

        assert_eq!(session.draft().len(), source.items.len());
        assert!(session
            .draft()
            .iter()
            .all(|item| item.status == OrderStatus::ReadyForDispatch));
        assert_eq!(session.draft()[1].name, "Coconut Oil");
        assert_eq!(session.draft()[1].quantity, 2);
        assert!(!session.is_modified());
    }

    #[test]
    fn test_draft_defaults_to_pending() {
        let session = session(order("o1"));
        assert!(session.draft().iter().all(|item| item.status == OrderStatus::Pending));
    }

    #[test]
    fn test_set_status_touches_only_one_entry() {
        let mut session = session(order("o1"));
        let before = session.draft().to_vec();

        assert!(session.set_status(1, OrderStatus::Delivered));

        assert!(session.is_modified());
        assert_eq!(session.draft()[0], before[0]);
        assert_eq!(session.draft()[1].status, OrderStatus::Delivered);
        assert_eq!(session.order().items.len(), 2);
        assert_eq!(session.order().status, None);
    }

    #[test]
    fn test_set_status_out_of_range_is_ignored() {
        let mut session = session(order("o1"));
        assert!(!session.set_status(5, OrderStatus::Delivered));
        assert!(!session.is_modified());
    }

    #[test]
    fn test_unmodified_session_sends_nothing() {
        let mut session = session(order("o1"));
        assert!(!session.can_save());
        assert_eq!(session.begin_save(), None);
        assert!(!session.is_saving());
    }

    #[test]
    fn test_save_uses_first_entry_status() {
        let mut session = session(order("o1"));
        session.set_status(1, OrderStatus::Delivered);
        session.set_status(0, OrderStatus::ReadyForDispatch);

        let request = session.begin_save().unwrap();
        assert_eq!(request.order_id, "o1");
        assert_eq!(request.status, OrderStatus::ReadyForDispatch);
        assert_eq!(request.ticket, session.ticket());
    }

    #[test]
    fn test_save_in_flight_blocks_second_save() {
        let mut session = session(order("o1"));
        session.set_status(0, OrderStatus::Delivered);

        assert!(session.begin_save().is_some());
        assert!(!session.can_save());
        assert_eq!(session.begin_save(), None);

        session.save_failed();
        assert!(session.is_modified());
        assert!(session.can_save());
    }

    #[test]
    fn test_order_without_id_cannot_be_saved() {
        let mut source = order("o1");
        source.id.clear();
        let mut session = session(source);
        session.set_status(0, OrderStatus::Delivered);

        assert!(!session.can_save());
        assert_eq!(session.begin_save(), None);
    }
}
