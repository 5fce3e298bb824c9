//! Notification gate.
//!
//! The one real decision in this program: which of this run's favorites
//! deserve a Telegram alert. An item qualifies iff it currently has bags
//! available. De-duplication across runs ("at most one alert every two
//! hours") is left to the scheduler driving the process, so the gate stays a
//! pure function of the current poll.

use crate::domain::{FavoriteItem, NotificationEvent};

/// Select the items that should trigger an alert this run.
///
/// Order-preserving: events come out in the same relative order the poller
/// returned the items. Empty input yields empty output.
pub fn qualifying(items: &[FavoriteItem]) -> Vec<NotificationEvent> {
    items
        .iter()
        .filter(|item| item.items_available > 0)
        .map(NotificationEvent::from_item)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;

    fn item(id: &str, available: u32) -> FavoriteItem {
        FavoriteItem {
            item_id: ItemId(id.to_string()),
            display_name: format!("Shop {id}"),
            items_available: available,
            pickup: None,
            location: None,
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(qualifying(&[]).is_empty());
    }

    #[test]
    fn sold_out_items_are_skipped() {
        let events = qualifying(&[item("a", 0), item("b", 3)]);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].item_id, ItemId("b".to_string()));
        assert_eq!(events[0].items_available, 3);
    }

    #[test]
    fn all_zero_counts_produce_no_events() {
        let events = qualifying(&[item("a", 0), item("b", 0), item("c", 0)]);
        assert!(events.is_empty());
    }

    #[test]
    fn output_length_matches_available_count() {
        let items = vec![item("a", 5), item("b", 0), item("c", 2), item("d", 0)];
        let expected = items.iter().filter(|i| i.items_available > 0).count();
        assert_eq!(qualifying(&items).len(), expected);
    }

    #[test]
    fn relative_order_is_preserved() {
        let events = qualifying(&[item("a", 5), item("b", 2)]);
        let ids: Vec<&str> = events.iter().map(|e| e.item_id.0.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn gate_is_idempotent() {
        let items = vec![item("a", 1), item("b", 0), item("c", 7)];
        assert_eq!(qualifying(&items), qualifying(&items));
    }
}
