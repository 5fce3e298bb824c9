use chrono::{DateTime, Utc};

/// TGTG item id (string on the wire).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemId(pub String);

/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Pickup window for a bag, as reported by the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickupWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Store coordinates for the pickup pin drop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A favorited offer as seen in one poll of the account API.
///
/// Produced fresh each run and discarded at exit; nothing here survives
/// across invocations.
#[derive(Clone, Debug, PartialEq)]
pub struct FavoriteItem {
    pub item_id: ItemId,
    pub display_name: String,
    pub items_available: u32,
    pub pickup: Option<PickupWindow>,
    pub location: Option<GeoPoint>,
}

/// A decision to alert the user about one item, made by the gate.
///
/// Only ever created for items with `items_available > 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationEvent {
    pub item_id: ItemId,
    pub display_name: String,
    pub items_available: u32,
    pub pickup: Option<PickupWindow>,
    pub location: Option<GeoPoint>,
}

impl NotificationEvent {
    pub fn from_item(item: &FavoriteItem) -> Self {
        Self {
            item_id: item.item_id.clone(),
            display_name: item.display_name.clone(),
            items_available: item.items_available,
            pickup: item.pickup,
            location: item.location,
        }
    }
}
