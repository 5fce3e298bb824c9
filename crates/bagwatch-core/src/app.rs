//! One invocation of the watcher: poll, gate, alert, exit.

use tracing::info;

use crate::{
    domain::ChatId,
    gate,
    ports::{FavoritesPort, NotifierPort},
    Result,
};

/// What a completed run did, for the final log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub checked: usize,
    pub alerted: usize,
}

/// Run the poller → gate → notifier pipeline once.
///
/// Strictly sequential; the first failure aborts the run and surfaces as the
/// process error. Alerts are attempted in the order the poller returned the
/// qualifying items.
pub async fn run(
    favorites: &mut dyn FavoritesPort,
    notifier: &dyn NotifierPort,
    chat_id: ChatId,
) -> Result<RunSummary> {
    let items = favorites.fetch_favorites().await?;
    info!(count = items.len(), "fetched favorites");

    let events = gate::qualifying(&items);
    for event in &events {
        notifier.send_alert(chat_id, event).await?;
        info!(
            item = %event.item_id.0,
            shop = %event.display_name,
            available = event.items_available,
            "alert sent"
        );
    }

    Ok(RunSummary {
        checked: items.len(),
        alerted: events.len(),
    })
}
