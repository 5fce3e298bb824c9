use async_trait::async_trait;

use crate::{
    domain::{ChatId, FavoriteItem, NotificationEvent},
    Result,
};

/// Port for the marketplace side: one poll of the account's favorites.
///
/// `&mut self` because fetching may rotate session tokens in the adapter.
#[async_trait]
pub trait FavoritesPort: Send {
    async fn fetch_favorites(&mut self) -> Result<Vec<FavoriteItem>>;
}

/// Port for the alerting side.
///
/// Telegram is the first implementation; the shape leaves room for other
/// messengers behind the same interface.
#[async_trait]
pub trait NotifierPort: Send + Sync {
    async fn send_alert(&self, chat_id: ChatId, event: &NotificationEvent) -> Result<()>;
}
