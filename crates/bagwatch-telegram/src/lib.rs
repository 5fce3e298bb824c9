//! Telegram adapter (teloxide).
//!
//! Implements the `bagwatch-core` NotifierPort over the Telegram Bot API:
//! one text message per alert, followed by a pin drop when the pickup
//! coordinates are known.

use async_trait::async_trait;

use teloxide::prelude::*;

use bagwatch_core::{
    domain::{ChatId, NotificationEvent},
    errors::Error,
    formatting::alert_text,
    ports::NotifierPort,
    Result,
};

#[derive(Clone)]
pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    pub fn new(api_key: &str) -> Self {
        Self {
            bot: Bot::new(api_key),
        }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::Telegram(e.to_string())
    }
}

#[async_trait]
impl NotifierPort for TelegramNotifier {
    async fn send_alert(&self, chat_id: ChatId, event: &NotificationEvent) -> Result<()> {
        self.bot
            .send_message(Self::tg_chat(chat_id), alert_text(event))
            .await
            .map_err(Self::map_err)?;

        if let Some(loc) = &event.location {
            self.bot
                .send_location(Self::tg_chat(chat_id), loc.latitude, loc.longitude)
                .await
                .map_err(Self::map_err)?;
        }

        Ok(())
    }
}
