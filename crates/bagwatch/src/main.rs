use bagwatch_core::{app, config::Config};
use bagwatch_telegram::TelegramNotifier;
use bagwatch_tgtg::{TgtgClient, TgtgCredentials};

use tracing::info;

#[tokio::main]
async fn main() -> Result<(), bagwatch_core::Error> {
    bagwatch_core::logging::init("bagwatch")?;

    let cfg = Config::load()?;

    let mut tgtg = TgtgClient::new(
        TgtgCredentials {
            access_token: cfg.tgtg_access_token.clone(),
            refresh_token: cfg.tgtg_refresh_token.clone(),
            user_id: cfg.tgtg_user_id.clone(),
            cookie: cfg.tgtg_cookie.clone(),
        },
        cfg.http_timeout,
    );
    let notifier = TelegramNotifier::new(&cfg.telegram_api_key);

    let summary = app::run(&mut tgtg, &notifier, cfg.telegram_chat_id).await?;
    info!(
        checked = summary.checked,
        alerted = summary.alerted,
        "run complete"
    );

    Ok(())
}
