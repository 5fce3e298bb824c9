/// Core error type for the watcher.
///
/// Adapter crates map their transport-specific errors into this type so the
/// run loop can treat every failure the same way: abort the invocation and
/// let the next scheduled run start clean.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("tgtg auth error: {0}")]
    Auth(String),

    #[error("tgtg api error: {0}")]
    Api(String),

    #[error("telegram error: {0}")]
    Telegram(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
