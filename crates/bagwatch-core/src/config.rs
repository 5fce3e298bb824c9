use std::{env, fs, path::Path, time::Duration};

use crate::{domain::ChatId, errors::Error, Result};

/// Typed configuration, loaded once at startup.
///
/// Everything comes from environment variables (with an optional `.env` file
/// for local runs); the loaded value is immutable and handed to the
/// collaborators by reference.
#[derive(Clone, Debug)]
pub struct Config {
    // TGTG session credentials
    pub tgtg_access_token: String,
    pub tgtg_refresh_token: String,
    pub tgtg_user_id: String,
    pub tgtg_cookie: String,

    // Telegram
    pub telegram_api_key: String,
    pub telegram_chat_id: ChatId,

    // HTTP
    pub http_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let tgtg_access_token = required("TGTG_ACCESS_TOKEN")?;
        let tgtg_refresh_token = required("TGTG_REFRESH_TOKEN")?;
        let tgtg_user_id = required("TGTG_USER_ID")?;
        let tgtg_cookie = required("TGTG_COOKIE")?;

        let telegram_api_key = required("TELEGRAM_API_KEY")?;
        let chat_id_raw = required("TELEGRAM_CHAT_ID")?;
        let telegram_chat_id = ChatId(chat_id_raw.trim().parse::<i64>().map_err(|_| {
            Error::Config(format!(
                "TELEGRAM_CHAT_ID must be a numeric chat id, got {chat_id_raw:?}"
            ))
        })?);

        let http_timeout = Duration::from_millis(env_u64("TGTG_HTTP_TIMEOUT_MS").unwrap_or(30_000));

        Ok(Self {
            tgtg_access_token,
            tgtg_refresh_token,
            tgtg_user_id,
            tgtg_cookie,
            telegram_api_key,
            telegram_chat_id,
            http_timeout,
        })
    }
}

fn required(key: &str) -> Result<String> {
    match env_str(key).and_then(non_empty) {
        Some(v) => Ok(v),
        None => Err(Error::Config(format!(
            "{key} environment variable is required"
        ))),
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_rejects_whitespace() {
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty("x".to_string()), Some("x".to_string()));
    }

    #[test]
    fn missing_required_var_names_the_key() {
        let err = required("BAGWATCH_TEST_UNSET_VAR").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("BAGWATCH_TEST_UNSET_VAR"));
        assert!(msg.contains("required"));
    }

    #[test]
    fn dotenv_parses_quotes_and_skips_comments() {
        let path = std::env::temp_dir().join(format!(
            "bagwatch-dotenv-{}-{}.env",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis()
        ));
        fs::write(
            &path,
            "# comment\nBAGWATCH_TEST_DOTENV_A='quoted value'\nBAGWATCH_TEST_DOTENV_B=plain\n",
        )
        .unwrap();

        load_dotenv_if_present(&path);
        assert_eq!(
            env::var("BAGWATCH_TEST_DOTENV_A").ok().as_deref(),
            Some("quoted value")
        );
        assert_eq!(
            env::var("BAGWATCH_TEST_DOTENV_B").ok().as_deref(),
            Some("plain")
        );

        let _ = fs::remove_file(&path);
    }
}
