//! Too Good To Go adapter.
//!
//! Implements the `bagwatch-core` FavoritesPort against the TGTG app API.
//! There is no official client; this speaks the same endpoints the mobile app
//! (and the community Python client) use: a token refresh followed by the
//! favorites-only item listing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use bagwatch_core::{
    domain::{FavoriteItem, GeoPoint, ItemId, PickupWindow},
    errors::Error,
    ports::FavoritesPort,
    Result,
};

const BASE_URL: &str = "https://apptoogoodtogo.com/api";
const REFRESH_ENDPOINT: &str = "/auth/v4/token/refresh";
const ITEM_ENDPOINT: &str = "/item/v8/";

// The API rejects unknown clients; present ourselves as the Android app.
const USER_AGENT: &str = "TGTG/24.4.1 Dalvik/2.1.0 (Linux; U; Android 10; SM-G935F Build/NRD90M)";

const LISTING_PAGE_SIZE: u32 = 100;

#[derive(Clone, Debug)]
pub struct TgtgCredentials {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: String,
    pub cookie: String,
}

pub struct TgtgClient {
    http: reqwest::Client,
    user_id: String,
    cookie: String,
    access_token: String,
    refresh_token: String,
}

impl TgtgClient {
    pub fn new(creds: TgtgCredentials, timeout: std::time::Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client build");
        Self {
            http,
            user_id: creds.user_id,
            cookie: creds.cookie,
            access_token: creds.access_token,
            refresh_token: creds.refresh_token,
        }
    }

    /// Trade the stored refresh token for a fresh access token.
    ///
    /// The API rotates the refresh token and may reissue the session cookie;
    /// both replace the stored values for the rest of this run.
    pub async fn refresh_session(&mut self) -> Result<()> {
        let resp = self
            .http
            .post(format!("{BASE_URL}{REFRESH_ENDPOINT}"))
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::COOKIE, &self.cookie)
            .json(&serde_json::json!({ "refresh_token": self.refresh_token }))
            .send()
            .await
            .map_err(|e| Error::Api(format!("tgtg refresh request error: {e}")))?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(Error::Auth(format!("tgtg rejected refresh token: {status}")));
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api(format!(
                "tgtg refresh failed: {status} {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        if let Some(cookie) = resp
            .headers()
            .get(reqwest::header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
        {
            // Keep only the name=value pair, not the cookie attributes.
            self.cookie = cookie.split(';').next().unwrap_or(cookie).to_string();
        }

        let tokens: RefreshResponse = resp
            .json()
            .await
            .map_err(|e| Error::Api(format!("tgtg refresh json error: {e}")))?;

        self.access_token = tokens.access_token;
        self.refresh_token = tokens.refresh_token;
        tracing::debug!("tgtg session refreshed");
        Ok(())
    }

    /// Fetch the current favorites listing for the account.
    pub async fn favorites(&self) -> Result<Vec<FavoriteItem>> {
        let body = serde_json::json!({
            "user_id": self.user_id,
            "origin": { "latitude": 0.0, "longitude": 0.0 },
            "radius": 21,
            "page_size": LISTING_PAGE_SIZE,
            "page": 1,
            "discover": false,
            "favorites_only": true,
            "with_stock_only": false,
        });

        let resp = self
            .http
            .post(format!("{BASE_URL}{ITEM_ENDPOINT}"))
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::COOKIE, &self.cookie)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Api(format!("tgtg listing request error: {e}")))?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(Error::Auth(format!("tgtg rejected access token: {status}")));
        }
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(Error::Api(format!(
                "tgtg listing failed: {status} {}",
                text.chars().take(200).collect::<String>()
            )));
        }

        let listing: ListingResponse = resp
            .json()
            .await
            .map_err(|e| Error::Api(format!("tgtg listing json error: {e}")))?;

        Ok(listing.items.iter().map(map_entry).collect())
    }
}

#[async_trait]
impl FavoritesPort for TgtgClient {
    async fn fetch_favorites(&mut self) -> Result<Vec<FavoriteItem>> {
        self.refresh_session().await?;
        self.favorites().await
    }
}

#[derive(Deserialize)]
struct RefreshResponse {
    access_token: String,
    refresh_token: String,
}

#[derive(Deserialize)]
struct ListingResponse {
    #[serde(default)]
    items: Vec<ListingEntry>,
}

#[derive(Deserialize)]
struct ListingEntry {
    item: ListingItem,
    display_name: Option<String>,
    items_available: Option<u32>,
    pickup_interval: Option<RawInterval>,
    pickup_location: Option<RawPickupLocation>,
}

#[derive(Deserialize)]
struct ListingItem {
    item_id: String,
}

#[derive(Deserialize)]
struct RawInterval {
    start: Option<String>,
    end: Option<String>,
}

#[derive(Deserialize)]
struct RawPickupLocation {
    location: Option<RawLocation>,
}

#[derive(Deserialize)]
struct RawLocation {
    latitude: f64,
    longitude: f64,
}

fn map_entry(entry: &ListingEntry) -> FavoriteItem {
    let pickup = entry.pickup_interval.as_ref().and_then(|iv| {
        let start = parse_instant(iv.start.as_deref()?)?;
        let end = parse_instant(iv.end.as_deref()?)?;
        Some(PickupWindow { start, end })
    });

    let location = entry
        .pickup_location
        .as_ref()
        .and_then(|pl| pl.location.as_ref())
        .map(|loc| GeoPoint {
            latitude: loc.latitude,
            longitude: loc.longitude,
        });

    FavoriteItem {
        item_id: ItemId(entry.item.item_id.clone()),
        display_name: entry.display_name.clone().unwrap_or_default(),
        items_available: entry.items_available.unwrap_or(0),
        pickup,
        location,
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
