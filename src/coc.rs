// Clash of Clans API client and the current-war data model.

use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::FetchError;

pub const COC_API_BASE: &str = "https://api.clashofclans.com/v1";

// ── Data model ────────────────────────────────────────────────────────
//
// Every field below the top level is defaulted: the API omits timing fields
// before a war starts and attack lists before anyone attacks, and a partial
// snapshot must still format. Only `clan`/`opponent` stay `Option` so their
// absence can be reported as a malformed snapshot by the row formatter.

/// One current-war snapshot. Lives for a single update cycle; never cached
/// or diffed against a previous snapshot.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarStatus {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub team_size: u32,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub clan: Option<WarSide>,
    #[serde(default)]
    pub opponent: Option<WarSide>,
}

/// One side of the war (own clan or opponent).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarSide {
    #[serde(default)]
    pub stars: i64,
    #[serde(default)]
    pub destruction_percentage: f64,
    #[serde(default)]
    pub members: Vec<Member>,
}

/// A rostered member. Source ordering is preserved and used for the 1-based
/// display index in the sheet.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub name: String,
    // Not camelCase in the API: lowercase `h`.
    #[serde(default, rename = "townhallLevel")]
    pub townhall_level: u32,
    #[serde(default)]
    pub map_position: u32,
    #[serde(default)]
    pub stars: i64,
    #[serde(default)]
    pub destruction_percentage: f64,
    #[serde(default)]
    pub attacks: Vec<Attack>,
}

/// One attack attempt (members get up to two per war).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    #[serde(default)]
    pub attacker_tag: String,
    #[serde(default)]
    pub stars: i64,
    #[serde(default)]
    pub destruction_percentage: f64,
}

// ── Client ────────────────────────────────────────────────────────────

/// Authenticated client for the current-war endpoint.
#[derive(Debug, Clone)]
pub struct WarClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    clan_tag: String,
}

impl WarClient {
    /// `clan_tag` must already be percent-escaped (see `config::escape_clan_tag`).
    pub fn new(token: String, clan_tag: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: COC_API_BASE.to_string(),
            token,
            clan_tag,
        }
    }

    /// Fetch the clan's current war. One request, no retries; any failure
    /// surfaces immediately to the cycle boundary.
    pub async fn fetch_current_war(&self) -> Result<WarStatus, FetchError> {
        let url = format!("{}/clans/{}/currentwar", self.base_url, self.clan_tag);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
