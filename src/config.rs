// Application configuration, loaded once from environment variables.

use std::time::Duration;

use crate::error::StartupError;

/// Default clan to report on when `CLAN_TAG` is unset.
pub const DEFAULT_CLAN_TAG: &str = "#PQJJQ2PG";
/// Default destination spreadsheet ("war report").
pub const DEFAULT_SPREADSHEET_ID: &str = "1r2qMX1473Jyvck9xepTzyPoKiIqKrdnAB9ulx8dzMRI";
pub const DEFAULT_WORKSHEET: &str = "Sheet1";
pub const DEFAULT_PORT: u16 = 10000;

/// Attempts made at startup to open the spreadsheet before giving up.
pub const SHEET_RETRY_LIMIT: u32 = 5;
/// Delay between those attempts.
pub const SHEET_RETRY_DELAY: Duration = Duration::from_secs(60);

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the CoC API.
    pub coc_api_token: String,
    /// Base64-encoded service-account JSON key for the Sheets API.
    pub google_creds_b64: String,
    /// Clan tag, stored percent-escaped (`#` becomes `%23`).
    pub clan_tag: String,
    /// Destination spreadsheet ID.
    pub spreadsheet_id: String,
    /// Worksheet (tab) name within the spreadsheet.
    pub worksheet: String,
    /// Port to bind the HTTP server to.
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `COC_API_TOKEN` - CoC API bearer token (required)
    /// - `GOOGLE_CREDS_B64` - base64 service-account key (required)
    /// - `CLAN_TAG` - clan to report on (default `#PQJJQ2PG`)
    /// - `SPREADSHEET_ID` - destination spreadsheet (default: the war report sheet)
    /// - `WORKSHEET_NAME` - worksheet tab (default `Sheet1`)
    /// - `PORT` - HTTP server port (default 10000)
    pub fn load() -> Result<Self, StartupError> {
        let coc_api_token = std::env::var("COC_API_TOKEN")
            .map_err(|_| StartupError::MissingEnv("COC_API_TOKEN"))?;
        let google_creds_b64 = std::env::var("GOOGLE_CREDS_B64")
            .map_err(|_| StartupError::MissingEnv("GOOGLE_CREDS_B64"))?;

        let clan_tag = escape_clan_tag(
            &std::env::var("CLAN_TAG").unwrap_or_else(|_| DEFAULT_CLAN_TAG.to_string()),
        );

        let spreadsheet_id = std::env::var("SPREADSHEET_ID")
            .unwrap_or_else(|_| DEFAULT_SPREADSHEET_ID.to_string());
        let worksheet =
            std::env::var("WORKSHEET_NAME").unwrap_or_else(|_| DEFAULT_WORKSHEET.to_string());

        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Config {
            coc_api_token,
            google_creds_b64,
            clan_tag,
            spreadsheet_id,
            worksheet,
            port,
        })
    }
}

/// Percent-escape the `#` prefix so the tag can be embedded in a URL path.
pub fn escape_clan_tag(tag: &str) -> String {
    tag.replace('#', "%23")
}
