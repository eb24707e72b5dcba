// Error taxonomy: one enum per failing step, collapsed to log-and-continue
// at the update-cycle boundary.

use thiserror::Error;

/// Fatal startup failures. The process does not start serving if any of
/// these occur.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),
    #[error("invalid service account credentials: {0}")]
    BadCredentials(String),
    #[error("could not open spreadsheet after {attempts} attempts")]
    SheetUnavailable { attempts: u32 },
}

/// Failures reading the current-war endpoint. The fetcher never retries;
/// the error surfaces straight to the cycle boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("war api returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("war api request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Failures mapping a war snapshot into row blocks. Missing optional fields
/// never end up here; only a malformed top-level shape does.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("war data missing `{0}` section")]
    MissingSection(&'static str),
    #[error("unparseable war timestamp: {0}")]
    BadTimestamp(#[from] chrono::ParseError),
}

/// Failures writing to the spreadsheet, including token-exchange failures.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("sheets api returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("sheets request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service account auth failed: {0}")]
    Auth(String),
}

/// Any failure inside one update cycle. Caught by the scheduler (logged) or
/// the manual-trigger handler (returned as body text); never escapes further.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("format failed: {0}")]
    Format(#[from] FormatError),
    #[error("write failed: {0}")]
    Write(#[from] WriteError),
}
