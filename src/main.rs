use std::sync::Arc;

use war_report_backend::coc::WarClient;
use war_report_backend::config::{Config, SHEET_RETRY_DELAY, SHEET_RETRY_LIMIT};
use war_report_backend::cycle::AppContext;
use war_report_backend::error::StartupError;
use war_report_backend::sheets::{decode_service_account, SheetsClient};
use war_report_backend::{api, scheduler};

/// Obtain the initial sheet handle, retrying a fixed number of times. After
/// startup the handle is reused for the process lifetime with no reconnect.
async fn open_sheet_with_retry(sheets: &SheetsClient) -> Result<(), StartupError> {
    for attempt in 1..=SHEET_RETRY_LIMIT {
        match sheets.open().await {
            Ok(()) => return Ok(()),
            Err(e) => {
                tracing::error!(
                    "sheet access error (attempt {attempt}/{SHEET_RETRY_LIMIT}): {e}"
                );
                if attempt < SHEET_RETRY_LIMIT {
                    tokio::time::sleep(SHEET_RETRY_DELAY).await;
                }
            }
        }
    }
    Err(StartupError::SheetUnavailable {
        attempts: SHEET_RETRY_LIMIT,
    })
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::load().expect("Missing required configuration");

    let key = decode_service_account(&config.google_creds_b64)
        .expect("Failed to decode GOOGLE_CREDS_B64");
    let sheets = Arc::new(SheetsClient::new(
        key,
        config.spreadsheet_id.clone(),
        config.worksheet.clone(),
    ));
    open_sheet_with_retry(&sheets)
        .await
        .expect("Too many retries accessing the spreadsheet");

    let ctx = AppContext {
        war: Arc::new(WarClient::new(
            config.coc_api_token.clone(),
            config.clan_tag.clone(),
        )),
        sheets,
    };

    // Background refresh loop; the manual-trigger route shares the same
    // clients and may run a cycle concurrently with it.
    scheduler::spawn_update_worker(ctx.clone());

    let app = api::router(ctx);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("Failed to bind HTTP port");

    tracing::info!("war report backend listening on port {}", config.port);
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
