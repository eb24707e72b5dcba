// One update cycle: marker row, fetch, timing block, rosters, summary.
// Errors stop the cycle early and are handled by the caller; the next
// scheduled or manual run is the only retry.

use std::sync::Arc;

use serde_json::json;

use crate::coc::WarClient;
use crate::error::CycleError;
use crate::rows;
use crate::sheets::SheetsClient;
use crate::timefmt;

// Fixed anchors in the destination worksheet.
pub const MARKER_CELL: &str = "B5";
pub const TIMING_ANCHOR: &str = "A1";
pub const CLAN_ANCHOR: &str = "A7";
pub const OPPONENT_ANCHOR: &str = "A60";
pub const SUMMARY_ANCHOR: &str = "A120";

/// Shared handles, built once at startup and passed to every component that
/// needs them. Cloning shares the underlying clients.
#[derive(Clone)]
pub struct AppContext {
    pub war: Arc<WarClient>,
    pub sheets: Arc<SheetsClient>,
}

/// What kicked off a cycle; only the marker-row label differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleKind {
    Scheduled,
    Manual,
}

impl CycleKind {
    pub fn label(self) -> &'static str {
        match self {
            CycleKind::Scheduled => "War data updated",
            CycleKind::Manual => "Manual update",
        }
    }
}

/// Run one fetch-format-write cycle. Returns the local timestamp stamped
/// into the marker row so callers can echo it.
pub async fn run_cycle(ctx: &AppContext, kind: CycleKind) -> Result<String, CycleError> {
    let now = timefmt::now_local();
    let stamp = timefmt::format_stamp(now);

    ctx.sheets
        .write(
            MARKER_CELL,
            &[vec![json!(format!("{} at {}", kind.label(), stamp))]],
        )
        .await?;

    let war = ctx.war.fetch_current_war().await?;

    let timing = rows::timing_rows(&war, now)?;
    ctx.sheets.write(TIMING_ANCHOR, &timing).await?;

    let (clan, opponent) = rows::sides(&war)?;
    ctx.sheets.write(CLAN_ANCHOR, &rows::roster_rows(&clan.members)).await?;
    ctx.sheets
        .write(OPPONENT_ANCHOR, &rows::roster_rows(&opponent.members))
        .await?;
    ctx.sheets
        .write(SUMMARY_ANCHOR, &rows::summary_rows(&war, clan, opponent))
        .await?;

    Ok(stamp)
}
