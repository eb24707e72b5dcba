// Pure mapping from a war snapshot to the fixed-layout row blocks written
// into the sheet. No side effects; everything here is deterministic given
// the snapshot and the caller-supplied "now".

use chrono::NaiveDateTime;
use serde_json::{json, Value};

use crate::coc::{Member, WarSide, WarStatus};
use crate::error::FormatError;
use crate::timefmt;

/// A block of cells, written wholesale at a fixed anchor every cycle.
pub type RowBlock = Vec<Vec<Value>>;

/// Sentinel for absent timestamps and expired countdowns.
pub const NOT_AVAILABLE: &str = "N/A";

/// Fixed roster header; every member row has exactly this many columns.
pub const ROSTER_HEADER: [&str; 14] = [
    "No",
    "Tag",
    "Name",
    "Townhall",
    "Map Pos",
    "Total Stars",
    "Destruction %",
    "1st Attack",
    "Stars",
    "Destruction",
    "2nd Attack",
    "Stars",
    "Destruction",
    "Points",
];

/// Both war sides, or a `FormatError` if the snapshot is malformed at the
/// top level. Missing sides are the only fatal shape problem; every other
/// absent field has a render default.
pub fn sides(war: &WarStatus) -> Result<(&WarSide, &WarSide), FormatError> {
    let clan = war
        .clan
        .as_ref()
        .ok_or(FormatError::MissingSection("clan"))?;
    let opponent = war
        .opponent
        .as_ref()
        .ok_or(FormatError::MissingSection("opponent"))?;
    Ok((clan, opponent))
}

/// Timing block: war state, localized start/end, and a countdown to the end.
///
/// Absent timestamps render as `N/A`. The countdown also renders `N/A` once
/// the end has passed; it is never negative.
pub fn timing_rows(war: &WarStatus, now: NaiveDateTime) -> Result<RowBlock, FormatError> {
    let state = war.state.as_deref().unwrap_or(NOT_AVAILABLE);

    let start = match &war.start_time {
        Some(ts) => timefmt::format_war_time(ts)?,
        None => NOT_AVAILABLE.to_string(),
    };

    let (end, time_left) = match &war.end_time {
        Some(ts) => {
            let end_local = timefmt::parse_war_time(ts)?;
            let left = if now < end_local {
                timefmt::format_duration(end_local - now)
            } else {
                NOT_AVAILABLE.to_string()
            };
            (timefmt::format_local(end_local), left)
        }
        None => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
    };

    Ok(vec![
        vec![json!("War State"), json!(state)],
        vec![json!("War Start Time"), json!(start)],
        vec![json!("War End Time"), json!(end)],
        vec![json!("Time Left"), json!(time_left)],
    ])
}

/// Roster block for one side: header row plus one 14-column row per member,
/// in source order with a 1-based index.
pub fn roster_rows(members: &[Member]) -> RowBlock {
    let mut rows: RowBlock = vec![ROSTER_HEADER.iter().map(|label| json!(label)).collect()];

    for (i, member) in members.iter().enumerate() {
        let mut row = vec![
            json!(i + 1),
            json!(member.tag),
            json!(member.name),
            json!(member.townhall_level),
            json!(member.map_position),
            json!(member.stars),
            json!(percent(member.destruction_percentage)),
        ];

        // Always two attack slots; empty attempts keep the row at 14 columns.
        for slot in 0..2 {
            match member.attacks.get(slot) {
                Some(attack) => {
                    row.push(json!(attack.attacker_tag));
                    row.push(json!(attack.stars));
                    row.push(json!(percent(attack.destruction_percentage)));
                }
                None => {
                    row.push(json!(""));
                    row.push(json!(""));
                    row.push(json!("0%"));
                }
            }
        }

        row.push(json!(member.attacks.len()));
        rows.push(row);
    }

    rows
}

/// Summary block: title row plus label/value pairs for both sides' totals.
pub fn summary_rows(war: &WarStatus, clan: &WarSide, opponent: &WarSide) -> RowBlock {
    vec![
        vec![json!("Summary")],
        vec![json!("War State:"), json!(war.state.as_deref().unwrap_or(""))],
        vec![json!("Team Size:"), json!(war.team_size)],
        vec![json!("Our Stars:"), json!(clan.stars)],
        vec![json!("Enemy Stars:"), json!(opponent.stars)],
        vec![json!("Our Destruction:"), json!(percent(clan.destruction_percentage))],
        vec![json!("Enemy Destruction:"), json!(percent(opponent.destruction_percentage))],
    ]
}

/// Suffix a destruction value with `%`, dropping a trailing `.0` on whole
/// numbers so defaults render as `0%`.
fn percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}%", value as i64)
    } else {
        format!("{value}%")
    }
}
