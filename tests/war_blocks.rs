// Integration tests for the snapshot-to-row-block pipeline: a raw API body
// deserialized through the war model and formatted into the blocks the
// update cycle writes.

use serde_json::json;

use war_report_backend::coc::WarStatus;
use war_report_backend::rows::{self, ROSTER_HEADER};
use war_report_backend::timefmt;

fn war_snapshot() -> WarStatus {
    serde_json::from_str(
        r##"{
            "state": "inWar",
            "teamSize": 2,
            "preparationStartTime": "20231231T120000.000Z",
            "startTime": "20240101T120000.000Z",
            "endTime": "20240102T120000.000Z",
            "clan": {
                "tag": "#PQJJQ2PG",
                "name": "Our Clan",
                "clanLevel": 10,
                "attacks": 3,
                "stars": 5,
                "destructionPercentage": 72.5,
                "members": [
                    {
                        "tag": "#AAA111",
                        "name": "Alpha",
                        "townhallLevel": 14,
                        "mapPosition": 1,
                        "stars": 5,
                        "destructionPercentage": 95.5,
                        "opponentAttacks": 1,
                        "attacks": [
                            {"attackerTag": "#AAA111", "defenderTag": "#ZZZ111", "stars": 3, "destructionPercentage": 100.0, "order": 1, "duration": 140},
                            {"attackerTag": "#AAA111", "defenderTag": "#ZZZ222", "stars": 2, "destructionPercentage": 91.0, "order": 3, "duration": 180}
                        ]
                    },
                    {
                        "tag": "#BBB222",
                        "name": "Bravo",
                        "townhallLevel": 12,
                        "mapPosition": 2
                    }
                ]
            },
            "opponent": {
                "tag": "#ENEMY01",
                "name": "Enemy Clan",
                "stars": 4,
                "destructionPercentage": 61.0,
                "members": [
                    {
                        "tag": "#ZZZ111",
                        "name": "Zulu",
                        "townhallLevel": 13,
                        "mapPosition": 1,
                        "stars": 2,
                        "destructionPercentage": 70.0,
                        "attacks": [
                            {"attackerTag": "#ZZZ111", "defenderTag": "#AAA111", "stars": 2, "destructionPercentage": 70.0, "order": 2, "duration": 166}
                        ]
                    }
                ]
            }
        }"##,
    )
    .unwrap()
}

// ── Full pipeline ─────────────────────────────────────────────────────

#[test]
fn pipeline_produces_all_four_blocks() {
    let war = war_snapshot();
    let now = timefmt::parse_war_time("20240102T060000.000Z").unwrap();

    let timing = rows::timing_rows(&war, now).unwrap();
    let (clan, opponent) = rows::sides(&war).unwrap();
    let clan_rows = rows::roster_rows(&clan.members);
    let opponent_rows = rows::roster_rows(&opponent.members);
    let summary = rows::summary_rows(&war, clan, opponent);

    assert_eq!(timing.len(), 4);
    assert_eq!(clan_rows.len(), 3); // header + 2 members
    assert_eq!(opponent_rows.len(), 2); // header + 1 member
    assert_eq!(summary.len(), 7);
}

#[test]
fn pipeline_timing_block_matches_layout() {
    let war = war_snapshot();
    let now = timefmt::parse_war_time("20240102T060000.000Z").unwrap();
    let timing = rows::timing_rows(&war, now).unwrap();

    assert_eq!(timing[0], vec![json!("War State"), json!("inWar")]);
    assert_eq!(
        timing[1],
        vec![json!("War Start Time"), json!("2024-01-01 17:30")]
    );
    assert_eq!(
        timing[2],
        vec![json!("War End Time"), json!("2024-01-02 17:30")]
    );
    assert_eq!(timing[3], vec![json!("Time Left"), json!("6:00:00")]);
}

#[test]
fn pipeline_roster_rows_keep_source_order_and_width() {
    let war = war_snapshot();
    let (clan, _) = rows::sides(&war).unwrap();
    let rows = rows::roster_rows(&clan.members);

    let header: Vec<_> = ROSTER_HEADER.iter().map(|l| json!(l)).collect();
    assert_eq!(rows[0], header);

    for row in &rows {
        assert_eq!(row.len(), 14);
    }

    // 1-based index follows source order, not map position.
    assert_eq!(rows[1][0], json!(1));
    assert_eq!(rows[1][2], json!("Alpha"));
    assert_eq!(rows[2][0], json!(2));
    assert_eq!(rows[2][2], json!("Bravo"));

    // Bravo has not attacked: placeholder slots, zero count.
    assert_eq!(rows[2][7], json!(""));
    assert_eq!(rows[2][9], json!("0%"));
    assert_eq!(rows[2][13], json!(0));
}

#[test]
fn pipeline_summary_block_reads_both_sides() {
    let war = war_snapshot();
    let (clan, opponent) = rows::sides(&war).unwrap();
    let summary = rows::summary_rows(&war, clan, opponent);

    assert_eq!(summary[2], vec![json!("Team Size:"), json!(2)]);
    assert_eq!(summary[3], vec![json!("Our Stars:"), json!(5)]);
    assert_eq!(summary[4], vec![json!("Enemy Stars:"), json!(4)]);
    assert_eq!(summary[5], vec![json!("Our Destruction:"), json!("72.5%")]);
    assert_eq!(summary[6], vec![json!("Enemy Destruction:"), json!("61%")]);
}

#[test]
fn pipeline_is_idempotent_for_identical_snapshots() {
    let war_a = war_snapshot();
    let war_b = war_snapshot();
    let now = timefmt::parse_war_time("20240102T060000.000Z").unwrap();

    let (clan_a, opp_a) = rows::sides(&war_a).unwrap();
    let (clan_b, opp_b) = rows::sides(&war_b).unwrap();

    assert_eq!(
        rows::timing_rows(&war_a, now).unwrap(),
        rows::timing_rows(&war_b, now).unwrap()
    );
    assert_eq!(
        rows::roster_rows(&clan_a.members),
        rows::roster_rows(&clan_b.members)
    );
    assert_eq!(
        rows::summary_rows(&war_a, clan_a, opp_a),
        rows::summary_rows(&war_b, clan_b, opp_b)
    );
}

// ── Degenerate snapshots ──────────────────────────────────────────────

#[test]
fn pipeline_not_in_war_snapshot_formats_timing_only() {
    let war: WarStatus = serde_json::from_str(r#"{"state": "notInWar"}"#).unwrap();
    let now = timefmt::parse_war_time("20240101T000000.000Z").unwrap();

    let timing = rows::timing_rows(&war, now).unwrap();
    assert_eq!(timing[0], vec![json!("War State"), json!("notInWar")]);
    assert_eq!(timing[1], vec![json!("War Start Time"), json!("N/A")]);
    assert_eq!(timing[2], vec![json!("War End Time"), json!("N/A")]);
    assert_eq!(timing[3], vec![json!("Time Left"), json!("N/A")]);

    // The rosters cannot be formatted; the cycle aborts there.
    assert!(rows::sides(&war).is_err());
}

#[test]
fn pipeline_time_left_never_negative() {
    let war = war_snapshot();
    // A day after the war ended.
    let now = timefmt::parse_war_time("20240103T120000.000Z").unwrap();
    let timing = rows::timing_rows(&war, now).unwrap();
    assert_eq!(timing[3], vec![json!("Time Left"), json!("N/A")]);
}
