//! Snapshot tests for the exported conversion log

use chrono::{DateTime, Local, TimeZone};
use pronouns_core::pronouns::{convert_at, Session};

fn at(hour: u32, minute: u32, second: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 3, 9, hour, minute, second)
        .single()
        .expect("unambiguous local time")
}

#[test]
fn export_single_run() {
    let mut session = Session::new();
    session.record(&convert_at("~Her kindness and ~banana", at(14, 5, 0)));

    insta::assert_snapshot!(session.export("%H:%M:%S"), @r#"
    [14:05:00] PROCESSING: Starting conversion of 25 characters
    [14:05:00] PROCESSING: Processing marked token: ~Her (capitalized: true)
    [14:05:00] SUCCESS: Ambiguous 'her' resolved to: {{pronounPosDetCap}}
    [14:05:00] PROCESSING: Processing marked token: ~banana (capitalized: false)
    [14:05:00] WARNING: No conversion found for: ~banana -> banana
    [14:05:00] SUCCESS: Conversion complete: 1 pronouns converted
    "#);
}

#[test]
fn export_with_macros_and_contractions() {
    let mut session = Session::new();
    session.record(&convert_at("{{user}}: ~you'll see", at(8, 30, 15)));

    insta::assert_snapshot!(session.export("%H:%M"), @r#"
    [08:30] PROCESSING: Starting conversion of 21 characters
    [08:30] INFO: Skipping existing macro: {{user}}
    [08:30] PROCESSING: Processing marked token: ~you'll (capitalized: false)
    [08:30] SUCCESS: Contraction conversion: ~you'll -> {{pronounSubjective}}'ll
    [08:30] SUCCESS: Conversion complete: 1 pronouns converted
    "#);
}

#[test]
fn stats_summary_after_runs() {
    let mut session = Session::new();
    session.record(&convert_at("~He told ~his sister", at(9, 0, 0)));
    session.record(&convert_at("~them", at(9, 1, 30)));

    insta::assert_snapshot!(session.stats().summary("%H:%M:%S"), @r"
    Conversions processed: 2
    Pronouns converted: 3
    Ambiguous resolutions: 1
    Last conversion time: 09:01:30
    ");
}

#[test]
fn cleared_session_exports_nothing() {
    let mut session = Session::new();
    session.record(&convert_at("~he", at(9, 0, 0)));
    session.clear();

    assert_eq!(session.export("%H:%M:%S"), "");
    assert!(session
        .stats()
        .summary("%H:%M:%S")
        .ends_with("Last conversion time: Never"));
}
