use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

#[test]
fn converts_inline_text() {
    let mut cmd = cargo_bin_cmd!("pronouns");
    cmd.arg("--text").arg("~They're sure ~he likes ~her");

    cmd.assert().success().stdout(predicate::str::diff(
        "{{pronounSubjective}}'re sure {{pronounSubjective}} likes {{pronounObjective}}",
    ));
}

#[test]
fn converts_stdin() {
    let mut cmd = cargo_bin_cmd!("pronouns");
    cmd.write_stdin("~Her kindness moved {{user}}.\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("{{pronounPosDetCap}} kindness moved {{user}}.\n"));
}

#[test]
fn converts_file_to_output_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("card.txt");
    let output = dir.path().join("card.out.txt");
    fs::write(&input, "~She waved at ~them.\n~His own.\n").expect("write input");

    let mut cmd = cargo_bin_cmd!("pronouns");
    cmd.arg(&input).arg("-o").arg(&output);
    cmd.assert().success().stdout(predicate::str::is_empty());

    let converted = fs::read_to_string(&output).expect("output written");
    assert_eq!(
        converted,
        "{{pronounSubjectiveCap}} waved at {{pronounObjective}}.\n{{pronounPosProCap}} own.\n"
    );
}

#[test]
fn json_format_prints_the_report() {
    let mut cmd = cargo_bin_cmd!("pronouns");
    cmd.arg("--text").arg("~banana ~him").arg("--format").arg("json");

    let output_pred = predicate::str::contains("\"output\": \"banana {{pronounObjective}}\"")
        .and(predicate::str::contains("\"severity\": \"warning\""))
        .and(predicate::str::contains("\"pronouns\": 1"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn tokens_format_prints_the_token_stream() {
    let mut cmd = cargo_bin_cmd!("pronouns");
    cmd.arg("--text").arg("{{user}} ~he").arg("-f").arg("tokens");

    let output_pred = predicate::str::contains("\"kind\": \"macro\"")
        .and(predicate::str::contains("\"text\": \"~he\""))
        .and(predicate::str::contains("\"kind\": \"marked\""));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn unknown_format_is_rejected() {
    let mut cmd = cargo_bin_cmd!("pronouns");
    cmd.arg("--text").arg("~he").arg("-f").arg("yaml");
    cmd.assert().failure();
}

#[test]
fn log_goes_to_stderr() {
    let mut cmd = cargo_bin_cmd!("pronouns");
    cmd.arg("--text").arg("~banana").arg("--log");

    let log_pred = predicate::str::contains("PROCESSING: Starting conversion of 7 characters")
        .and(predicate::str::contains("WARNING: No conversion found for: ~banana -> banana"));

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("banana"))
        .stderr(log_pred);
}

#[test]
fn config_file_filters_the_log() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = dir.path().join("pronouns.toml");
    fs::write(&config, "[log]\nmin_severity = \"warning\"\n").expect("write config");

    let mut cmd = cargo_bin_cmd!("pronouns");
    cmd.arg("--text")
        .arg("~he ~banana")
        .arg("--log")
        .arg("--config")
        .arg(&config);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("WARNING:").and(predicate::str::contains("SUCCESS:").not()));
}

#[test]
fn invalid_config_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = dir.path().join("pronouns.toml");
    fs::write(&config, "[log]\ntimestamp_format = \"%H:%\"\n").expect("write config");

    let mut cmd = cargo_bin_cmd!("pronouns");
    cmd.arg("--text").arg("~he").arg("-c").arg(&config);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error: configuration"));
}

#[test]
fn missing_input_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");

    let mut cmd = cargo_bin_cmd!("pronouns");
    cmd.arg(dir.path().join("absent.txt"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error: failed to read"));
}

#[test]
fn log_file_and_export_dir() {
    let dir = tempfile::tempdir().expect("temp dir");
    let log_file = dir.path().join("run.log");

    let mut cmd = cargo_bin_cmd!("pronouns");
    cmd.arg("--text")
        .arg("~they")
        .arg("--log-file")
        .arg(&log_file)
        .arg("--export-log")
        .arg(dir.path());
    cmd.assert().success();

    let log = fs::read_to_string(&log_file).expect("log written");
    assert_eq!(log.lines().count(), 4);
    assert!(log.contains("SUCCESS: Direct conversion: ~they -> {{pronounSubjective}}"));

    let exported: Vec<_> = fs::read_dir(dir.path())
        .expect("read dir")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("pronoun-converter-debug-") && name.ends_with(".txt"))
        .collect();
    assert_eq!(exported.len(), 1);
    let exported_log = fs::read_to_string(dir.path().join(&exported[0])).expect("export written");
    assert_eq!(exported_log, log);
}

#[test]
fn stats_summary_and_word_counts() {
    let mut cmd = cargo_bin_cmd!("pronouns");
    cmd.arg("--text").arg("~He told ~his sister").arg("--stats");

    let stats_pred = predicate::str::contains("Conversions processed: 1")
        .and(predicate::str::contains("Pronouns converted: 2"))
        .and(predicate::str::contains("Ambiguous resolutions: 1"))
        .and(predicate::str::contains("Input words: 4"))
        .and(predicate::str::contains("Output words: 4"));

    cmd.assert().success().stderr(stats_pred);
}

#[test]
fn interactive_session() {
    let mut cmd = cargo_bin_cmd!("pronouns");
    cmd.arg("--interactive")
        .write_stdin("~he left\n:stats\n:q\n~them\n");

    let output_pred = predicate::str::contains("{{pronounSubjective}} left\n")
        .and(predicate::str::contains("Conversions processed: 1"))
        .and(predicate::str::contains("pronounObjective").not());

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn text_conflicts_with_path() {
    let mut cmd = cargo_bin_cmd!("pronouns");
    cmd.arg("input.txt").arg("--text").arg("~he");
    cmd.assert().failure();
}
