//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary with config and data dirs pointed into `home`
fn sermon_gen_bin(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sermon-gen").expect("binary should be built");
    cmd.env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env_remove("MISTRAL_API_KEY")
        .env_remove("MISTRAL_API_URL")
        .env_remove("MISTRAL_MODEL")
        .env_remove("SERMON_GEN_LOG");
    cmd
}

fn home() -> TempDir {
    tempfile::tempdir().expect("tempdir")
}

#[test]
fn help_output() {
    let home = home();
    sermon_gen_bin(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sermon outlines"))
        .stdout(predicate::str::contains("--topic"))
        .stdout(predicate::str::contains("--verse"))
        .stdout(predicate::str::contains("--structure"))
        .stdout(predicate::str::contains("--audience"))
        .stdout(predicate::str::contains("--no-call-to-action"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn version_output() {
    let home = home();
    sermon_gen_bin(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sermon-gen"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn dry_run_prints_prompt() {
    let home = home();
    sermon_gen_bin(&home)
        .args(["--topic", "Kasih Allah", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generate a sermon outline on the topic: \"Kasih Allah\"",
        ))
        .stdout(predicate::str::contains("Sermon structure: topical"))
        .stdout(predicate::str::contains("Target audience: general"))
        .stdout(predicate::str::contains("ayat yang relevan"))
        .stdout(predicate::str::contains("TUJUAN KOTBAH:"))
        .stdout(predicate::str::contains("7. Panggilan untuk respons:"))
        .stdout(predicate::str::contains("{").not());
}

#[test]
fn dry_run_with_verse_and_audience() {
    let home = home();
    sermon_gen_bin(&home)
        .args([
            "-t",
            "Pengampunan",
            "-b",
            "Matius 18:21-22",
            "-s",
            "expository",
            "-a",
            "youth",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Based on the Bible verse: Matius 18:21-22"))
        .stdout(predicate::str::contains("Jadikan Matius 18:21-22 sebagai teks acuan utama"))
        .stdout(predicate::str::contains("Ikuti struktur expository"))
        .stdout(predicate::str::contains("untuk audiens youth"))
        .stdout(predicate::str::contains("ayat yang relevan").not());
}

#[test]
fn dry_run_omits_disabled_sections() {
    let home = home();
    sermon_gen_bin(&home)
        .args([
            "-t",
            "Kasih",
            "--no-call-to-action",
            "--no-purpose",
            "--instructions",
            "Gunakan ilustrasi kontemporer",
            "--dry-run",
        ])
        .assert()
        .success()
        // the topical descriptor mentions "Panggilan untuk respons" too
        .stdout(predicate::str::contains("7. Panggilan untuk respons:").not())
        .stdout(predicate::str::contains("TUJUAN KOTBAH:").not())
        .stdout(predicate::str::contains("PENELITIAN ALKITAB:"))
        .stdout(predicate::str::contains(
            "INSTRUKSI TAMBAHAN:\nGunakan ilustrasi kontemporer",
        ));
}

#[test]
fn dry_run_needs_no_api_key() {
    let home = home();
    sermon_gen_bin(&home)
        .args(["-t", "Iman", "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("API key").not());
}

#[test]
fn request_file_with_flag_override() {
    let home = home();
    let request = home.path().join("request.json");
    std::fs::write(
        &request,
        r#"{
            "topic": "Harapan",
            "bibleVerse": "Roma 15:13",
            "structure": "narrative",
            "audience": "youth",
            "customPromptOptions": {"includeBibleResearch": false}
        }"#,
    )
    .expect("write request");

    sermon_gen_bin(&home)
        .arg("--request")
        .arg(&request)
        .args(["--audience", "general", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("topic: \"Harapan\""))
        .stdout(predicate::str::contains("Sermon structure: narrative"))
        .stdout(predicate::str::contains("Target audience: general"))
        .stdout(predicate::str::contains("PENELITIAN ALKITAB").not());
}

#[test]
fn config_defaults_apply_to_generation() {
    let home = home();
    sermon_gen_bin(&home)
        .args(["config", "set", "structure", "textual"])
        .assert()
        .success();

    sermon_gen_bin(&home)
        .args(["-t", "Kasih", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sermon structure: textual"));
}

#[test]
fn short_topic_is_usage_error() {
    let home = home();
    sermon_gen_bin(&home)
        .args(["--topic", "ab", "--dry-run"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("at least 3 characters"));
}

#[test]
fn missing_topic_is_usage_error() {
    let home = home();
    sermon_gen_bin(&home)
        .arg("--dry-run")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Topic is required"));
}

#[test]
fn long_topic_is_usage_error() {
    let home = home();
    sermon_gen_bin(&home)
        .args(["--topic", "a".repeat(101).as_str(), "--dry-run"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("at most 100 characters"));
}

#[test]
fn invalid_structure_rejected() {
    let home = home();
    sermon_gen_bin(&home)
        .args(["--topic", "Kasih", "--structure", "chiastic"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("chiastic"));
}

#[test]
fn invalid_structure_in_request_file() {
    let home = home();
    let request = home.path().join("request.json");
    std::fs::write(&request, r#"{"topic": "Kasih", "structure": "chiastic"}"#)
        .expect("write request");

    sermon_gen_bin(&home)
        .arg("--request")
        .arg(&request)
        .arg("--dry-run")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid sermon structure"));
}

#[test]
fn config_path_command() {
    let home = home();
    sermon_gen_bin(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sermon-gen"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_help() {
    let home = home();
    sermon_gen_bin(&home)
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn config_set_get_masks_key() {
    let home = home();
    sermon_gen_bin(&home)
        .args(["config", "set", "api_key", "sk-1234567890abcdef"])
        .assert()
        .success();

    sermon_gen_bin(&home)
        .args(["config", "get", "api_key"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sk-1...cdef"))
        .stdout(predicate::str::contains("1234567890").not());
}

#[test]
fn config_list_shows_all_keys() {
    let home = home();
    sermon_gen_bin(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api_key"))
        .stdout(predicate::str::contains("model"))
        .stdout(predicate::str::contains("history"))
        .stdout(predicate::str::contains("clipboard: (not set)"));
}

#[test]
fn config_set_clipboard_round_trip() {
    let home = home();
    sermon_gen_bin(&home)
        .args(["config", "set", "clipboard", "yes"])
        .assert()
        .success();

    sermon_gen_bin(&home)
        .args(["config", "get", "clipboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));

    let written = std::fs::read_to_string(
        home.path().join("config").join("sermon-gen").join("config.toml"),
    )
    .expect("config written");
    assert!(written.starts_with("# sermon-gen settings"));
    assert!(written.contains("clipboard = true"));
}

#[test]
fn history_list_empty() {
    let home = home();
    sermon_gen_bin(&home)
        .args(["history", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("History is empty"));
}

#[test]
fn history_show_unknown_id() {
    let home = home();
    sermon_gen_bin(&home)
        .args(["history", "show", "deadbeef"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No history item matches"));
}
