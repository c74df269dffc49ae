//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with a throwaway config directory and
//! verify outputs.

mod common;

use std::path::Path;

use common::*;

fn card_ids(view: &serde_json::Value) -> Vec<u64> {
    view["cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_u64().unwrap())
        .collect()
}

fn active_chips(view: &serde_json::Value) -> Vec<&serde_json::Value> {
    let chips = view["chips"].as_array().unwrap();
    chips.iter().filter(|c| c["active"] == true).collect()
}

/// `doctors list --json` with extra filter flags.
fn list_json(home: &Path, filters: &[&str]) -> serde_json::Value {
    let mut args = vec!["doctors", "list", "--json"];
    args.extend_from_slice(filters);
    parse_json(&run_cli_success(home, &args))
}

/// A booking with every required field filled in.
fn booking_args<'a>(id: &'a str, date: &'a str, time: &'a str) -> Vec<&'a str> {
    vec![
        "doctors",
        "book",
        id,
        "--name",
        "Asha",
        "--phone",
        "9000000000",
        "--date",
        date,
        "--time",
        time,
    ]
}

fn get_config(home: &Path, key: &str) -> String {
    run_cli_success(home, &["config", "get", key])
        .trim()
        .to_string()
}

fn set_config(home: &Path, key: &str, value: &str) {
    run_cli_success(home, &["config", "set", key, value]);
}

#[test]
fn test_doctors_list() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["doctors", "list"]);
    assert_contains(&stdout, "[All]");
    assert_contains(&stdout, "Dr. Priya Sharma");
    assert_contains(&stdout, "Dr. Lakshmi Nair");
    assert_contains(&stdout, "Not Available");
}

#[test]
fn test_doctors_list_by_specialty_json() {
    let home = tempfile::tempdir().unwrap();
    let view = list_json(home.path(), &["--specialty", "pcos"]);
    assert_json_field(&view, "chips");
    assert_eq!(card_ids(&view), vec![3]);
    assert_eq!(view["cards"][0]["specialty_label"], "PCOS Specialist");
}

#[test]
fn test_doctors_list_unlisted_specialty() {
    let home = tempfile::tempdir().unwrap();
    let view = list_json(home.path(), &["--specialty", "dermatologist"]);
    assert!(card_ids(&view).is_empty());
    let active = active_chips(&view);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["label"], "dermatologist");
}

#[test]
fn test_doctors_search_ignores_specialty_by_default() {
    let home = tempfile::tempdir().unwrap();
    let filters = ["--specialty", "therapist", "--search", "VELLORE"];
    let view = list_json(home.path(), &filters);
    assert_eq!(card_ids(&view), vec![2, 4, 6]);
}

#[test]
fn test_doctors_search_composes_when_configured() {
    let home = tempfile::tempdir().unwrap();
    set_config(home.path(), "directory.compose_search_with_filter", "true");
    let filters = ["--specialty", "gynecologist", "--search", "vellore"];
    let view = list_json(home.path(), &filters);
    assert_eq!(card_ids(&view), vec![6]);
}

#[test]
fn test_doctors_search_no_match_shows_empty_state() {
    let home = tempfile::tempdir().unwrap();
    let args = ["doctors", "list", "--search", "cardiology"];
    let stdout = run_cli_success(home.path(), &args);
    assert_contains(&stdout, "No doctors match your search.");
    assert!(!stdout.contains("Dr. "));
}

#[test]
fn test_doctors_contact_dry_run_call() {
    let home = tempfile::tempdir().unwrap();
    let args = ["doctors", "contact", "1", "--call", "--dry-run"];
    let stdout = run_cli_success(home.path(), &args);
    assert_contains(&stdout, "Contact Dr. Priya Sharma");
    assert_contains(&stdout, "launch: tel:+919876543210");
}

#[test]
fn test_doctors_contact_json_keeps_stdout_clean() {
    let home = tempfile::tempdir().unwrap();
    let args = ["doctors", "contact", "2", "--call", "--dry-run", "--json"];
    let (stdout, stderr, code) = run_cli(home.path(), &args);
    assert_eq!(code, 0);
    let modal: serde_json::Value = parse_json(&stdout);
    assert_eq!(modal["variant"], "contact");
    assert_eq!(modal["phone"]["target"], "tel:+919876543211");
    assert_contains(&stderr, "launch: tel:+919876543211");
}

#[test]
fn test_doctors_contact_unknown_is_silent() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["doctors", "contact", "99"]);
    assert_eq!(code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn test_doctors_book_success() {
    let home = tempfile::tempdir().unwrap();
    let args = booking_args("3", "2099-01-15", "14:00");
    let stdout = run_cli_success(home.path(), &args);
    assert_contains(&stdout, "Book Appointment with Dr. Meera Patel");
    assert_contains(
        &stdout,
        "Appointment booked successfully with Dr. Meera Patel!",
    );
}

#[test]
fn test_doctors_book_json_event() {
    let home = tempfile::tempdir().unwrap();
    let mut args = booking_args("1", "2099-01-15", "09:00");
    args.push("--json");
    let event: serde_json::Value = parse_json(&run_cli_success(home.path(), &args));
    assert_eq!(event["type"], "BookingConfirmed");
    assert_eq!(event["provider_id"], 1);
    assert_eq!(event["time_slot"], "09:00");
}

#[test]
fn test_doctors_book_unavailable() {
    let home = tempfile::tempdir().unwrap();
    let args = booking_args("4", "2099-01-15", "09:00");
    let (stdout, stderr, _) = run_cli_failure(home.path(), &args);
    assert_contains(&stderr, "not available today");
    assert!(!stdout.contains("Book Appointment"));
}

#[test]
fn test_doctors_book_missing_fields() {
    let home = tempfile::tempdir().unwrap();
    let args = ["doctors", "book", "1", "--name", "Asha"];
    let (_, stderr, _) = run_cli_failure(home.path(), &args);
    assert_contains(
        &stderr,
        "Missing required fields: Phone Number, Preferred Date, Preferred Time",
    );
}

#[test]
fn test_doctors_book_past_date() {
    let home = tempfile::tempdir().unwrap();
    let args = booking_args("1", "2000-01-01", "10:00");
    let (_, stderr, _) = run_cli_failure(home.path(), &args);
    assert_contains(&stderr, "is before");
}

#[test]
fn test_doctors_book_invalid_slot() {
    let home = tempfile::tempdir().unwrap();
    run_cli_failure(home.path(), &["doctors", "book", "1", "--time", "13:00"]);
}

#[test]
fn test_doctors_emergency() {
    let home = tempfile::tempdir().unwrap();
    let args = ["doctors", "emergency", "--yes", "--dry-run"];
    let stdout = run_cli_success(home.path(), &args);
    assert_contains(&stdout, "launch: tel:112");
}

#[test]
fn test_doctors_chips() {
    let home = tempfile::tempdir().unwrap();
    let args = ["doctors", "chips", "--specialty", "therapist"];
    let stdout = run_cli_success(home.path(), &args);
    let active: Vec<&str> = stdout.lines().filter(|l| l.starts_with('*')).collect();
    assert_eq!(active.len(), 1);
    assert_contains(active[0], "Therapist");
}

#[test]
fn test_doctors_chips_unlisted_specialty() {
    let home = tempfile::tempdir().unwrap();
    let args = ["doctors", "chips", "--specialty", "dermatologist"];
    let stdout = run_cli_success(home.path(), &args);
    assert_eq!(stdout.lines().count(), 7);
    let active: Vec<&str> = stdout.lines().filter(|l| l.starts_with('*')).collect();
    assert_eq!(active.len(), 1);
    assert_contains(active[0], "dermatologist");
}

#[test]
fn test_config_get_set_reset() {
    let home = tempfile::tempdir().unwrap();
    assert_eq!(get_config(home.path(), "booking.emergency_number"), "112");
    set_config(home.path(), "booking.emergency_number", "108");
    assert_eq!(get_config(home.path(), "booking.emergency_number"), "108");
    run_cli_success(home.path(), &["config", "reset"]);
    assert_eq!(get_config(home.path(), "booking.emergency_number"), "112");
}

#[test]
fn test_config_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    run_cli_failure(home.path(), &["config", "get", "directory.nope"]);
    run_cli_failure(home.path(), &["config", "set", "directory.nope", "1"]);
}

#[test]
fn test_providers_file_replaces_seed() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("providers.json");
    std::fs::write(
        &file,
        r#"[{"id": 10, "name": "Dr. Z", "specialty": "dermatologist", "avatar": "x",
            "rating": 3.5, "reviews": 1, "experience": 2, "location": "Erode",
            "hospital": "Erode Clinic", "phone": "1", "email": "z@e.in",
            "available": true, "consultationFee": "₹100"}]"#,
    )
    .unwrap();
    let path = file.to_str().unwrap();
    set_config(home.path(), "directory.providers_file", path);

    let view = list_json(home.path(), &[]);
    assert_eq!(card_ids(&view), vec![10]);
    assert_eq!(view["cards"][0]["specialty_label"], "dermatologist");
    assert_eq!(view["cards"][0]["stars"], "⭐⭐⭐");
    assert_eq!(view["chips"][6]["label"], "dermatologist");
}

#[test]
fn test_completions() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["completions", "bash"]);
    assert_contains(&stdout, "eraya");
}
