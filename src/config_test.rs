use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

// =============================================================
// CancelPolicy
// =============================================================

#[test]
fn cancel_policy_defaults_to_keep_edits() {
    assert_eq!(CancelPolicy::default(), CancelPolicy::KeepEdits);
    assert_eq!(parse_cancel_policy(None), Ok(CancelPolicy::KeepEdits));
    assert_eq!(parse_cancel_policy(Some("  ")), Ok(CancelPolicy::KeepEdits));
}

#[test]
fn cancel_policy_parses_known_values() {
    assert_eq!(parse_cancel_policy(Some("keep")), Ok(CancelPolicy::KeepEdits));
    assert_eq!(parse_cancel_policy(Some(" revert ")), Ok(CancelPolicy::Revert));
}

#[test]
fn cancel_policy_rejects_unknown_value() {
    assert_eq!(
        parse_cancel_policy(Some("discard")),
        Err(ConfigError::UnknownCancelPolicy("discard".to_owned()))
    );
}

// =============================================================
// Log level
// =============================================================

#[test]
fn log_level_defaults_to_info() {
    assert_eq!(parse_log_level(None), Ok(LevelFilter::Info));
    assert_eq!(parse_log_level(Some("")), Ok(DEFAULT_LOG_LEVEL));
}

#[test]
fn log_level_parses_case_insensitively() {
    assert_eq!(parse_log_level(Some("debug")), Ok(LevelFilter::Debug));
    assert_eq!(parse_log_level(Some("TRACE")), Ok(LevelFilter::Trace));
    assert_eq!(parse_log_level(Some("off")), Ok(LevelFilter::Off));
}

#[test]
fn log_level_rejects_unknown_value() {
    assert_eq!(parse_log_level(Some("loud")), Err(ConfigError::InvalidLogLevel("loud".to_owned())));
}

// =============================================================
// EditorConfig
// =============================================================

#[test]
fn from_lookup_with_nothing_stored_is_default() {
    assert_eq!(EditorConfig::from_lookup(|_| None), EditorConfig::default());
}

#[test]
fn from_lookup_reads_both_keys() {
    let cfg = EditorConfig::from_lookup(lookup_from(&[(CANCEL_POLICY_KEY, "revert"), (LOG_LEVEL_KEY, "warn")]));
    assert_eq!(cfg.cancel_policy, CancelPolicy::Revert);
    assert_eq!(cfg.log_level, LevelFilter::Warn);
}

#[test]
fn from_lookup_falls_back_per_key() {
    let cfg = EditorConfig::from_lookup(lookup_from(&[(CANCEL_POLICY_KEY, "nope"), (LOG_LEVEL_KEY, "error")]));
    assert_eq!(cfg.cancel_policy, CancelPolicy::KeepEdits);
    assert_eq!(cfg.log_level, LevelFilter::Error);
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_outside_browser_is_default() {
    assert_eq!(EditorConfig::load(), EditorConfig::default());
}
