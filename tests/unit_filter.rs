// Unit tests for the filter engine: identity under default filters,
// idempotence, order preservation, and conjunctive semantics.

use dossier::filter::{apply, FilterState, PlatformFilter, RiskFilter};
use dossier::synth::{generate, Platform, Record, RiskLevel};

/// A small set with known risk labels, built by relabeling generated records.
fn labeled_set(risks: &[RiskLevel]) -> Vec<Record> {
    let mut records = generate("filter_fixture");
    records.truncate(risks.len());
    for (record, risk) in records.iter_mut().zip(risks) {
        record.risk = *risk;
    }
    records
}

fn usernames(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.username.as_str()).collect()
}

// ============================================================
// Laws
// ============================================================

#[test]
fn default_filters_are_the_identity() {
    let records = generate("alice");
    let filters = FilterState::default();
    assert!(filters.is_default());

    let filtered = apply(&records, &filters);
    assert_eq!(usernames(&filtered), usernames(&records));
}

#[test]
fn apply_is_idempotent() {
    let records = labeled_set(&[
        RiskLevel::Low,
        RiskLevel::High,
        RiskLevel::Medium,
        RiskLevel::Low,
        RiskLevel::High,
    ]);
    let filters = FilterState {
        risk: RiskFilter::Only(RiskLevel::High),
        ..FilterState::default()
    };

    let once = apply(&records, &filters);
    let twice = apply(&once, &filters);
    assert_eq!(usernames(&once), usernames(&twice));
}

#[test]
fn filtering_preserves_source_order() {
    let records = generate("alice");
    let filters = FilterState {
        text: "t".to_string(),
        ..FilterState::default()
    };

    let filtered = apply(&records, &filters);
    assert!(!filtered.is_empty());

    // Survivors must appear in the same relative order as the input.
    let mut base_iter = records.iter().map(|r| r.username.as_str());
    for survivor in &filtered {
        assert!(
            base_iter.any(|u| u == survivor.username),
            "order violated at {}",
            survivor.username
        );
    }
}

// ============================================================
// Dimension semantics
// ============================================================

#[test]
fn scenario_risk_filter_keeps_matching_entries_in_order() {
    let records = labeled_set(&[
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Low,
    ]);
    let filters = FilterState {
        risk: RiskFilter::Only(RiskLevel::Low),
        ..FilterState::default()
    };

    let filtered = apply(&records, &filters);
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].username, records[0].username);
    assert_eq!(filtered[1].username, records[3].username);
}

#[test]
fn platform_filter_selects_exactly_one_record() {
    let records = generate("alice");
    let filters = FilterState {
        platform: PlatformFilter::Only(Platform::Github),
        ..FilterState::default()
    };

    let filtered = apply(&records, &filters);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].platform, Platform::Github);
}

#[test]
fn text_filter_is_case_insensitive_on_username() {
    let records = generate("Alice");
    let filters = FilterState {
        text: "ALICE_GIT".to_string(),
        ..FilterState::default()
    };

    let filtered = apply(&records, &filters);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].platform, Platform::Github);
}

#[test]
fn text_filter_matches_platform_name_too() {
    let records = generate("zz");
    let filters = FilterState {
        text: "reddit".to_string(),
        ..FilterState::default()
    };

    let filtered = apply(&records, &filters);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].platform, Platform::Reddit);
}

#[test]
fn dimensions_are_conjunctive() {
    let records = labeled_set(&[
        RiskLevel::Low,  // twitter
        RiskLevel::Low,  // instagram
        RiskLevel::High, // facebook
    ]);
    let filters = FilterState {
        platform: PlatformFilter::Only(Platform::Twitter),
        risk: RiskFilter::Only(RiskLevel::Low),
        text: "twitter".to_string(),
    };
    assert_eq!(apply(&records, &filters).len(), 1);

    // Flip one dimension to a non-matching value and nothing passes.
    let mut miss = filters.clone();
    miss.risk = RiskFilter::Only(RiskLevel::High);
    assert!(apply(&records, &miss).is_empty());
}

#[test]
fn no_match_yields_empty_not_error() {
    let records = generate("alice");
    let filters = FilterState {
        text: "definitely-not-present".to_string(),
        ..FilterState::default()
    };
    assert!(apply(&records, &filters).is_empty());
}
