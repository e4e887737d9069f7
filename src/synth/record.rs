// Synthetic record generation.
//
// Derived fields (username, URLs, bio) are pure functions of the query and
// platform. Sampled fields (followers, risk, ...) are drawn fresh on every
// call — two scans of the same query agree on structure and disagree on
// numbers, which is the simulated-uncertainty contract of the demo. The
// entropy source is a type parameter so tests can pass a seeded generator.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::synth::platform::Platform;

/// Synthetic risk label attached to each record. Sampled uniformly —
/// it is a prop, not an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Parse a lowercase risk name. Unknown names return None so callers
    /// can degrade to a permissive filter rather than erroring.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "low" => Some(RiskLevel::Low),
            "medium" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One synthetic per-platform profile. Immutable once generated —
/// filtering selects subsets, it never rewrites records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub platform: Platform,
    pub username: String,
    pub display_name: String,
    pub profile_url: String,
    /// Placeholder-avatar URL seeded from platform and query. Opaque to
    /// the core — never fetched or validated.
    pub avatar_ref: String,
    pub verified: bool,
    pub followers: u32,
    pub following: u32,
    pub posts: u32,
    pub bio: String,
    pub location: String,
    pub join_date: NaiveDate,
    pub last_active: String,
    /// One fractional digit in [0.0, 10.0).
    pub engagement_score: f64,
    pub risk: RiskLevel,
}

const LOCATIONS: [&str; 5] = [
    "San Francisco, CA",
    "New York, NY",
    "London, UK",
    "Tokyo, Japan",
    "Berlin, Germany",
];

/// Lowercase a query and collapse each whitespace run to a single `_`.
///
/// Leading and trailing whitespace also become underscores, so an empty
/// or blank query still yields a syntactically valid (if degenerate)
/// username like `_twitter`.
pub fn normalize_query(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    let mut in_whitespace = false;
    for c in query.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
                in_whitespace = true;
            }
        } else {
            out.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    out
}

/// Generate the full result set for a query: exactly one record per
/// platform, in canonical order, for any query including the empty string.
pub fn generate(query: &str) -> Vec<Record> {
    generate_with(query, &mut rand::rng())
}

/// Generation with an explicit entropy source.
pub fn generate_with<R: Rng>(query: &str, rng: &mut R) -> Vec<Record> {
    let normalized = normalize_query(query);

    let records: Vec<Record> = Platform::ALL
        .iter()
        .map(|&platform| synthesize_one(query, &normalized, platform, rng))
        .collect();

    debug!(query, count = records.len(), "Synthesized result set");
    records
}

fn synthesize_one<R: Rng>(
    query: &str,
    normalized: &str,
    platform: Platform,
    rng: &mut R,
) -> Record {
    let risk = match rng.random_range(0..3) {
        0 => RiskLevel::Low,
        1 => RiskLevel::Medium,
        _ => RiskLevel::High,
    };

    // Day capped at 28 so any month is valid.
    let join_date = NaiveDate::from_ymd_opt(
        2018 + rng.random_range(0..5),
        rng.random_range(1..=12),
        rng.random_range(1..=28),
    )
    .expect("days 1-28 exist in every month");

    Record {
        platform,
        username: format!("{normalized}_{platform}"),
        display_name: query.to_string(),
        profile_url: format!("https://{platform}.com/{query}"),
        avatar_ref: format!(
            "https://api.dicebear.com/7.x/avataaars/svg?seed={platform}{query}"
        ),
        verified: rng.random_bool(0.5),
        followers: rng.random_range(0..100_000),
        following: rng.random_range(0..5_000),
        posts: rng.random_range(0..1_000),
        bio: format!(
            "{} profile for {query}. Digital footprint discovered.",
            platform.label()
        ),
        location: LOCATIONS[rng.random_range(0..LOCATIONS.len())].to_string(),
        join_date,
        last_active: format!("{}h ago", rng.random_range(0..24)),
        engagement_score: f64::from(rng.random_range(0..100u32)) / 10.0,
        risk,
    }
}
