// Filtering — a pure, order-preserving projection of the result set under
// three independent predicates. The engine holds no state of its own; the
// session recomputes the view on every relevant mutation instead of caching
// a second copy that could drift from the base set.

use serde::{Deserialize, Serialize};

use crate::synth::{Platform, Record, RiskLevel};

/// Platform dimension: pass everything, or exactly one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformFilter {
    #[default]
    All,
    Only(Platform),
}

impl PlatformFilter {
    /// Parse a filter value. "all", the empty string, and anything
    /// unrecognized all degrade to the permissive filter — bad input
    /// widens the view, it never errors.
    pub fn parse(value: &str) -> Self {
        match Platform::parse(value) {
            Some(p) => PlatformFilter::Only(p),
            None => PlatformFilter::All,
        }
    }

    fn passes(&self, record: &Record) -> bool {
        match self {
            PlatformFilter::All => true,
            PlatformFilter::Only(p) => record.platform == *p,
        }
    }
}

/// Risk dimension: pass everything, or exactly one risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RiskFilter {
    #[default]
    All,
    Only(RiskLevel),
}

impl RiskFilter {
    /// Same degradation rule as [`PlatformFilter::parse`].
    pub fn parse(value: &str) -> Self {
        match RiskLevel::parse(value) {
            Some(r) => RiskFilter::Only(r),
            None => RiskFilter::All,
        }
    }

    fn passes(&self, record: &Record) -> bool {
        match self {
            RiskFilter::All => true,
            RiskFilter::Only(r) => record.risk == *r,
        }
    }
}

/// The three independent filter dimensions held by a session.
///
/// Defaults pass everything. Reset whenever a new query is submitted,
/// mutated freely by the user afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub platform: PlatformFilter,
    pub risk: RiskFilter,
    /// Case-insensitive substring match against username or platform name.
    /// Empty passes everything.
    pub text: String,
}

impl FilterState {
    /// True when all three dimensions are at their permissive default.
    pub fn is_default(&self) -> bool {
        self.platform == PlatformFilter::All
            && self.risk == RiskFilter::All
            && self.text.is_empty()
    }

    fn passes(&self, record: &Record) -> bool {
        if !self.platform.passes(record) || !self.risk.passes(record) {
            return false;
        }
        if self.text.is_empty() {
            return true;
        }
        let term = self.text.to_lowercase();
        record.username.to_lowercase().contains(&term)
            || record.platform.as_str().contains(&term)
    }
}

/// Apply the filters, keeping surviving records in their original order.
/// A record passes iff all three dimensions pass it.
pub fn apply(records: &[Record], filters: &FilterState) -> Vec<Record> {
    records
        .iter()
        .filter(|r| filters.passes(r))
        .cloned()
        .collect()
}
