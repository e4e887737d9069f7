// Session state — the single owner of everything the views render.
//
// All mutation is funneled through the operations here: the filter engine
// and reveal scheduler only derive from what the session holds. The
// filtered view is recomputed on demand rather than cached, so it can
// never drift from the base set.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::filter::{self, FilterState, PlatformFilter, RiskFilter};
use crate::reveal::{RevealDelays, RevealScheduler, RevealState};
use crate::synth::{self, Record, RiskLevel};

/// Which top-level view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Search,
    Loading,
    Results,
}

/// What kind of identifier the query is. Accepted and stored, but it does
/// not change what gets synthesized — a documented limitation carried over
/// from the observed behavior, not something to silently fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[default]
    Username,
    Email,
    Phone,
    Name,
}

/// Which platform category to scan. Inert, same as [`SearchType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformScope {
    #[default]
    All,
    Social,
    Professional,
    Coding,
    Forum,
}

/// How deep the simulated scan claims to go. Inert, same as [`SearchType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanDepth {
    Quick,
    Standard,
    #[default]
    Deep,
}

impl SearchType {
    /// Lenient parse — unknown values fall back to the default, since the
    /// option is inert either way.
    pub fn parse(value: &str) -> Self {
        match value {
            "email" => SearchType::Email,
            "phone" => SearchType::Phone,
            "name" => SearchType::Name,
            _ => SearchType::Username,
        }
    }
}

impl PlatformScope {
    pub fn parse(value: &str) -> Self {
        match value {
            "social" => PlatformScope::Social,
            "professional" => PlatformScope::Professional,
            "coding" => PlatformScope::Coding,
            "forum" => PlatformScope::Forum,
            _ => PlatformScope::All,
        }
    }
}

impl ScanDepth {
    pub fn parse(value: &str) -> Self {
        match value {
            "quick" => ScanDepth::Quick,
            "standard" => ScanDepth::Standard,
            _ => ScanDepth::Deep,
        }
    }
}

/// The three search-form options submitted alongside the query.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchOptions {
    pub search_type: SearchType,
    pub scope: PlatformScope,
    pub depth: ScanDepth,
}

/// One filter-dimension mutation.
#[derive(Debug, Clone)]
pub enum FilterUpdate {
    Platform(PlatformFilter),
    Risk(RiskFilter),
    Text(String),
}

/// Risk-label counts over the base result set, for the stats row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskStats {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

/// Top-level state holder for one scan session.
pub struct SessionController {
    view: ViewMode,
    query: String,
    options: SearchOptions,
    base: Vec<Record>,
    filters: FilterState,
    scheduler: RevealScheduler,
}

impl SessionController {
    pub fn new(delays: RevealDelays) -> Self {
        Self {
            view: ViewMode::Search,
            query: String::new(),
            options: SearchOptions::default(),
            base: Vec::new(),
            filters: FilterState::default(),
            scheduler: RevealScheduler::new(delays),
        }
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// The full result set for the current query, unfiltered.
    pub fn base_records(&self) -> &[Record] {
        &self.base
    }

    /// The base set projected through the current filters, in source order.
    pub fn filtered_records(&self) -> Vec<Record> {
        filter::apply(&self.base, &self.filters)
    }

    /// Risk counts over the base set. The stats row shows these regardless
    /// of the active filters, matching the original behavior.
    pub fn risk_stats(&self) -> RiskStats {
        let mut stats = RiskStats::default();
        for record in &self.base {
            match record.risk {
                RiskLevel::Low => stats.low += 1,
                RiskLevel::Medium => stats.medium += 1,
                RiskLevel::High => stats.high += 1,
            }
        }
        stats
    }

    /// Current reveal progress snapshot.
    pub async fn reveal(&self) -> RevealState {
        self.scheduler.snapshot().await
    }

    /// Timer tasks that could still fire. Used by the render loop to know
    /// when the reveal has fully settled.
    pub fn live_timers(&self) -> usize {
        self.scheduler.live_timers()
    }

    /// Accept a query and move to the loading view.
    ///
    /// A blank query is the one validation failure in the system: the view
    /// stays on Search and the error carries the notice text.
    pub fn submit_query(&mut self, query: &str, options: SearchOptions) -> Result<()> {
        if query.trim().is_empty() {
            anyhow::bail!("Please enter a search query");
        }
        self.query = query.to_string();
        self.options = options;
        self.view = ViewMode::Loading;
        info!(query, "Scan initiated");
        Ok(())
    }

    /// The simulated scan finished: synthesize the result set, reset the
    /// filters, enter the results view, and start the reveal cycle.
    pub async fn complete_loading(&mut self) {
        self.base = synth::generate(&self.query);
        self.filters = FilterState::default();
        self.view = ViewMode::Results;
        info!(query = %self.query, count = self.base.len(), "Scan complete");
        self.scheduler.begin(self.base.len()).await;
    }

    /// Mutate one filter dimension and re-reveal the new filtered view.
    pub async fn update_filter(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Platform(p) => self.filters.platform = p,
            FilterUpdate::Risk(r) => self.filters.risk = r,
            FilterUpdate::Text(t) => self.filters.text = t,
        }
        if self.view == ViewMode::Results {
            let len = self.filtered_records().len();
            self.scheduler.retarget(len).await;
        }
    }

    /// Leave the results view: cancel every reveal timer and clear the
    /// session back to a fresh search.
    pub fn go_back(&mut self) {
        self.scheduler.teardown();
        self.base.clear();
        self.query.clear();
        self.filters = FilterState::default();
        self.view = ViewMode::Search;
    }
}
