// Staged reveal of the results view.
//
// The sequence is: stats skeletons resolve first, then the card grid
// skeleton resolves, then cards appear one at a time. Each timer is a
// spawned tokio task mutating shared RevealState; the scheduler keeps the
// JoinHandles so teardown and re-targeting can abort them. The contract
// that matters is that cancellation is unconditional — a view can be torn
// down mid-reveal at any point, and no timer may fire after teardown.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

/// Live reveal progress, read by the renderer on every frame.
///
/// `visible` counts fully revealed cards; `total` is the length of the
/// current filtered set. The tick loop re-reads `total` on every tick, so
/// a filter change that lands while the grid is still loading is picked up
/// without restarting the skeleton timer.
#[derive(Debug, Clone, Default)]
pub struct RevealState {
    /// True while the stats row shows skeletons.
    pub loading_stats: bool,
    /// True while the card grid shows skeletons.
    pub loading_cards: bool,
    /// Cards revealed so far, 0..=total.
    pub visible: usize,
    /// Length of the filtered set being revealed.
    pub total: usize,
}

impl RevealState {
    /// True once every card of the current cycle is on screen.
    pub fn complete(&self) -> bool {
        !self.loading_stats && !self.loading_cards && self.visible >= self.total
    }
}

/// Timer cadence for one reveal cycle.
#[derive(Debug, Clone, Copy)]
pub struct RevealDelays {
    pub stats: Duration,
    pub cards: Duration,
    pub tick: Duration,
}

impl Default for RevealDelays {
    fn default() -> Self {
        Self {
            stats: Duration::from_millis(600),
            cards: Duration::from_millis(1000),
            tick: Duration::from_millis(80),
        }
    }
}

/// Drives one results view's reveal cycle.
///
/// Created fresh when the results view is entered; torn down when it is
/// left. At most one cycle runs at a time — `begin` and `retarget` abort
/// the previous cycle's timers before starting new ones.
pub struct RevealScheduler {
    state: Arc<RwLock<RevealState>>,
    delays: RevealDelays,
    stats_task: Option<JoinHandle<()>>,
    cards_task: Option<JoinHandle<()>>,
}

impl RevealScheduler {
    pub fn new(delays: RevealDelays) -> Self {
        Self {
            state: Arc::new(RwLock::new(RevealState::default())),
            delays,
            stats_task: None,
            cards_task: None,
        }
    }

    /// Snapshot of the current reveal progress.
    pub async fn snapshot(&self) -> RevealState {
        self.state.read().await.clone()
    }

    /// Start a fresh reveal cycle against a filtered set of `total` records.
    /// Any previous cycle is cancelled first.
    pub async fn begin(&mut self, total: usize) {
        self.teardown();
        {
            let mut s = self.state.write().await;
            *s = RevealState {
                loading_stats: true,
                loading_cards: true,
                visible: 0,
                total,
            };
        }
        debug!(total, "Reveal cycle started");

        let state = Arc::clone(&self.state);
        let stats_delay = self.delays.stats;
        self.stats_task = Some(tokio::spawn(async move {
            sleep(stats_delay).await;
            state.write().await.loading_stats = false;
        }));

        let state = Arc::clone(&self.state);
        let cards_delay = self.delays.cards;
        let tick = self.delays.tick;
        self.cards_task = Some(tokio::spawn(async move {
            sleep(cards_delay).await;
            {
                let mut s = state.write().await;
                s.loading_cards = false;
                s.visible = 0;
            }
            run_ticks(state, tick).await;
        }));
    }

    /// The filtered set changed mid-view: reset `visible` to 0 and reveal
    /// the new set. If the grid skeleton is still up, the pending cards
    /// timer keeps running and ticks against the new total; if cards were
    /// already revealed, the old tick loop is aborted and a fresh one
    /// started.
    pub async fn retarget(&mut self, total: usize) {
        let cards_ready = {
            let mut s = self.state.write().await;
            s.total = total;
            s.visible = 0;
            !s.loading_cards
        };
        debug!(total, cards_ready, "Reveal retargeted");

        if cards_ready {
            if let Some(task) = self.cards_task.take() {
                task.abort();
            }
            let state = Arc::clone(&self.state);
            let tick = self.delays.tick;
            self.cards_task = Some(tokio::spawn(run_ticks(state, tick)));
        }
    }

    /// Cancel every outstanding timer. Nothing fires after this returns;
    /// the state snapshot is left exactly as the last timer wrote it.
    pub fn teardown(&mut self) {
        for task in [self.stats_task.take(), self.cards_task.take()]
            .into_iter()
            .flatten()
        {
            task.abort();
        }
    }

    /// Number of timer tasks that could still fire. Zero once a cycle has
    /// run to completion or been torn down.
    pub fn live_timers(&self) -> usize {
        [&self.stats_task, &self.cards_task]
            .into_iter()
            .flatten()
            .filter(|t| !t.is_finished())
            .count()
    }
}

impl Drop for RevealScheduler {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Increment `visible` once per tick until it reaches `total`, re-reading
/// `total` each time so retargets during the loop are honored.
async fn run_ticks(state: Arc<RwLock<RevealState>>, tick: Duration) {
    loop {
        {
            let s = state.read().await;
            if s.visible >= s.total {
                break;
            }
        }
        sleep(tick).await;
        let mut s = state.write().await;
        if s.visible < s.total {
            s.visible += 1;
        }
        if s.visible >= s.total {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delays() -> RevealDelays {
        RevealDelays::default()
    }

    #[tokio::test(start_paused = true)]
    async fn full_cycle_reveals_every_card() {
        let mut sched = RevealScheduler::new(delays());
        sched.begin(8).await;

        let s = sched.snapshot().await;
        assert!(s.loading_stats && s.loading_cards);
        assert_eq!(s.visible, 0);

        // Stats resolve at 600ms, cards at 1000ms.
        sleep(Duration::from_millis(700)).await;
        let s = sched.snapshot().await;
        assert!(!s.loading_stats);
        assert!(s.loading_cards);

        sleep(Duration::from_millis(400)).await;
        let s = sched.snapshot().await;
        assert!(!s.loading_cards);

        // Eight ticks of 80ms reveal all eight cards.
        sleep(Duration::from_millis(8 * 80 + 40)).await;
        let s = sched.snapshot().await;
        assert_eq!(s.visible, 8);
        assert!(s.complete());
        assert_eq!(sched.live_timers(), 0, "all timers must have retired");
    }

    #[tokio::test(start_paused = true)]
    async fn empty_set_completes_without_ticks() {
        let mut sched = RevealScheduler::new(delays());
        sched.begin(0).await;

        sleep(Duration::from_millis(1100)).await;
        let s = sched.snapshot().await;
        assert!(s.complete());
        assert_eq!(s.visible, 0);
        assert_eq!(sched.live_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_before_any_timer_fires_freezes_state() {
        let mut sched = RevealScheduler::new(delays());
        sched.begin(8).await;
        sched.teardown();

        // Advance far past every deadline; nothing may mutate state.
        sleep(Duration::from_secs(10)).await;
        let s = sched.snapshot().await;
        assert!(s.loading_stats, "stats must not be marked ready after teardown");
        assert!(s.loading_cards, "cards must not be marked ready after teardown");
        assert_eq!(s.visible, 0);
        assert_eq!(sched.live_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_mid_reveal_stops_the_count() {
        let mut sched = RevealScheduler::new(delays());
        sched.begin(8).await;

        // Let cards resolve and three ticks land.
        sleep(Duration::from_millis(1000 + 3 * 80 + 40)).await;
        let before = sched.snapshot().await;
        assert_eq!(before.visible, 3);

        sched.teardown();
        sleep(Duration::from_secs(10)).await;
        let after = sched.snapshot().await;
        assert_eq!(after.visible, 3, "no tick may land after teardown");
    }

    #[tokio::test(start_paused = true)]
    async fn retarget_after_cards_ready_restarts_from_zero() {
        let mut sched = RevealScheduler::new(delays());
        sched.begin(4).await;
        sleep(Duration::from_millis(1000 + 4 * 80 + 40)).await;
        assert_eq!(sched.snapshot().await.visible, 4);

        sched.retarget(2).await;
        let s = sched.snapshot().await;
        assert_eq!(s.visible, 0, "retarget resets the reveal");
        assert_eq!(s.total, 2);

        sleep(Duration::from_millis(2 * 80 + 40)).await;
        let s = sched.snapshot().await;
        assert_eq!(s.visible, 2);
        assert!(s.complete());

        // Terminal: no further ticks beyond the new total.
        sleep(Duration::from_secs(1)).await;
        assert_eq!(sched.snapshot().await.visible, 2);
        assert_eq!(sched.live_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn retarget_while_cards_loading_keeps_skeleton_timer() {
        let mut sched = RevealScheduler::new(delays());
        sched.begin(8).await;

        // Stats ready, cards skeleton still up.
        sleep(Duration::from_millis(700)).await;
        sched.retarget(3).await;
        let s = sched.snapshot().await;
        assert!(s.loading_cards, "skeleton timer must not restart");
        assert_eq!(s.total, 3);

        // Cards resolve at the original 1000ms mark, then three ticks.
        sleep(Duration::from_millis(300 + 3 * 80 + 40)).await;
        let s = sched.snapshot().await;
        assert!(s.complete());
        assert_eq!(s.visible, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn begin_cancels_the_previous_cycle() {
        let mut sched = RevealScheduler::new(delays());
        sched.begin(8).await;
        sleep(Duration::from_millis(1000 + 2 * 80 + 40)).await;
        assert_eq!(sched.snapshot().await.visible, 2);

        sched.begin(5).await;
        let s = sched.snapshot().await;
        assert!(s.loading_stats && s.loading_cards);
        assert_eq!(s.visible, 0);

        sleep(Duration::from_millis(1000 + 5 * 80 + 40)).await;
        let s = sched.snapshot().await;
        assert_eq!(s.visible, 5);
        assert!(s.complete());
    }
}
