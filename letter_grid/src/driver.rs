// driver.rs - Self-rescheduling animation task
//
// The driver never touches the grid. Each tick it picks a pattern, sends the
// resulting indices down a channel and sleeps. Whoever owns the grid drains
// the channel and applies the toggles, so all mutation stays on one thread.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::grid::CELL_COUNT;
use crate::patterns::{Pattern, PatternKind};

/// Called after every tick so the UI can wake up and drain the channel.
pub type Notify = Arc<dyn Fn() + Send + Sync>;

/// Delay between ticks: `min_delay + uniform[0, delay_spread)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    pub min_delay: Duration,
    pub delay_spread: Duration,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            min_delay: Duration::from_millis(600),
            delay_spread: Duration::from_millis(1400),
        }
    }
}

impl AnimationTiming {
    pub fn next_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let spread = self.delay_spread.as_millis() as u64;
        if spread == 0 {
            return self.min_delay;
        }
        self.min_delay + Duration::from_millis(rng.gen_range(0..spread))
    }
}

/// One toggle request produced by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub pattern: Pattern,
    pub indices: Vec<usize>,
}

impl Tick {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_pattern(PatternKind::choose(rng).sample(rng))
    }

    /// Keeps only indices that land on the grid.
    pub fn from_pattern(pattern: Pattern) -> Self {
        let indices = pattern
            .indices()
            .into_iter()
            .filter(|&index| index < CELL_COUNT)
            .collect();
        Self { pattern, indices }
    }
}

async fn run_animation(
    ticks: UnboundedSender<Tick>,
    mut rng: StdRng,
    timing: AnimationTiming,
    notify: Notify,
) {
    loop {
        let tick = Tick::sample(&mut rng);
        let delay = timing.next_delay(&mut rng);
        debug!(
            pattern = tick.pattern.kind().name(),
            cells = tick.indices.len(),
            next_delay_ms = delay.as_millis() as u64,
            "animation tick"
        );

        // Receiver gone means the owner stopped listening.
        if ticks.send(tick).is_err() {
            break;
        }
        notify();

        tokio::time::sleep(delay).await;
    }
}

/// Running/Paused state machine around one cancellable tokio task.
pub struct AnimationDriver {
    timing: AnimationTiming,
    rng: StdRng,
    notify: Notify,
    task: Option<JoinHandle<()>>,
    ticks: Option<UnboundedReceiver<Tick>>,
}

impl AnimationDriver {
    /// `rng` seeds each run; every `start` draws a fresh seed from it.
    pub fn new(timing: AnimationTiming, rng: StdRng, notify: Notify) -> Self {
        Self { timing, rng, notify, task: None, ticks: None }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    pub fn timing(&self) -> AnimationTiming {
        self.timing
    }

    /// Spawns a fresh loop on `runtime`. The first tick is sent immediately.
    /// Does nothing if already running.
    pub fn start(&mut self, runtime: &Handle) {
        if self.is_running() {
            return;
        }
        let (tx, rx) = mpsc::unbounded_channel();
        let rng = StdRng::seed_from_u64(self.rng.next_u64());
        let task = runtime.spawn(run_animation(tx, rng, self.timing, Arc::clone(&self.notify)));

        self.task = Some(task);
        self.ticks = Some(rx);
    }

    /// Cancels the pending sleep and throws away any tick not yet drained.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.ticks = None;
    }

    /// Takes every tick sent since the last call. Empty while paused.
    pub fn drain(&mut self) -> Vec<Tick> {
        let mut drained = Vec::new();
        if let Some(ticks) = self.ticks.as_mut() {
            while let Ok(tick) = ticks.try_recv() {
                drained.push(tick);
            }
        }
        drained
    }
}

impl Drop for AnimationDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_driver(seed: u64) -> (AnimationDriver, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let notify: Notify = Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let driver = AnimationDriver::new(
            AnimationTiming::default(),
            StdRng::seed_from_u64(seed),
            notify,
        );
        (driver, count)
    }

    #[test]
    fn delays_fall_in_default_window() {
        let timing = AnimationTiming::default();
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..10_000 {
            let delay = timing.next_delay(&mut rng);
            assert!(delay >= Duration::from_millis(600), "{delay:?}");
            assert!(delay < Duration::from_millis(2000), "{delay:?}");
        }
    }

    #[test]
    fn zero_spread_gives_fixed_delay() {
        let timing = AnimationTiming {
            min_delay: Duration::from_millis(250),
            delay_spread: Duration::ZERO,
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(timing.next_delay(&mut rng), Duration::from_millis(250));
    }

    #[test]
    fn sampled_ticks_only_carry_grid_indices() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..1_000 {
            let tick = Tick::sample(&mut rng);
            assert!(!tick.indices.is_empty());
            assert!(tick.indices.iter().all(|&index| index < CELL_COUNT));
            assert_eq!(tick.indices, tick.pattern.indices());
        }
    }

    #[test]
    fn off_grid_indices_are_dropped_from_ticks() {
        let tick = Tick::from_pattern(Pattern::HorizontalWave { row: 10, start_col: 0, length: 5 });
        assert!(tick.indices.is_empty());

        let tick = Tick::from_pattern(Pattern::Scattered { cells: vec![3, CELL_COUNT, 98, 250] });
        assert_eq!(tick.indices, vec![3, 98]);
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_is_immediate() {
        let (mut driver, notified) = counting_driver(1);
        driver.start(&Handle::current());
        assert!(driver.is_running());

        tokio::time::sleep(Duration::from_millis(1)).await;

        assert_eq!(driver.drain().len(), 1);
        assert_eq!(notified.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn keeps_ticking_within_delay_window() {
        let (mut driver, _) = counting_driver(2);
        driver.start(&Handle::current());

        // Ticks land at t=0 and then at least every 2s, at most every 600ms.
        tokio::time::sleep(Duration::from_millis(10_001)).await;
        let ticks = driver.drain().len();

        assert!((6..=17).contains(&ticks), "got {ticks} ticks");
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_pending_tick() {
        let (mut driver, notified) = counting_driver(3);
        driver.start(&Handle::current());
        tokio::time::sleep(Duration::from_millis(1)).await;
        let before = notified.load(Ordering::SeqCst);

        driver.stop();
        tokio::time::sleep(Duration::from_secs(30)).await;

        assert!(!driver.is_running());
        assert_eq!(notified.load(Ordering::SeqCst), before);
        assert!(driver.drain().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn restart_spawns_a_fresh_loop() {
        let (mut driver, notified) = counting_driver(4);
        driver.start(&Handle::current());
        tokio::time::sleep(Duration::from_millis(1)).await;
        driver.stop();

        driver.start(&Handle::current());
        tokio::time::sleep(Duration::from_millis(1)).await;

        assert_eq!(notified.load(Ordering::SeqCst), 2);
        assert_eq!(driver.drain().len(), 1);
    }
}
