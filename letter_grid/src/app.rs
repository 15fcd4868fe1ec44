// app.rs - Application state: owns the grid, the animation driver and its runtime

use std::sync::Arc;

use egui::Color32;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{info, trace};

use crate::config::Settings;
use crate::driver::{AnimationDriver, Notify};
use crate::error::Result;
use crate::grid::LetterGrid;

/// The letter grid app. Only this struct mutates the grid; the driver task
/// just sends index sets that `apply_pending_ticks` folds in.
pub struct LetterGridApp {
    grid: LetterGrid,
    driver: AnimationDriver,
    rng: StdRng,

    pub lit_color: Color32,
    pub unlit_color: Color32,
    pub ticks_applied: u64,

    // Declared last so the driver task is aborted before the runtime shuts down.
    runtime: tokio::runtime::Runtime,
}

/// Operations the UI drives.
pub trait LetterGridInterface {
    fn toggle_animation(&mut self);
    fn reset_grid(&mut self);
    fn toggle_cell(&mut self, id: usize);
    fn apply_pending_ticks(&mut self) -> usize;
    fn is_animating(&self) -> bool;
}

impl LetterGridApp {
    /// Builds the grid and, unless `settings` say otherwise, starts animating.
    /// `notify` runs after every driver tick, typically to request a repaint.
    pub fn new(settings: &Settings, notify: impl Fn() + Send + Sync + 'static) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;

        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = LetterGrid::new(&mut rng);
        let driver_rng = StdRng::seed_from_u64(rng.next_u64());
        let notify: Notify = Arc::new(notify);

        let mut app = Self {
            grid,
            driver: AnimationDriver::new(settings.timing, driver_rng, notify),
            rng,
            lit_color: Color32::from_rgb(59, 130, 246),
            unlit_color: Color32::from_rgb(203, 213, 225),
            ticks_applied: 0,
            runtime,
        };

        if settings.start_animating {
            app.start_animation();
        }
        Ok(app)
    }

    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    fn start_animation(&mut self) {
        self.driver.start(self.runtime.handle());
        info!("animation started");
    }
}

impl LetterGridInterface for LetterGridApp {
    fn toggle_animation(&mut self) {
        if self.driver.is_running() {
            self.driver.stop();
            info!("animation paused");
        } else {
            self.start_animation();
        }
    }

    fn reset_grid(&mut self) {
        self.grid.reinitialize(&mut self.rng);
        info!(lit = self.grid.lit_count(), "grid reset with new letters");
    }

    fn toggle_cell(&mut self, id: usize) {
        self.grid.toggle_one(id);
        if let Some(cell) = self.grid.get(id) {
            trace!(id, letter = %cell.letter(), lit = cell.is_lit(), "cell toggled manually");
        }
    }

    fn apply_pending_ticks(&mut self) -> usize {
        let ticks = self.driver.drain();
        for tick in &ticks {
            self.grid.toggle_subset(&tick.indices);
        }
        self.ticks_applied += ticks.len() as u64;
        ticks.len()
    }

    fn is_animating(&self) -> bool {
        self.driver.is_running()
    }
}
