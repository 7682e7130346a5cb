//! Simulation time tracking.

use serde::{Deserialize, Serialize};

/// Diagnostic clock advanced once per step.
///
/// The host decides the cadence and the `dt` of each step; the clock just
/// records how many steps have run and how much simulated time they covered.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Completed step count.
    pub tick: u64,
    /// Accumulated simulated seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Record one completed step of length `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += f64::from(dt);
    }
}
