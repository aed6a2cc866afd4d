//! SmokeCore - frame-driven smoke particle simulation
//!
//! Owns one `ParticlePool` plus everything the host loop needs around it:
//! the visual style, an optional lifetime for `step`, a frame counter and
//! per-frame stats. The JS-facing wrapper lives in `facade`.
//!
//! Per frame the host is expected to call, in order:
//!   emit* -> update/step -> render/extract_puffs

use crate::domain::settings::{PoolSettings, SettingsError};
use crate::domain::style::{Puff, SmokeStyle};
use crate::pool::{Particle, ParticlePool};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::{AbiLayout, SmokeParticles};
pub use perf_stats::PerfStats;

pub struct SmokeCore {
    pool: ParticlePool,
    style: SmokeStyle,
    lifetime: Option<f32>,

    // Packed [x, y, radius, opacity] per live puff, for JS batch drawing
    puff_transfer_buffer: Vec<f32>,

    // State
    frame: u64,
    pending_emitted: u32,
    pending_dropped: u32,
    saturated: bool,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SmokeCore {
    /// Create a core with default style and no lifetime
    pub fn new(capacity: usize) -> Self {
        init::create_smoke_core(&PoolSettings {
            capacity,
            ..PoolSettings::default()
        })
    }

    pub fn from_settings(settings: &PoolSettings) -> Self {
        init::create_smoke_core(settings)
    }

    pub fn from_settings_json(json: &str) -> Result<Self, SettingsError> {
        let settings = PoolSettings::from_json(json)?;
        Ok(init::create_smoke_core(&settings))
    }

    /// Replace pool, style and lifetime. Live particles are discarded.
    pub fn load_settings_json(&mut self, json: &str) -> Result<(), SettingsError> {
        settings::load_settings_json(self, json)
    }

    pub fn pool(&self) -> &ParticlePool { &self.pool }

    pub fn style(&self) -> &SmokeStyle { &self.style }

    pub fn set_style(&mut self, style: SmokeStyle) {
        settings::set_style(self, style);
    }

    pub fn lifetime(&self) -> Option<f32> { self.lifetime }

    pub fn set_lifetime(&mut self, lifetime: Option<f32>) {
        settings::set_lifetime(self, lifetime);
    }

    pub fn particle_count(&self) -> u32 { self.pool.len() as u32 }

    pub fn capacity(&self) -> u32 { self.pool.capacity() as u32 }

    pub fn frame(&self) -> u64 { self.frame }

    /// Enable or disable per-frame timings (counters are always kept)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Snapshot of the last completed update
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Emit a puff at (x, y). `false` when the pool is saturated.
    pub fn emit(&mut self, x: f32, y: f32) -> bool {
        commands::emit(self, x, y)
    }

    /// Drop every live puff
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Age all puffs and retire the expired run at the head.
    /// Returns how many were retired.
    pub fn update<F>(&mut self, elapsed: f32, retire: F) -> usize
    where
        F: FnMut(Particle) -> bool,
    {
        step::update(self, elapsed, retire)
    }

    /// `update` using the configured lifetime as the retire rule
    pub fn step(&mut self, elapsed: f32) -> usize {
        step::step(self, elapsed)
    }

    /// Draw every live puff, oldest first
    pub fn render<F>(&self, draw: F)
    where
        F: FnMut(Puff),
    {
        render_extract::render(self, draw);
    }

    /// Pack live puffs into the transfer buffer; returns the puff count
    pub fn extract_puffs(&mut self) -> usize {
        render_extract::extract_puffs(self)
    }

    pub fn puffs(&self) -> &[f32] {
        render_extract::puffs(self)
    }

    /// Get pointer to puff transfer buffer (for JS rendering)
    pub fn puffs_ptr(&self) -> *const f32 {
        self.puff_transfer_buffer.as_ptr()
    }

    pub fn puffs_len_elements(&self) -> usize {
        self.puff_transfer_buffer.len()
    }

    /// Get pointer to raw slot storage (for JS zero-copy reads)
    pub fn storage_ptr(&self) -> *const f32 {
        self.pool.as_slice().as_ptr()
    }

    pub fn storage_len_elements(&self) -> usize {
        self.pool.as_slice().len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
