use crate::domain::settings::{PoolSettings, SettingsError};
use crate::domain::style::SmokeStyle;

use super::init::create_smoke_core;
use super::perf_stats::PerfStats;
use super::SmokeCore;

pub(super) fn enable_perf_metrics(core: &mut SmokeCore, enabled: bool) {
    core.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(core: &SmokeCore) -> PerfStats {
    core.perf_stats.clone()
}

pub(super) fn set_style(core: &mut SmokeCore, style: SmokeStyle) {
    core.style = style;
}

pub(super) fn set_lifetime(core: &mut SmokeCore, lifetime: Option<f32>) {
    core.lifetime = lifetime;
}

/// Rebuild the pool from JSON settings. On error the core is left as it was.
pub(super) fn load_settings_json(core: &mut SmokeCore, json: &str) -> Result<(), SettingsError> {
    let settings = PoolSettings::from_json(json)?;
    log::info!(
        "loading smoke settings: capacity {}, lifetime {:?}",
        settings.capacity,
        settings.lifetime
    );

    let perf_enabled = core.perf_enabled;
    let frame = core.frame;
    *core = create_smoke_core(&settings);
    core.perf_enabled = perf_enabled;
    core.frame = frame;
    Ok(())
}
