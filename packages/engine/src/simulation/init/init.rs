use crate::domain::settings::{PoolSettings, MAX_CAPACITY};
use crate::domain::style::PUFF_STRIDE;
use crate::pool::ParticlePool;

use super::{PerfStats, SmokeCore};

pub(super) fn create_smoke_core(settings: &PoolSettings) -> SmokeCore {
    // `SmokeParticles::new` takes a raw capacity that never went through
    // `PoolSettings::validate`.
    let capacity = if settings.capacity > MAX_CAPACITY {
        log::warn!("smoke capacity {} clamped to {MAX_CAPACITY}", settings.capacity);
        MAX_CAPACITY
    } else {
        settings.capacity
    };
    let pool = ParticlePool::new(capacity);
    let puff_transfer_buffer = vec![0.0; capacity * PUFF_STRIDE];

    let perf_stats = PerfStats {
        capacity: u32::try_from(capacity).unwrap_or(u32::MAX),
        ..PerfStats::default()
    };

    SmokeCore {
        pool,
        style: settings.style,
        lifetime: settings.lifetime,
        puff_transfer_buffer,
        frame: 0,
        pending_emitted: 0,
        pending_dropped: 0,
        saturated: false,
        perf_enabled: false,
        perf_stats,
    }
}
