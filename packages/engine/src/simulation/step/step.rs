use crate::pool::Particle;

use super::perf_timer::timed;
use super::SmokeCore;

pub(super) fn update<F>(core: &mut SmokeCore, elapsed: f32, retire: F) -> usize
where
    F: FnMut(Particle) -> bool,
{
    let pool = &mut core.pool;
    let (retirement, update_ms) = timed(core.perf_enabled, || pool.update(elapsed, retire));

    core.frame += 1;
    publish_frame_stats(core, retirement.count(), update_ms);
    retirement.count()
}

pub(super) fn step(core: &mut SmokeCore, elapsed: f32) -> usize {
    match core.lifetime {
        Some(lifetime) => update(core, elapsed, |p| p.age >= lifetime),
        None => update(core, elapsed, |_| false),
    }
}

fn publish_frame_stats(core: &mut SmokeCore, retired: usize, update_ms: f64) {
    let stats = &mut core.perf_stats;
    stats.reset();
    stats.update_ms = update_ms;
    stats.emitted = core.pending_emitted;
    stats.dropped = core.pending_dropped;
    stats.retired = saturating_u32(retired);
    stats.live = saturating_u32(core.pool.len());
    stats.capacity = saturating_u32(core.pool.capacity());
    stats.frame = core.frame;

    core.pending_emitted = 0;
    core.pending_dropped = 0;
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
