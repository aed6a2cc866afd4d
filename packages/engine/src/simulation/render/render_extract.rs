use crate::domain::style::{Puff, PUFF_STRIDE};

use super::perf_timer::timed;
use super::SmokeCore;

pub(super) fn render<F>(core: &SmokeCore, mut draw: F)
where
    F: FnMut(Puff),
{
    let style = core.style;
    core.pool.render(|particle| draw(style.puff(particle)));
}

/// Pack every live puff as [x, y, radius, opacity], oldest first, at the
/// front of the transfer buffer.
pub(super) fn extract_puffs(core: &mut SmokeCore) -> usize {
    let live = core.pool.len();
    let needed = live * PUFF_STRIDE;
    if core.puff_transfer_buffer.len() < needed {
        core.puff_transfer_buffer.resize(needed, 0.0);
    }

    let style = core.style;
    let pool = &core.pool;
    let buffer = &mut core.puff_transfer_buffer;

    let ((), extract_ms) = timed(core.perf_enabled, || {
        let mut buf_idx = 0usize;
        pool.render(|particle| {
            let packed = style.puff(particle).to_array();
            buffer[buf_idx..buf_idx + PUFF_STRIDE].copy_from_slice(&packed);
            buf_idx += PUFF_STRIDE;
        });
    });

    core.perf_stats.extract_ms = extract_ms;
    live
}

/// Puffs written by the last `extract_puffs`. Only meaningful until the next
/// emit/update.
pub(super) fn puffs(core: &SmokeCore) -> &[f32] {
    let len = (core.pool.len() * PUFF_STRIDE).min(core.puff_transfer_buffer.len());
    &core.puff_transfer_buffer[..len]
}
