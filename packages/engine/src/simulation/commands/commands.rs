use super::SmokeCore;

pub(super) fn emit(core: &mut SmokeCore, x: f32, y: f32) -> bool {
    if core.pool.emit(x, y) {
        core.pending_emitted = core.pending_emitted.saturating_add(1);
        core.saturated = false;
        return true;
    }

    core.pending_dropped = core.pending_dropped.saturating_add(1);
    if !core.saturated {
        // Once per saturation episode, not once per dropped puff
        log::debug!(
            "smoke pool saturated at {} particles, dropping new emits",
            core.pool.capacity()
        );
        core.saturated = true;
    }
    false
}

pub(super) fn clear(core: &mut SmokeCore) {
    if !core.pool.is_empty() {
        log::debug!("clearing {} smoke particles", core.pool.len());
    }
    core.pool.clear();
    core.saturated = false;
}
