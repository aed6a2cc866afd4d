use wasm_bindgen::prelude::*;

/// Per-frame counters, published when an update completes.
///
/// `emitted`/`dropped` cover the emits since the previous update. Timings
/// stay at zero unless perf metrics are enabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) update_ms: f64,
    pub(super) extract_ms: f64,
    pub(super) emitted: u32,
    pub(super) dropped: u32,
    pub(super) retired: u32,
    pub(super) live: u32,
    pub(super) capacity: u32,
    pub(super) frame: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn update_ms(&self) -> f64 { self.update_ms }
    #[wasm_bindgen(getter)]
    pub fn extract_ms(&self) -> f64 { self.extract_ms }
    #[wasm_bindgen(getter)]
    pub fn emitted(&self) -> u32 { self.emitted }
    #[wasm_bindgen(getter)]
    pub fn dropped(&self) -> u32 { self.dropped }
    #[wasm_bindgen(getter)]
    pub fn retired(&self) -> u32 { self.retired }
    #[wasm_bindgen(getter)]
    pub fn live(&self) -> u32 { self.live }
    #[wasm_bindgen(getter)]
    pub fn capacity(&self) -> u32 { self.capacity }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }

    /// Share of the pool in use, 0..=1 (0 for a zero-capacity pool)
    #[wasm_bindgen(getter)]
    pub fn occupancy(&self) -> f32 {
        if self.capacity == 0 {
            0.0
        } else {
            self.live as f32 / self.capacity as f32
        }
    }
}
