use js_sys::{Array, Function};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::domain::style::{Puff, SmokeStyle, PUFF_STRIDE};
use crate::pool::STRIDE;

use super::perf_stats::PerfStats;
use super::SmokeCore;

/// Buffer addresses in wasm memory, so JS can map them as `Float32Array`s.
#[wasm_bindgen]
pub struct AbiLayout {
    storage_ptr: u32,
    storage_len_elements: u32,
    storage_len_bytes: u32,
    storage_stride: u32,
    puffs_ptr: u32,
    puffs_len_elements: u32,
    puffs_len_bytes: u32,
    puffs_stride: u32,
    head: u32,
    len: u32,
    capacity: u32,
}

#[wasm_bindgen]
impl AbiLayout {
    #[wasm_bindgen(getter)]
    pub fn storage_ptr(&self) -> u32 { self.storage_ptr }
    #[wasm_bindgen(getter)]
    pub fn storage_len_elements(&self) -> u32 { self.storage_len_elements }
    #[wasm_bindgen(getter)]
    pub fn storage_len_bytes(&self) -> u32 { self.storage_len_bytes }
    #[wasm_bindgen(getter)]
    pub fn storage_stride(&self) -> u32 { self.storage_stride }

    #[wasm_bindgen(getter)]
    pub fn puffs_ptr(&self) -> u32 { self.puffs_ptr }
    #[wasm_bindgen(getter)]
    pub fn puffs_len_elements(&self) -> u32 { self.puffs_len_elements }
    #[wasm_bindgen(getter)]
    pub fn puffs_len_bytes(&self) -> u32 { self.puffs_len_bytes }
    #[wasm_bindgen(getter)]
    pub fn puffs_stride(&self) -> u32 { self.puffs_stride }

    /// Oldest live slot; live slots run from here for `len` slots, mod `capacity`
    #[wasm_bindgen(getter)]
    pub fn head(&self) -> u32 { self.head }
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> u32 { self.len }
    #[wasm_bindgen(getter)]
    pub fn capacity(&self) -> u32 { self.capacity }
}

#[wasm_bindgen]
pub struct SmokeParticles {
    core: SmokeCore,
}

#[wasm_bindgen]
impl SmokeParticles {
    /// Create a pool holding at most `capacity` puffs
    #[wasm_bindgen(constructor)]
    pub fn new(capacity: usize) -> Self {
        Self {
            core: SmokeCore::new(capacity),
        }
    }

    #[wasm_bindgen(js_name = fromSettingsJson)]
    pub fn from_settings_json(json: &str) -> Result<SmokeParticles, JsValue> {
        let core = SmokeCore::from_settings_json(json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    /// Replace capacity/lifetime/style; live puffs are discarded
    pub fn load_settings(&mut self, json: &str) -> Result<(), JsValue> {
        self.core
            .load_settings_json(json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn capacity(&self) -> u32 { self.core.capacity() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// `NaN` when no lifetime is configured
    #[wasm_bindgen(getter)]
    pub fn lifetime(&self) -> f32 { self.core.lifetime().unwrap_or(f32::NAN) }

    /// Non-positive or non-finite values switch the lifetime off
    pub fn set_lifetime(&mut self, lifetime: f32) {
        let lifetime = (lifetime.is_finite() && lifetime > 0.0).then_some(lifetime);
        self.core.set_lifetime(lifetime);
    }

    pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
        let style = SmokeStyle { color: [r, g, b], ..*self.core.style() };
        self.core.set_style(style);
    }

    /// Enable or disable per-frame timings
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Stats of the last update
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Emit a puff; `false` when the pool is full and the puff was dropped
    pub fn emit(&mut self, x: f32, y: f32) -> bool {
        self.core.emit(x, y)
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Age puffs by `elapsed` and call `retire(x, y, age)` for each, oldest
    /// first. Truthy answers retire puffs from the oldest end until the first
    /// falsy one. If `retire` throws, the throwing puff and everything newer
    /// are kept and the exception is rethrown after the pass.
    pub fn update(&mut self, elapsed: f32, retire: &Function) -> Result<u32, JsValue> {
        let mut failure: Option<JsValue> = None;

        let retired = self.core.update(elapsed, |particle| {
            if failure.is_some() {
                return false;
            }
            let verdict = retire.call3(
                &JsValue::NULL,
                &JsValue::from_f64(particle.x as f64),
                &JsValue::from_f64(particle.y as f64),
                &JsValue::from_f64(particle.age as f64),
            );
            match verdict {
                Ok(value) => value.is_truthy(),
                Err(err) => {
                    failure = Some(err);
                    false
                }
            }
        });

        match failure {
            Some(err) => Err(err),
            None => Ok(retired as u32),
        }
    }

    /// `update` with the configured lifetime as the retire rule
    pub fn step(&mut self, elapsed: f32) -> u32 {
        self.core.step(elapsed) as u32
    }

    /// Call `draw(x, y, radius, opacity)` once per live puff, oldest first.
    /// Stops calling after the first exception and rethrows it.
    pub fn render(&self, draw: &Function) -> Result<(), JsValue> {
        let args = Array::new_with_length(PUFF_STRIDE as u32);
        let mut failure: Option<JsValue> = None;

        self.core.render(|puff| {
            if failure.is_some() {
                return;
            }
            for (i, value) in puff.to_array().into_iter().enumerate() {
                args.set(i as u32, JsValue::from_f64(value as f64));
            }
            if let Err(err) = draw.apply(&JsValue::NULL, &args) {
                failure = Some(err);
            }
        });

        failure.map_or(Ok(()), Err)
    }

    /// Draw every live puff as a filled circle on a 2D canvas
    pub fn render_canvas(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let style = *self.core.style();
        let mut failure: Option<JsValue> = None;

        self.core.render(|puff| {
            if failure.is_some() {
                return;
            }
            if let Err(err) = draw_puff(ctx, &style, puff) {
                failure = Some(err);
            }
        });

        failure.map_or(Ok(()), Err)
    }

    /// Pack live puffs into the puff buffer; returns how many were written
    pub fn extract_puffs(&mut self) -> u32 {
        self.core.extract_puffs() as u32
    }

    /// Get pointer to puff buffer ([x, y, radius, opacity] per puff)
    pub fn puffs_ptr(&self) -> *const f32 {
        self.core.puffs_ptr()
    }

    /// Get pointer to raw slot storage ([x, y, age] per slot)
    pub fn storage_ptr(&self) -> *const f32 {
        self.core.storage_ptr()
    }

    pub fn abi_layout(&self) -> AbiLayout {
        let storage_len = self.core.storage_len_elements();
        let puffs_len = self.core.puffs_len_elements();
        let pool = self.core.pool();
        let float = std::mem::size_of::<f32>();

        AbiLayout {
            storage_ptr: self.core.storage_ptr() as u32,
            storage_len_elements: storage_len as u32,
            storage_len_bytes: (storage_len * float) as u32,
            storage_stride: STRIDE as u32,
            puffs_ptr: self.core.puffs_ptr() as u32,
            puffs_len_elements: puffs_len as u32,
            puffs_len_bytes: (puffs_len * float) as u32,
            puffs_stride: PUFF_STRIDE as u32,
            head: pool.head() as u32,
            len: pool.len() as u32,
            capacity: pool.capacity() as u32,
        }
    }
}

fn draw_puff(ctx: &CanvasRenderingContext2d, style: &SmokeStyle, puff: Puff) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(
        puff.x as f64,
        puff.y as f64,
        puff.radius as f64,
        0.0,
        std::f64::consts::TAU,
    )?;
    ctx.set_fill_style_str(&style.fill_style(puff.opacity));
    ctx.fill();
    Ok(())
}
