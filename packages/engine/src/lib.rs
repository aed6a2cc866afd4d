//! Smoke Pool - fixed-capacity smoke particles for canvas games
//!
//! Architecture:
//! - core/        - indexing macro, console logger
//! - pool/        - the particle ring (emit / update / render)
//! - domain/      - visual style and JSON settings
//! - simulation/  - frame-driven orchestration + WASM facade

// Utils with the `fast!` macro (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod pool;
pub mod domain;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the module: panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::utils::logging::init_console_logger(log::LevelFilter::Info);
    log::info!("smoke pool WASM module initialized (v{})", env!("CARGO_PKG_VERSION"));
}

/// Get module version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::settings::{PoolSettings, SettingsError};
pub use domain::style::{Puff, SmokeStyle};
pub use pool::{Particle, ParticlePool, PoolError, Retirement};
pub use simulation::{AbiLayout, PerfStats, SmokeCore, SmokeParticles};
