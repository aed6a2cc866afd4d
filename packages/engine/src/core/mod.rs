//! Core helpers shared by the pool and the simulation layer.
//!
//! Declared first in `lib.rs` with `#[macro_use]` so `fast!` is in scope
//! for every module that follows.

#[macro_use]
pub mod utils;
