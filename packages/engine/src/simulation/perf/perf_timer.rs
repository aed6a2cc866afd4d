#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Run `f`, returning its value and the wall-clock milliseconds it took.
/// Disabled runs skip the clock and report 0.
pub(crate) fn timed<T>(enabled: bool, f: impl FnOnce() -> T) -> (T, f64) {
    if !enabled {
        return (f(), 0.0);
    }
    let start = now_ms();
    let value = f();
    (value, (now_ms() - start).max(0.0))
}
