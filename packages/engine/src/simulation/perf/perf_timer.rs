//! Step timing for `PerfStats`

#[cfg(not(target_arch = "wasm32"))]
use std::sync::OnceLock;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

/// Milliseconds since an arbitrary origin
fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        static ORIGIN: OnceLock<Instant> = OnceLock::new();
        ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
    }
}

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    start_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { start_ms: now_ms() }
    }

    /// Never negative, `Date.now()` can step backwards
    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.start_ms).max(0.0)
    }
}

/// Run `pass`, timing it only when `enabled`
pub(crate) fn timed<T>(enabled: bool, pass: impl FnOnce() -> T) -> (T, Option<f64>) {
    if !enabled {
        return (pass(), None);
    }
    let timer = PerfTimer::start();
    let value = pass();
    (value, Some(timer.elapsed_ms()))
}
