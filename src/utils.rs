/*!
 * Diagnostics and clock helpers
 *
 * `trace!` mirrors `console_log!` but writes to stderr (or `console.debug`
 * under wasm) so program output on stdout stays untouched.
 */

use std::fmt;

#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{Instant, SystemTime, UNIX_EPOCH};

#[cfg(not(target_arch = "wasm32"))]
static TRACE_EPOCH: Lazy<Instant> = Lazy::new(Instant::now);

/// Emit a runtime diagnostic.
///
/// Diagnostics never go to stdout, which belongs to `console.log`. Nothing is
/// formatted unless the `trace` feature is on.
macro_rules! trace {
    ($($t:tt)*) => {
        if cfg!(feature = "trace") {
            $crate::utils::write_trace(format_args!($($t)*))
        }
    };
}

pub(crate) use trace;

pub(crate) fn write_trace(message: fmt::Arguments<'_>) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Some(performance) = window.performance() {
                let timestamp = performance.now();
                web_sys::console::debug_1(&format!("[{:.3}ms] {}", timestamp, message).into());
                return;
            }
        }

        web_sys::console::debug_1(&format!("[crush] {}", message).into());
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let elapsed = TRACE_EPOCH.elapsed().as_secs_f64() * 1000.0;
        eprintln!("[{:.3}ms] {}", elapsed, message);
    }
}

/// Seed derived from the current wall-clock time.
pub fn clock_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        // Date.now() is in whole milliseconds; SystemTime::now panics on
        // wasm32-unknown-unknown.
        js_sys::Date::now() as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(duration) => duration.as_nanos() as u64,
            // Clock set before 1970: still a usable seed
            Err(err) => err.duration().as_nanos() as u64,
        }
    }
}
