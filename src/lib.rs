/*!
 * CrushScript runtime
 *
 * JavaScript-style globals for programs transpiled from a small JS subset:
 * - `Number(text)` with C `atoi` semantics
 * - `Math.floor` and a seedable `Math.random`
 * - `console.log` for integers and strings
 * - owned `Int32Array` storage
 * - `process.argv` capture, bundled with the rest in a `Runtime`
 *
 * Native builds print to stdout; wasm builds route through the host console.
 */

mod console;
mod math;
mod number;
mod process;
mod runtime;
mod typed_array;
mod types;
mod utils;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Initialize the WASM module
/// This should be called once when the module is loaded
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error reporting in development
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    utils::trace!("CrushScript runtime initialized - version {}", get_version());
}

pub use console::{log, Console, HostConsole, Loggable, StdoutWriter};
pub use math::{floor, JsRandom};
pub use number::number;
pub use process::Process;
pub use runtime::Runtime;
pub use typed_array::{js_constructor_int32_array, Int32Array};
pub use types::{ShimError, ShimResult};
pub use utils::clock_seed;
