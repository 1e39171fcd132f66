/*!
 * Error types shared by the runtime helpers
 *
 * Almost every helper is total. The few that can reject their input report a
 * `ShimError`, which converts into a JS `Error` when crossing the wasm boundary.
 */

use std::fmt;

use wasm_bindgen::prelude::*;

/// Error types for runtime operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShimError {
    /// Typed array constructed with a negative length
    InvalidArrayLength(i32),
    /// Typed array index past the end
    IndexOutOfRange { index: usize, length: usize },
}

impl ShimError {
    /// Name of the JS error class this maps onto
    pub fn js_name(&self) -> &'static str {
        match self {
            ShimError::InvalidArrayLength(_) | ShimError::IndexOutOfRange { .. } => "RangeError",
        }
    }
}

impl fmt::Display for ShimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShimError::InvalidArrayLength(len) => write!(f, "Invalid typed array length: {}", len),
            ShimError::IndexOutOfRange { index, length } => {
                write!(f, "Index {} out of range for typed array of length {}", index, length)
            }
        }
    }
}

impl std::error::Error for ShimError {}

impl From<ShimError> for JsValue {
    fn from(error: ShimError) -> Self {
        let err = js_sys::Error::new(&error.to_string());
        err.set_name(error.js_name());
        err.into()
    }
}

/// Result type for runtime operations
pub type ShimResult<T> = Result<T, ShimError>;
