/*!
 * `Number(text)` for transpiled programs
 *
 * Follows C-locale `atoi` rather than the JS grammar: leading whitespace,
 * one optional sign, then as many decimal digits as are present. Trailing
 * garbage is ignored and input without digits parses to zero.
 */

use wasm_bindgen::prelude::*;

/// Parse the leading signed decimal integer of `text`.
///
/// Never fails. Values past the `i32` range saturate.
pub fn number(text: &str) -> i32 {
    let bytes = text.as_bytes();
    let mut pos = 0;

    // isspace() in the C locale
    while pos < bytes.len() && matches!(bytes[pos], b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r') {
        pos += 1;
    }

    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    // Accumulate toward the sign so i32::MIN is reachable without overflow
    let mut value: i32 = 0;
    for &byte in &bytes[pos..] {
        if !byte.is_ascii_digit() {
            break;
        }
        let digit = (byte - b'0') as i32;
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    value
}

/// wasm export of [`number`]
#[wasm_bindgen(js_name = number)]
pub fn js_number(text: &str) -> i32 {
    number(text)
}
