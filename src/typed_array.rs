/*!
 * `Int32Array` backing store for transpiled code
 *
 * `new Int32Array(n)` in the source program becomes
 * `js_constructor_int32_array(n)`. The result owns its storage and frees it on
 * drop; there is no separate release call.
 */

use std::ops::{Deref, DerefMut};

use wasm_bindgen::prelude::*;

use crate::types::{ShimError, ShimResult};
use crate::utils::trace;

/// Owned, contiguous, zero-initialised block of `i32`.
///
/// Exported to JS as `CrushInt32Array` so the glue never shadows the global
/// `Int32Array` that `toTypedArray` constructs.
#[wasm_bindgen(js_name = CrushInt32Array)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Int32Array {
    data: Vec<i32>,
}

impl Int32Array {
    pub fn new(length: usize) -> Self {
        Int32Array {
            data: vec![0; length],
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn fill(&mut self, value: i32) {
        self.data.fill(value);
    }

    /// Bounds-checked write
    pub fn try_set(&mut self, index: usize, value: i32) -> ShimResult<()> {
        let length = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ShimError::IndexOutOfRange { index, length }),
        }
    }

    pub fn into_vec(self) -> Vec<i32> {
        self.data
    }
}

#[wasm_bindgen(js_class = CrushInt32Array)]
impl Int32Array {
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.data.len()
    }

    /// Element at `index`, or 0 past the end
    pub fn get(&self, index: usize) -> i32 {
        self.data.get(index).copied().unwrap_or(0)
    }

    /// Write `value` at `index`
    pub fn set(&mut self, index: usize, value: i32) -> Result<(), JsValue> {
        self.try_set(index, value).map_err(JsValue::from)
    }

    /// Copy into a host-side `Int32Array`
    #[wasm_bindgen(js_name = toTypedArray)]
    pub fn to_typed_array(&self) -> js_sys::Int32Array {
        js_sys::Int32Array::from(self.data.as_slice())
    }
}

impl Deref for Int32Array {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        &self.data
    }
}

impl DerefMut for Int32Array {
    fn deref_mut(&mut self) -> &mut [i32] {
        &mut self.data
    }
}

impl From<Vec<i32>> for Int32Array {
    fn from(data: Vec<i32>) -> Self {
        Int32Array { data }
    }
}

/// `new Int32Array(size)`
pub fn js_constructor_int32_array(size: i32) -> ShimResult<Int32Array> {
    if size < 0 {
        return Err(ShimError::InvalidArrayLength(size));
    }
    trace!("Int32Array allocated with {} slots", size);
    Ok(Int32Array::new(size as usize))
}

/// wasm export of [`js_constructor_int32_array`]
#[wasm_bindgen(js_name = js_constructor_Int32Array)]
pub fn js_constructor_int32_array_export(size: i32) -> Result<Int32Array, JsValue> {
    js_constructor_int32_array(size).map_err(JsValue::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_allocates_writable_slots() {
        let mut arr = js_constructor_int32_array(5).unwrap();
        assert_eq!(arr.len(), 5);
        for i in 0..5 {
            arr[i] = (i as i32) * 10;
        }
        assert_eq!(&arr[..], &[0, 10, 20, 30, 40]);
    }

    #[test]
    fn test_new_is_zeroed() {
        let arr = Int32Array::new(4);
        assert!(arr.iter().all(|&x| x == 0));
    }

    #[test]
    fn test_zero_length() {
        let arr = js_constructor_int32_array(0).unwrap();
        assert!(arr.is_empty());
        assert_eq!(arr.length(), 0);
    }

    #[test]
    fn test_negative_length_rejected() {
        assert_eq!(
            js_constructor_int32_array(-1),
            Err(ShimError::InvalidArrayLength(-1))
        );
    }

    #[test]
    fn test_get_and_try_set() {
        let mut arr = Int32Array::new(3);
        arr.try_set(1, 7).unwrap();
        assert_eq!(arr.get(1), 7);
        assert_eq!(arr.get(10), 0);
        assert_eq!(
            arr.try_set(3, 1),
            Err(ShimError::IndexOutOfRange { index: 3, length: 3 })
        );
    }

    #[test]
    fn test_fill_and_slice_ops() {
        let mut arr = Int32Array::from(vec![3, 1, 2]);
        arr.sort_unstable();
        assert_eq!(arr.into_vec(), vec![1, 2, 3]);

        let mut arr = Int32Array::new(3);
        arr.fill(-9);
        assert_eq!(arr.iter().sum::<i32>(), -27);
    }
}
