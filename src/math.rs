/*!
 * The `Math` namespace: `floor` and `random`
 *
 * `random` draws from an explicit `JsRandom` instead of a hidden process-wide
 * generator, so whoever needs randomness owns (and seeds) it.
 */

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::prelude::*;

use crate::utils::{clock_seed, trace};

/// Largest integer not greater than `x`, as an `i32`.
///
/// Inputs outside the `i32` range saturate and NaN maps to 0.
#[inline]
pub fn floor(x: f64) -> i32 {
    libm::floor(x) as i32
}

/// wasm export of [`floor`]
#[wasm_bindgen(js_name = floor)]
pub fn js_floor(x: f64) -> i32 {
    floor(x)
}

/// Pseudo-random source behind `Math.random()`. Not cryptographically secure.
#[derive(Debug, Clone)]
pub struct JsRandom {
    rng: StdRng,
    seed: u64,
}

impl JsRandom {
    /// Generator with a fixed seed; equal seeds give equal sequences
    pub fn with_seed(seed: u64) -> Self {
        JsRandom {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Generator seeded from the wall clock
    pub fn from_clock() -> Self {
        let seed = clock_seed();
        trace!("Math.random seeded from clock: {}", seed);
        Self::with_seed(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Next value in `[0, 1)`
    pub fn random(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_floor_basic() {
        assert_eq!(floor(0.0), 0);
        assert_eq!(floor(2.7), 2);
        assert_eq!(floor(-2.3), -3);
        assert_eq!(floor(-0.5), -1);
        assert_eq!(floor(5.0), 5);
        assert_eq!(floor(-7.0), -7);
    }

    #[test]
    fn test_floor_bounds_property() {
        let samples = [-1e9, -12345.678, -1.0001, -0.0, 0.25, 3.5, 999.999, 2.1e9];
        for x in samples {
            let f = floor(x) as f64;
            assert!(f <= x, "floor({}) = {} exceeds input", x, f);
            assert!(x < f + 1.0, "floor({}) = {} is too small", x, f);
        }
    }

    #[test]
    fn test_floor_out_of_range_saturates() {
        assert_eq!(floor(1e12), i32::MAX);
        assert_eq!(floor(-1e12), i32::MIN);
        assert_eq!(floor(f64::NAN), 0);
    }

    #[test]
    fn test_random_in_unit_interval() {
        let mut rng = JsRandom::with_seed(7);
        for _ in 0..10_000 {
            let r = rng.random();
            assert!((0.0..1.0).contains(&r), "value {} outside [0, 1)", r);
        }
    }

    #[test]
    fn test_random_is_reproducible() {
        let mut a = JsRandom::with_seed(1234);
        let mut b = JsRandom::with_seed(1234);
        for _ in 0..100 {
            assert_relative_eq!(a.random(), b.random());
        }
        assert_eq!(a.seed(), 1234);
    }

    #[test]
    fn test_random_differs_across_seeds() {
        let mut a = JsRandom::with_seed(1);
        let mut b = JsRandom::with_seed(2);
        let xs: Vec<f64> = (0..8).map(|_| a.random()).collect();
        let ys: Vec<f64> = (0..8).map(|_| b.random()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_random_mean_is_roughly_half() {
        let mut rng = JsRandom::with_seed(99);
        let n = 10_000;
        let mean = (0..n).map(|_| rng.random()).sum::<f64>() / n as f64;
        assert_relative_eq!(mean, 0.5, epsilon = 0.05);
    }
}
