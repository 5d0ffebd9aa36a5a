//! Economy module - closed-form cost and production curves
//!
//! All functions are pure: the same counts always give the same numbers.
//!
//! - Kitten price: `10 * (1 + 0.2 * kittens)` (10, 12, 14, 16, ...)
//! - Bowl price: `25 + 10 * bowls` (25, 35, 45, ...)
//! - Per-kitten output: `base_rate * (1 + 0.25 * bowls)`
//! - Total passive output: `kittens * per-kitten output`

use crate::types::{
    BOWL_BASE_COST, BOWL_COST_STEP, BOWL_RATE_BONUS, KITTEN_BASE_COST, KITTEN_COST_GROWTH,
};

/// Price of the next kitten when `kittens` are already owned.
pub fn kitten_cost(kittens: u32) -> f64 {
    KITTEN_BASE_COST * (1.0 + KITTEN_COST_GROWTH * f64::from(kittens))
}

/// Price of the next bowl when `bowls` are already owned.
pub fn bowl_cost(bowls: u32) -> f64 {
    BOWL_BASE_COST + BOWL_COST_STEP * f64::from(bowls)
}

/// Yarn per second produced by one kitten.
pub fn per_kitten_rate(base_rate: f64, bowls: u32) -> f64 {
    base_rate * (1.0 + BOWL_RATE_BONUS * f64::from(bowls))
}

/// Yarn per second produced by the whole household.
pub fn passive_rate(kittens: u32, base_rate: f64, bowls: u32) -> f64 {
    f64::from(kittens) * per_kitten_rate(base_rate, bowls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KITTEN_BASE_RATE;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_kitten_cost_curve() {
        assert!(approx(kitten_cost(0), 10.0));
        assert!(approx(kitten_cost(1), 12.0));
        assert!(approx(kitten_cost(2), 14.0));
        assert!(approx(kitten_cost(10), 30.0));
    }

    #[test]
    fn test_kitten_cost_strictly_increasing() {
        for k in 0..1000 {
            assert!(kitten_cost(k + 1) > kitten_cost(k), "not increasing at {k}");
            assert!(approx(kitten_cost(k), 10.0 * (1.0 + 0.2 * k as f64)));
        }
    }

    #[test]
    fn test_bowl_cost_curve() {
        assert_eq!(bowl_cost(0), 25.0);
        assert_eq!(bowl_cost(1), 35.0);
        assert_eq!(bowl_cost(2), 45.0);
        for b in 0..1000 {
            assert!(bowl_cost(b + 1) > bowl_cost(b));
            assert_eq!(bowl_cost(b), 25.0 + 10.0 * b as f64);
        }
    }

    #[test]
    fn test_per_kitten_rate_with_bowls() {
        assert_eq!(per_kitten_rate(KITTEN_BASE_RATE, 0), 0.5);
        assert_eq!(per_kitten_rate(KITTEN_BASE_RATE, 1), 0.625);
        assert_eq!(per_kitten_rate(KITTEN_BASE_RATE, 4), 1.0);
    }

    #[test]
    fn test_passive_rate_zero_without_kittens() {
        for bowls in [0, 1, 5, 100] {
            assert_eq!(passive_rate(0, KITTEN_BASE_RATE, bowls), 0.0);
        }
    }

    #[test]
    fn test_passive_rate_two_kittens_one_bowl() {
        assert_eq!(passive_rate(2, KITTEN_BASE_RATE, 1), 1.25);
    }
}
