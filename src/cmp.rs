/*!
Tolerant comparison of floating-point components.

Everything in the crate that asks "are these the same number?" goes
through `is_close()`, so chained arithmetic that picks up a little
rounding noise still compares equal to the exact answer.
*/

/// Number of decimal places every component is rounded to on construction.
pub const SIGNIFICANCE_DIGITS: i32 = 10;

/// Absolute tolerance for `is_close()`; `10^-SIGNIFICANCE_DIGITS`.
pub const EPSILON: f64 = 1.0e-10;

// Scaled values at or beyond this magnitude have no fractional part left
// to round away.
const INTEGRAL_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/**
Return whether `a` and `b` should be treated as the same number.

Any two infinities are close to each other, whatever their signs.
Otherwise the numbers are close when they differ by less than `EPSILON`.
NaN is never close to anything.
*/
pub fn is_close(a: f64, b: f64) -> bool {
    if a.is_infinite() && b.is_infinite() {
        return true;
    }
    (a - b).abs() < EPSILON
}

pub fn is_zero(a: f64) -> bool {
    is_close(a, 0.0)
}

/** Return +1, -1 or 0. No tolerance is applied; NaN gets 0. */
pub fn sign(x: f64) -> i32 {
    if x > 0.0 { 1 }
    else if x < 0.0 { -1 }
    else { 0 }
}

/**
Round `x` to `SIGNIFICANCE_DIGITS` decimal places, ties to even.

Ties are decided on the binary value of `x * 10^SIGNIFICANCE_DIGITS`,
not on the exact decimal expansion of `x`, so a near-tie can land on the
other side of what decimal rounding would give. Either way the result is
within `EPSILON` of `x`.

Infinities, NaN, and numbers too big to have anything after the
tenth decimal place come back untouched. Zero always comes back as
positive zero. Rounding a rounded value gives the same value back.
*/
pub fn round_digits(x: f64) -> f64 {
    if !x.is_finite() { return x; }

    let scale = 10f64.powi(SIGNIFICANCE_DIGITS);
    let scaled = x * scale;
    if scaled.abs() >= INTEGRAL_LIMIT { return x; }

    let rounded = scaled.round_ties_even() / scale;
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn closeness() {
        assert!(is_close(1.0, 1.0 + 1.0e-11));
        assert!(is_close(-2.5, -2.5));
        assert!(!is_close(1.0, 1.0 + 1.0e-9));
        assert!(!is_close(0.0, EPSILON));
        assert!(!is_close(f64::NAN, f64::NAN));
        assert!(!is_close(f64::INFINITY, 1.0e300));
    }

    #[test]
    fn infinities_are_all_close() {
        assert!(is_close(f64::INFINITY, f64::INFINITY));
        assert!(is_close(f64::NEG_INFINITY, f64::INFINITY));
        assert!(is_close(f64::INFINITY, f64::NEG_INFINITY));
    }

    #[test]
    fn zeroness() {
        assert!(is_zero(0.0));
        assert!(is_zero(-0.0));
        assert!(is_zero(5.0e-11));
        assert!(!is_zero(2.0e-10));
        assert!(!is_zero(f64::INFINITY));
    }

    #[test]
    fn signs() {
        assert_eq!(sign(3.2), 1);
        assert_eq!(sign(-1.0e-300), -1);
        assert_eq!(sign(0.0), 0);
        assert_eq!(sign(-0.0), 0);
        assert_eq!(sign(f64::NEG_INFINITY), -1);
        assert_eq!(sign(f64::NAN), 0);
    }

    #[test]
    fn rounding() {
        assert_eq!(round_digits(0.5), 0.5);
        assert_eq!(round_digits(1.0e-11), 0.0);
        assert_eq!(round_digits(0.123_456_789_012_3), 0.123_456_789_0);
        assert_eq!(round_digits(1.0e20), 1.0e20);
        assert_eq!(round_digits(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(round_digits(f64::NAN).is_nan());

        assert!(round_digits(-0.0).is_sign_positive());
        assert!(round_digits(-1.0e-12).is_sign_positive());

        let third = round_digits(1.0 / 3.0);
        assert_eq!(round_digits(third), third);
        assert!((third - 0.333_333_333_3).abs() < 1.0e-15);
    }

    #[test]
    fn near_ties_follow_the_scaled_value() {
        assert_eq!(round_digits(5.0e-11), 0.0);
        assert_eq!(round_digits(1.000_000_000_05), 1.0);
        assert!(is_close(round_digits(1.000_000_000_05), 1.000_000_000_05));
    }
}
