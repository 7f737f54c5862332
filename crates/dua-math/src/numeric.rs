//! Scalar conditioning: modulo wrap, deadzone, single-step low-pass
//!
//! Everything here is stateless. The low-pass update expects the caller to
//! carry the previous output between calls.

use num_traits::{CheckedRem, Num, PrimInt, Signed};

use crate::error::{MathError, Result};

/// Wrap `value` by `modulus`, correcting negative remainders
///
/// Computes the truncating remainder `r = value % modulus` and returns
/// `r + modulus` when `r` is negative, `r` otherwise. For a positive modulus
/// the result lies in `[0, modulus)`.
///
/// Only integer types are accepted; floating-point remainder has different
/// semantics and does not satisfy `PrimInt`.
///
/// # Panics
/// Panics when `modulus` is zero (Rust's remainder-by-zero panic), and on
/// overflow in the same cases as the `%` and `+` operators
/// (e.g. `i32::MIN % -1`). Use [`checked_modulo`] to get an error instead.
#[inline]
#[must_use]
pub fn apply_modulo<T: PrimInt>(value: T, modulus: T) -> T {
    let r = value % modulus;
    if r < T::zero() {
        r + modulus
    } else {
        r
    }
}

/// Same as [`apply_modulo`], reporting faults instead of panicking
pub fn checked_modulo<T: PrimInt + CheckedRem>(value: T, modulus: T) -> Result<T> {
    if modulus.is_zero() {
        return Err(MathError::ZeroModulus);
    }

    let r = value.checked_rem(&modulus).ok_or(MathError::Overflow)?;
    if r < T::zero() {
        r.checked_add(&modulus).ok_or(MathError::Overflow)
    } else {
        Ok(r)
    }
}

/// Zero out `value` when its magnitude is strictly below `threshold`
///
/// No hysteresis. NaN compares false and passes through unchanged.
#[inline]
#[must_use]
pub fn apply_deadzone<T: Signed + PartialOrd>(value: T, threshold: T) -> T {
    if value.abs() < threshold {
        T::zero()
    } else {
        value
    }
}

/// One exponential smoothing step: `alpha * current + (1 - alpha) * previous`
///
/// `alpha` is not validated. Values outside [0, 1] extrapolate (amplify or
/// invert) rather than fail; see [`crate::ConditioningConfig::validate`] for a
/// checked configuration path.
#[inline]
#[must_use]
pub fn apply_low_pass<T: Num + Copy>(current: T, previous: T, alpha: T) -> T {
    alpha * current + (T::one() - alpha) * previous
}
