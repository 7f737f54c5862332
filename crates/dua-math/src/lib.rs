//! # DUA Math
//!
//! Stateless numeric helpers for robot control code.
//!
//! Every function is pure and generic over the caller's numeric type, so the
//! crate can be used from any thread without coordination.
//!
//! ## Modules
//!
//! - [`angle`]: degree/radian conversion and angle wrapping
//! - [`numeric`]: modulo wrap, deadzone, single-step low-pass
//! - [`quaternion`]: unit-norm checks over nalgebra, glam and message quaternions
//! - [`conditioning`]: validated deadzone + low-pass configuration
//! - [`error`]: error type for the checked entry points

pub mod angle;
pub mod numeric;
pub mod quaternion;
pub mod conditioning;
pub mod error;

pub use angle::{angle_diff, deg_to_rad, normalize_angle, rad_to_deg};
pub use numeric::{apply_deadzone, apply_low_pass, apply_modulo, checked_modulo};
pub use quaternion::{
    components_norm, components_normalized, is_normalized, is_normalized_with_tolerance,
    QuaternionComponents, QuaternionMsg, DEFAULT_NORM_TOLERANCE,
};
pub use conditioning::{ConditioningConfig, SignalConditioner};
pub use error::{MathError, Result};
