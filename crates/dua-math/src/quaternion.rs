//! Quaternion normalization checks
//!
//! One norm kernel operating on four `f64` components, reached through the
//! [`QuaternionComponents`] trait. Each supported quaternion shape only has to
//! say how to read its x, y, z, w:
//!
//! - `nalgebra::Quaternion` / `nalgebra::UnitQuaternion` (linear algebra)
//! - `glam::Quat` / `glam::DQuat` (transform/graphics math)
//! - [`QuaternionMsg`], a plain public-field message struct
//! - `[T; 4]` in `[x, y, z, w]` order
//!
//! # Tolerance
//!
//! A quaternion is normalized when
//!
//! ```text
//! | sqrt(x² + y² + z² + w²) - 1 | < eps
//! ```
//!
//! with a strict comparison, so a norm of exactly `1 ± eps` is rejected.
//! The squared-norm shortcut (`|n² - 1| < 2·eps`) is not used anywhere.
//! Components are widened to `f64` before any arithmetic.

use nalgebra::{Quaternion, Scalar, UnitQuaternion};
use serde::{Deserialize, Serialize};

/// Default tolerance on the Euclidean norm
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-6;

/// Read access to the four components of a quaternion-like value
///
/// Components are returned widened to `f64`. Implementors must not normalize
/// or otherwise alter the stored values.
pub trait QuaternionComponents {
    /// Vector part, x
    fn x(&self) -> f64;
    /// Vector part, y
    fn y(&self) -> f64;
    /// Vector part, z
    fn z(&self) -> f64;
    /// Scalar part
    fn w(&self) -> f64;

    /// Euclidean norm of (x, y, z, w)
    fn norm(&self) -> f64 {
        components_norm(self.x(), self.y(), self.z(), self.w())
    }
}

/// Euclidean norm of four components
#[inline]
pub fn components_norm(x: f64, y: f64, z: f64, w: f64) -> f64 {
    (x * x + y * y + z * z + w * w).sqrt()
}

/// Normalization kernel shared by every quaternion shape
#[inline]
pub fn components_normalized(x: f64, y: f64, z: f64, w: f64, eps: f64) -> bool {
    (components_norm(x, y, z, w) - 1.0).abs() < eps
}

/// Check that `q` has unit norm within [`DEFAULT_NORM_TOLERANCE`]
#[must_use]
pub fn is_normalized<Q: QuaternionComponents + ?Sized>(q: &Q) -> bool {
    is_normalized_with_tolerance(q, DEFAULT_NORM_TOLERANCE)
}

/// Check that `q` has unit norm within `eps`
#[must_use]
pub fn is_normalized_with_tolerance<Q: QuaternionComponents + ?Sized>(q: &Q, eps: f64) -> bool {
    components_normalized(q.x(), q.y(), q.z(), q.w(), eps)
}

/// Plain quaternion message with public fields
///
/// Mirrors the layout of middleware geometry messages (x, y, z, w as `f64`).
/// Construction does not normalize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuaternionMsg {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl QuaternionMsg {
    /// Create a message from raw components
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Identity rotation
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

impl Default for QuaternionMsg {
    fn default() -> Self {
        Self::identity()
    }
}

impl QuaternionComponents for QuaternionMsg {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
    fn z(&self) -> f64 {
        self.z
    }
    fn w(&self) -> f64 {
        self.w
    }
}

// `coords` is stored as (i, j, k, w); i/j/k are the vector part.
impl<T: Scalar + Copy + Into<f64>> QuaternionComponents for Quaternion<T> {
    fn x(&self) -> f64 {
        self.coords[0].into()
    }
    fn y(&self) -> f64 {
        self.coords[1].into()
    }
    fn z(&self) -> f64 {
        self.coords[2].into()
    }
    fn w(&self) -> f64 {
        self.coords[3].into()
    }
}

impl<T: Scalar + Copy + Into<f64>> QuaternionComponents for UnitQuaternion<T> {
    fn x(&self) -> f64 {
        (**self).x()
    }
    fn y(&self) -> f64 {
        (**self).y()
    }
    fn z(&self) -> f64 {
        (**self).z()
    }
    fn w(&self) -> f64 {
        (**self).w()
    }
}

impl QuaternionComponents for glam::Quat {
    fn x(&self) -> f64 {
        f64::from(self.x)
    }
    fn y(&self) -> f64 {
        f64::from(self.y)
    }
    fn z(&self) -> f64 {
        f64::from(self.z)
    }
    fn w(&self) -> f64 {
        f64::from(self.w)
    }
}

impl QuaternionComponents for glam::DQuat {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
    fn z(&self) -> f64 {
        self.z
    }
    fn w(&self) -> f64 {
        self.w
    }
}

impl<T: Copy + Into<f64>> QuaternionComponents for [T; 4] {
    fn x(&self) -> f64 {
        self[0].into()
    }
    fn y(&self) -> f64 {
        self[1].into()
    }
    fn z(&self) -> f64 {
        self[2].into()
    }
    fn w(&self) -> f64 {
        self[3].into()
    }
}
