//! Backend trait wiring the algebraic types to a scalar type.
//!
//! A quadric evaluator written against [`MathBackend`] compiles unchanged
//! against any math library whose types satisfy the bounds below; this crate
//! contributes [`MinimalMath`] as the reference backend.

use crate::mat3::Mat3;
use crate::scalar::Scalar;
use crate::vec::{Pos3, Vec3};
use std::marker::PhantomData;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// The type triple a backend-generic quadric algorithm instantiates.
///
/// The bounds enumerate the full operator surface the algorithm is allowed
/// to use: zero-default construction and indexed component access on all
/// three types, component-wise add/sub and scalar scaling on vectors, and
/// linear-map application, scalar scaling and column-wise add/sub on
/// matrices. Positions deliberately carry no arithmetic.
pub trait MathBackend {
    /// Numeric element type.
    type Scalar: Scalar;

    /// Point in space.
    type Pos: Copy + Default + Index<usize, Output = Self::Scalar> + IndexMut<usize>;

    /// Displacement vector.
    type Vec: Copy
        + Default
        + Add<Output = Self::Vec>
        + Sub<Output = Self::Vec>
        + Mul<Self::Scalar, Output = Self::Vec>
        + Index<usize, Output = Self::Scalar>
        + IndexMut<usize>;

    /// 3x3 linear map.
    type Mat: Copy
        + Default
        + Add<Output = Self::Mat>
        + Sub<Output = Self::Mat>
        + Mul<Self::Scalar, Output = Self::Mat>
        + Mul<Self::Vec, Output = Self::Vec>
        + Index<usize, Output = Self::Vec>
        + IndexMut<usize>;
}

/// The backend provided by this crate: [`Pos3`], [`Vec3`] and [`Mat3`]
/// bound to the scalar type `T`.
///
/// Zero-sized marker; it exists only at the type level. The slot order
/// (position, vector, matrix) matches what backend-generic algorithms
/// expect and is load-bearing.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimalMath<T>(PhantomData<T>);

impl<T: Scalar> MathBackend for MinimalMath<T> {
    type Scalar = T;
    type Pos = Pos3<T>;
    type Vec = Vec3<T>;
    type Mat = Mat3<T>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    // A quadric-style evaluation written only against the backend bounds,
    // the way the external fitting algorithm uses them.
    fn eval_quadric<B: MathBackend>(a: B::Mat, b: B::Vec, c: B::Scalar, p: B::Pos) -> B::Scalar {
        let mut x = B::Vec::default();
        for i in 0..3 {
            x[i] = p[i];
        }
        let ax = a * x;
        let mut quadratic = B::Scalar::zero();
        let mut linear = B::Scalar::zero();
        for i in 0..3 {
            quadratic = quadratic + x[i] * ax[i];
            linear = linear + b[i] * x[i];
        }
        quadratic - (linear + linear) + c
    }

    #[test]
    fn test_minimal_math_f32_quadric() {
        // x^T I x - 2 b.x + c at p = (1, 2, 3), b = (1, 1, 1), c = 4:
        // 14 - 12 + 4 = 6
        let value = eval_quadric::<MinimalMath<f32>>(
            Mat3::identity(),
            Vec3::new(1.0, 1.0, 1.0),
            4.0,
            Pos3::new(1.0, 2.0, 3.0),
        );
        assert_eq!(value, 6.0);
    }

    #[test]
    fn test_minimal_math_f64_quadric() {
        let value = eval_quadric::<MinimalMath<f64>>(
            Mat3::from_diagonal(Vec3::new(2.0, 2.0, 2.0)),
            Vec3::zero(),
            0.0,
            Pos3::new(1.0, 2.0, 3.0),
        );
        assert_eq!(value, 28.0);
    }

    #[test]
    fn test_zero_quadric_is_zero_everywhere() {
        let value = eval_quadric::<MinimalMath<f64>>(
            Mat3::zero(),
            Vec3::zero(),
            0.0,
            Pos3::new(-5.0, 7.5, 0.25),
        );
        assert_eq!(value, 0.0);
    }
}
