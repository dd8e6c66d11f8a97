//! 3x3 matrix, generic over the scalar type.

use crate::scalar::Scalar;
use crate::vec::Vec3;
use std::ops::{Index, IndexMut};

/// 3x3 linear map stored as three column vectors.
///
/// Column names follow the glam convention (`x_axis`, `y_axis`, `z_axis`).
/// There is no row-major view; row elements are reconstructed by the caller
/// as `m[col][row]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3<T> {
    /// First column.
    pub x_axis: Vec3<T>,
    /// Second column.
    pub y_axis: Vec3<T>,
    /// Third column.
    pub z_axis: Vec3<T>,
}

impl<T: Scalar> Mat3<T> {
    /// Create a new matrix from column vectors.
    #[inline]
    pub fn from_cols(x_axis: Vec3<T>, y_axis: Vec3<T>, z_axis: Vec3<T>) -> Self {
        Self {
            x_axis,
            y_axis,
            z_axis,
        }
    }

    /// Create a new matrix from a column-major array.
    #[inline]
    pub fn from_cols_array(arr: &[T; 9]) -> Self {
        Self {
            x_axis: Vec3::new(arr[0], arr[1], arr[2]),
            y_axis: Vec3::new(arr[3], arr[4], arr[5]),
            z_axis: Vec3::new(arr[6], arr[7], arr[8]),
        }
    }

    /// Convert to a column-major array.
    #[inline]
    pub fn to_cols_array(self) -> [T; 9] {
        [
            self.x_axis.x,
            self.x_axis.y,
            self.x_axis.z,
            self.y_axis.x,
            self.y_axis.y,
            self.y_axis.z,
            self.z_axis.x,
            self.z_axis.y,
            self.z_axis.z,
        ]
    }

    /// All-zero matrix (three zero columns).
    #[inline]
    pub fn zero() -> Self {
        Self {
            x_axis: Vec3::zero(),
            y_axis: Vec3::zero(),
            z_axis: Vec3::zero(),
        }
    }

    /// Diagonal matrix with the given vector on the diagonal.
    #[inline]
    pub fn from_diagonal(diagonal: Vec3<T>) -> Self {
        let mut m = Self::zero();
        m.x_axis.x = diagonal.x;
        m.y_axis.y = diagonal.y;
        m.z_axis.z = diagonal.z;
        m
    }

    /// Get the i-th column vector.
    #[inline]
    pub fn col(&self, index: usize) -> Vec3<T> {
        self[index]
    }
}

impl<T: Scalar + num_traits::One> Mat3<T> {
    /// Identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::from_diagonal(Vec3::new(T::one(), T::one(), T::one()))
    }
}

impl<T: Scalar> Default for Mat3<T> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

// Index 0, 1, 2 selects the stored column, never a computed row.
impl<T: Scalar> Index<usize> for Mat3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn index(&self, index: usize) -> &Vec3<T> {
        match index {
            0 => &self.x_axis,
            1 => &self.y_axis,
            2 => &self.z_axis,
            _ => panic!("column index out of range: {index}"),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Mat3<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vec3<T> {
        match index {
            0 => &mut self.x_axis,
            1 => &mut self.y_axis,
            2 => &mut self.z_axis,
            _ => panic!("column index out of range: {index}"),
        }
    }
}

// Matrix-vector multiplication: result component i is the i-th row of the
// matrix dotted with the vector, read out of the stored columns.
impl<T: Scalar> std::ops::Mul<Vec3<T>> for Mat3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn mul(self, rhs: Vec3<T>) -> Self::Output {
        Vec3::new(
            self.x_axis.x * rhs.x + self.y_axis.x * rhs.y + self.z_axis.x * rhs.z,
            self.x_axis.y * rhs.x + self.y_axis.y * rhs.y + self.z_axis.y * rhs.z,
            self.x_axis.z * rhs.x + self.y_axis.z * rhs.y + self.z_axis.z * rhs.z,
        )
    }
}

// Matrix-scalar multiplication scales each column independently.
impl<T: Scalar> std::ops::Mul<T> for Mat3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Self::from_cols(self.x_axis * rhs, self.y_axis * rhs, self.z_axis * rhs)
    }
}

impl<T: Scalar> std::ops::Add for Mat3<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_cols(
            self.x_axis + rhs.x_axis,
            self.y_axis + rhs.y_axis,
            self.z_axis + rhs.z_axis,
        )
    }
}

impl<T: Scalar> std::ops::Sub for Mat3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_cols(
            self.x_axis - rhs.x_axis,
            self.y_axis - rhs.y_axis,
            self.z_axis - rhs.z_axis,
        )
    }
}

impl<T: Scalar> std::ops::AddAssign for Mat3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> std::ops::SubAssign for Mat3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> std::ops::MulAssign<T> for Mat3<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

// Conversions to and from the corresponding glam matrix types.
impl From<glam::Mat3> for Mat3<f32> {
    #[inline]
    fn from(m: glam::Mat3) -> Self {
        Self::from_cols(m.x_axis.into(), m.y_axis.into(), m.z_axis.into())
    }
}

impl From<Mat3<f32>> for glam::Mat3 {
    #[inline]
    fn from(m: Mat3<f32>) -> Self {
        glam::Mat3::from_cols(m.x_axis.into(), m.y_axis.into(), m.z_axis.into())
    }
}

impl From<glam::DMat3> for Mat3<f64> {
    #[inline]
    fn from(m: glam::DMat3) -> Self {
        Self::from_cols(m.x_axis.into(), m.y_axis.into(), m.z_axis.into())
    }
}

impl From<Mat3<f64>> for glam::DMat3 {
    #[inline]
    fn from(m: Mat3<f64>) -> Self {
        glam::DMat3::from_cols(m.x_axis.into(), m.y_axis.into(), m.z_axis.into())
    }
}

#[cfg(feature = "approx")]
impl<T> approx::AbsDiffEq for Mat3<T>
where
    T: Scalar + approx::AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x_axis.abs_diff_eq(&other.x_axis, epsilon)
            && self.y_axis.abs_diff_eq(&other.y_axis, epsilon)
            && self.z_axis.abs_diff_eq(&other.z_axis, epsilon)
    }
}

#[cfg(feature = "approx")]
impl<T> approx::RelativeEq for Mat3<T>
where
    T: Scalar + approx::RelativeEq,
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x_axis.relative_eq(&other.x_axis, epsilon, max_relative)
            && self.y_axis.relative_eq(&other.y_axis, epsilon, max_relative)
            && self.z_axis.relative_eq(&other.z_axis, epsilon, max_relative)
    }
}
