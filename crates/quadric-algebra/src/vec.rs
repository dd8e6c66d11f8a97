//! Macro to define the 3-component point-like types.
//!
//! Vectors and positions are structurally identical (three scalar
//! components, zero default, indexed access) but semantically distinct, so we
//! provide a small `macro_rules!` helper that generates both without
//! copy-pasting boilerplate. Arithmetic is deliberately NOT generated here:
//! only `Vec3` carries operators, so that consuming code which distinguishes
//! points from displacements gets that distinction from the type system.
//!
//! # Arguments
//!
//! * `name` - The name of the generated type.

use crate::scalar::Scalar;
use std::ops::{Index, IndexMut};

macro_rules! define_point_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name<T> {
            /// First component.
            pub x: T,
            /// Second component.
            pub y: T,
            /// Third component.
            pub z: T,
        }

        impl<T: Scalar> $name<T> {
            /// Create a new value from x, y, and z components.
            #[inline]
            pub fn new(x: T, y: T, z: T) -> Self {
                Self { x, y, z }
            }

            /// Create a value from an array.
            #[inline]
            pub fn from_array(arr: [T; 3]) -> Self {
                let [x, y, z] = arr;
                Self { x, y, z }
            }

            /// Convert to an array, in x, y, z order.
            #[inline]
            pub fn to_array(self) -> [T; 3] {
                [self.x, self.y, self.z]
            }

            /// All components set to the scalar zero.
            #[inline]
            pub fn zero() -> Self {
                Self {
                    x: T::zero(),
                    y: T::zero(),
                    z: T::zero(),
                }
            }
        }

        impl<T: Scalar> Default for $name<T> {
            #[inline]
            fn default() -> Self {
                Self::zero()
            }
        }

        // Indexed access aliases the named fields in declaration order:
        // 0 is x, 1 is y, 2 is z. Anything else is a caller bug.
        impl<T: Scalar> Index<usize> for $name<T> {
            type Output = T;

            #[inline]
            fn index(&self, index: usize) -> &T {
                match index {
                    0 => &self.x,
                    1 => &self.y,
                    2 => &self.z,
                    _ => panic!("component index out of range: {index}"),
                }
            }
        }

        impl<T: Scalar> IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    0 => &mut self.x,
                    1 => &mut self.y,
                    2 => &mut self.z,
                    _ => panic!("component index out of range: {index}"),
                }
            }
        }

        // Conversions to and from arrays.
        impl<T: Scalar> From<[T; 3]> for $name<T> {
            #[inline]
            fn from(arr: [T; 3]) -> Self {
                Self::from_array(arr)
            }
        }

        impl<T: Scalar> From<$name<T>> for [T; 3] {
            #[inline]
            fn from(v: $name<T>) -> Self {
                v.to_array()
            }
        }

        // Conversions to and from the corresponding glam types, for the
        // concrete precisions glam covers.
        impl From<glam::Vec3> for $name<f32> {
            #[inline]
            fn from(v: glam::Vec3) -> Self {
                Self::new(v.x, v.y, v.z)
            }
        }

        impl From<$name<f32>> for glam::Vec3 {
            #[inline]
            fn from(v: $name<f32>) -> Self {
                glam::Vec3::new(v.x, v.y, v.z)
            }
        }

        impl From<glam::DVec3> for $name<f64> {
            #[inline]
            fn from(v: glam::DVec3) -> Self {
                Self::new(v.x, v.y, v.z)
            }
        }

        impl From<$name<f64>> for glam::DVec3 {
            #[inline]
            fn from(v: $name<f64>) -> Self {
                glam::DVec3::new(v.x, v.y, v.z)
            }
        }

        #[cfg(feature = "approx")]
        impl<T> approx::AbsDiffEq for $name<T>
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
                self.x.abs_diff_eq(&other.x, epsilon)
                    && self.y.abs_diff_eq(&other.y, epsilon)
                    && self.z.abs_diff_eq(&other.z, epsilon)
            }
        }

        #[cfg(feature = "approx")]
        impl<T> approx::RelativeEq for $name<T>
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
                self.x.relative_eq(&other.x, epsilon, max_relative)
                    && self.y.relative_eq(&other.y, epsilon, max_relative)
                    && self.z.relative_eq(&other.z, epsilon, max_relative)
            }
        }
    };
}

define_point_type!(
    /// 3D displacement vector, generic over the scalar type.
    ///
    /// A `Vec3` is a free direction with no fixed origin. It carries the
    /// component-wise arithmetic a quadric evaluator needs; see [`Pos3`] for
    /// the point counterpart, which deliberately carries none.
    Vec3
);

define_point_type!(
    /// 3D point, generic over the scalar type.
    ///
    /// Structurally identical to [`Vec3`] but kept as a separate type so
    /// that consuming algorithms which distinguish points from displacements
    /// (no adding two positions) get that distinction at compile time.
    Pos3
);

// Arithmetic is Vec3-only. Each operator expands to the scalar type's own
// `+`, `-`, `*` with no intermediate widening.
impl<T: Scalar> std::ops::Add for Vec3<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Scalar> std::ops::Sub for Vec3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Scalar> std::ops::Mul<T> for Vec3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: Scalar> std::ops::AddAssign for Vec3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> std::ops::SubAssign for Vec3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> std::ops::MulAssign<T> for Vec3<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

// Scalar-on-the-left multiplication cannot be written generically (the impl
// type would be a bare type parameter), so it is provided per precision.
macro_rules! impl_scalar_mul {
    ($scalar:ty) => {
        impl std::ops::Mul<Vec3<$scalar>> for $scalar {
            type Output = Vec3<$scalar>;

            #[inline]
            fn mul(self, rhs: Vec3<$scalar>) -> Self::Output {
                rhs * self
            }
        }
    };
}

impl_scalar_mul!(f32);
impl_scalar_mul!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_basic() {
        let v = Vec3::new(1.0_f32, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_default_is_zero() {
        let v = Vec3::<f64>::default();
        assert_eq!(v, Vec3::zero());
        assert_eq!(v.to_array(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_vec3_index_aliases_fields() {
        let v = Vec3::new(1.0_f32, 2.0, 3.0);
        assert_eq!(v[0], v.x);
        assert_eq!(v[1], v.y);
        assert_eq!(v[2], v.z);
    }

    #[test]
    fn test_vec3_index_mut_writes_through() {
        let mut v = Vec3::<f64>::zero();
        v[0] = 4.0;
        v[1] = 5.0;
        v[2] = 6.0;
        assert_eq!(v, Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    #[should_panic(expected = "component index out of range")]
    fn test_vec3_index_out_of_range_panics() {
        let v = Vec3::new(1.0_f32, 2.0, 3.0);
        let _ = v[3];
    }

    #[test]
    fn test_vec3_from_array() {
        let v = Vec3::from_array([1.0_f32, 2.0, 3.0]);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_vec3_add_commutes_and_associates() {
        let a = Vec3::new(1.0_f64, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        let c = Vec3::new(-1.0, 0.5, 2.0);
        assert_eq!(a + b, b + a);
        assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn test_vec3_sub_inverts_add() {
        let a = Vec3::new(1.5_f32, -2.0, 3.25);
        let b = Vec3::new(0.5, 4.0, -1.75);
        assert_eq!((a + b) - b, a);
    }

    #[test]
    fn test_vec3_zero_is_additive_identity() {
        let v = Vec3::new(1.0_f32, 2.0, 3.0);
        assert_eq!(Vec3::zero() + v, v);
    }

    #[test]
    fn test_vec3_scale() {
        let v = Vec3::new(1.0_f32, 2.0, 3.0);
        let scaled = v * 2.0;
        assert_eq!(scaled, Vec3::new(2.0, 4.0, 6.0));
        for i in 0..3 {
            assert_eq!(scaled[i], v[i] * 2.0);
        }
    }

    #[test]
    fn test_vec3_scalar_mul_left() {
        let v = Vec3::new(1.0_f64, 2.0, 3.0);
        assert_eq!(2.0 * v, v * 2.0);
    }

    #[test]
    fn test_vec3_assign_ops() {
        let mut v = Vec3::new(1.0_f32, 2.0, 3.0);
        v += Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vec3::new(2.0, 3.0, 4.0));

        v -= Vec3::new(0.0, 1.0, 2.0);
        assert_eq!(v, Vec3::new(2.0, 2.0, 2.0));

        v *= 3.0;
        assert_eq!(v, Vec3::new(6.0, 6.0, 6.0));
    }

    #[test]
    fn test_vec3_glam_conversion() {
        let v = Vec3::new(1.0_f32, 2.0, 3.0);
        let g: glam::Vec3 = v.into();
        let back: Vec3<f32> = g.into();
        assert_eq!(v, back);

        let dv = Vec3::new(1.0_f64, 2.0, 3.0);
        let dg: glam::DVec3 = dv.into();
        let dback: Vec3<f64> = dg.into();
        assert_eq!(dv, dback);
    }

    #[test]
    fn test_pos3_basic() {
        let p = Pos3::new(1.0_f32, 2.0, 3.0);
        assert_eq!(p.x, 1.0);
        assert_eq!(p.y, 2.0);
        assert_eq!(p.z, 3.0);
    }

    #[test]
    fn test_pos3_default_is_zero() {
        let p = Pos3::<f32>::default();
        assert_eq!(p.to_array(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_pos3_index_aliases_fields() {
        let mut p = Pos3::new(4.0_f64, 5.0, 6.0);
        assert_eq!(p[0], p.x);
        assert_eq!(p[1], p.y);
        assert_eq!(p[2], p.z);
        p[2] = 7.0;
        assert_eq!(p.z, 7.0);
    }

    #[test]
    #[should_panic(expected = "component index out of range")]
    fn test_pos3_index_out_of_range_panics() {
        let p = Pos3::new(1.0_f32, 2.0, 3.0);
        let _ = p[4];
    }

    #[test]
    fn test_pos3_glam_conversion() {
        let p = Pos3::new(1.0_f32, 2.0, 3.0);
        let g: glam::Vec3 = p.into();
        let back: Pos3<f32> = g.into();
        assert_eq!(p, back);
    }

    #[test]
    fn test_vec3_integer_scalars() {
        let a = Vec3::new(1_i32, 2, 3);
        let b = Vec3::new(4, 5, 6);
        assert_eq!(a + b, Vec3::new(5, 7, 9));
        assert_eq!(a * 2, Vec3::new(2, 4, 6));
    }

    #[cfg(feature = "approx")]
    #[test]
    fn test_vec3_relative_eq() {
        let a = Vec3::new(1.0_f32, 2.0, 3.0);
        let b = Vec3::new(1.0 + 1e-7, 2.0, 3.0);
        approx::assert_relative_eq!(a, b, epsilon = 1e-5);
    }
}
