//! Scalar contract shared by all algebraic types.

use std::ops::{Add, Mul, Sub};

/// Numeric element type parameterizing the vector, position and matrix types.
///
/// Any `Copy` type with closed `+`, `-`, `*` and an additive identity
/// qualifies; the blanket impl below picks it up automatically. In practice
/// this is `f32` or `f64`.
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + num_traits::Zero
{
}

impl<T> Scalar for T where
    T: Copy
        + Default
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + num_traits::Zero
{
}
