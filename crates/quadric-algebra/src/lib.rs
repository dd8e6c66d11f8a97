//! Minimal generic 3D math backend for quadric fitting.
//!
//! This crate provides:
//! - Scalar-generic algebraic types (`Vec3`, `Pos3`, `Mat3`) with the
//!   operator set a quadric error metric needs, and nothing more
//! - A backend trait (`MathBackend`) and the `MinimalMath` alias binding a
//!   scalar type to the (position, vector, matrix) triple
//!
//! # Usage
//!
//! ```
//! use quadric_algebra::{MathBackend, MinimalMath, Mat3F32, Vec3F32};
//!
//! // Algorithms stay generic over the backend.
//! fn apply<B: MathBackend>(m: B::Mat, v: B::Vec) -> B::Vec {
//!     m * v
//! }
//!
//! let m = Mat3F32::identity();
//! let v = Vec3F32::new(1.0, 2.0, 3.0);
//! assert_eq!(apply::<MinimalMath<f32>>(m, v), v);
//! ```

mod backend;
mod mat3;
mod scalar;
mod vec;

// Re-export types at crate root for convenience
pub use backend::{MathBackend, MinimalMath};
pub use mat3::Mat3;
pub use scalar::Scalar;
pub use vec::{Pos3, Vec3};

// Type aliases for explicit precision
pub type Vec3F32 = Vec3<f32>;
pub type Vec3F64 = Vec3<f64>;
pub type Pos3F32 = Pos3<f32>;
pub type Pos3F64 = Pos3<f64>;
pub type Mat3F32 = Mat3<f32>;
pub type Mat3F64 = Mat3<f64>;

// Backend aliases for explicit precision
pub type MinimalMathF32 = MinimalMath<f32>;
pub type MinimalMathF64 = MinimalMath<f64>;
