//! # vector3d Quickstart
//!
//! ```rust
//! use vector3d::prelude::*;
//!
//! // The area vector of the parallelogram spanned by x̂ and ŷ is ẑ
//! let a = Vector3d::new(1.0, 0.0, 0.0);
//! let b = Vector3d::new(0.0, 1.0, 0.0);
//! assert_eq!(a.cross(&b), Vector3d::new(0.0, 0.0, 1.0));
//!
//! // Derived scalars are always f64, even for integer components
//! let v: Vector3d<i32> = Vector3d::new(3, 4, 0);
//! assert_eq!(v.magnitude(), 5.0);
//!
//! // Canonical text form: components separated by single spaces
//! assert_eq!(Vector3d::new(1.0, 2.0, 3.0).to_string(), "1 2 3");
//! ```

// Core modules
pub mod prelude;
pub mod vector;

// --- Public API exports ---

pub use vector::{Rounded, Vector3d};
