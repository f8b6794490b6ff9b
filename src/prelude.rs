// src/prelude.rs
//! The “everything” import for the crate.
//!
//! Brings you the commonly used types with one glob:
//! ```rust
//! use vector3d::prelude::*;
//! ```

pub use crate::vector::{Rounded, Vector3d};
