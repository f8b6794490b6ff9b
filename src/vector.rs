//! src/vector.rs
//! A 3-D Euclidean vector over a generic scalar type `T`.
//!
//! Components are stored as `T`; every derived scalar (dot product,
//! magnitude, component accessors) widens to `f64`. This asymmetry is
//! deliberate: it keeps `magnitude` and `unit` well-defined even when `T`
//! is an integer type.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::AsPrimitive;

/// Square a component, widening the product to `f64`.
///
/// The product is computed in `T` arithmetic first, then widened, so
/// narrow float types round exactly as their own arithmetic would.
#[inline(always)]
fn pow_sqr<T>(value: T) -> f64
where
    T: Copy + 'static + Mul<Output = T> + AsPrimitive<f64>,
{
    (value * value).as_()
}

/// A 3-D vector with components `ax`, `ay`, `az` of scalar type `T`.
///
/// Immutable by convention: every operation returns a new value. The
/// default value is the zero vector.
///
/// `PartialEq` and `PartialOrd` are derived, so equality is componentwise
/// and ordering is lexicographic over `(ax, ay, az)` in declaration order.
/// NaN components follow IEEE 754 rules: unordered, unequal to everything.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Vector3d<T> {
    ax: T,
    ay: T,
    az: T,
}

impl<T> Vector3d<T> {
    /// Create a new `Vector3d` from components, stored verbatim.
    #[inline(always)]
    pub fn new(ax: T, ay: T, az: T) -> Self {
        Self { ax, ay, az }
    }
}

impl<T> Vector3d<T>
where
    T: Copy + 'static + AsPrimitive<f64>,
{
    /// X component, widened to `f64`.
    #[inline(always)]
    pub fn ax(&self) -> f64 {
        self.ax.as_()
    }

    /// Y component, widened to `f64`.
    #[inline(always)]
    pub fn ay(&self) -> f64 {
        self.ay.as_()
    }

    /// Z component, widened to `f64`.
    #[inline(always)]
    pub fn az(&self) -> f64 {
        self.az.as_()
    }
}

impl<T> Vector3d<T>
where
    T: Copy + 'static + Add<Output = T> + Mul<Output = T> + AsPrimitive<f64>,
{
    /// Dot product of two vectors, as `f64`. Commutative.
    #[inline(always)]
    pub fn dot(&self, rhs: &Self) -> f64 {
        (self.ax * rhs.ax + self.ay * rhs.ay + self.az * rhs.az).as_()
    }

    /// Euclidean norm (length) of the vector, as `f64`.
    ///
    /// Always non-negative; zero iff the vector is the zero vector.
    #[inline(always)]
    pub fn magnitude(&self) -> f64 {
        (pow_sqr(self.ax) + pow_sqr(self.ay) + pow_sqr(self.az)).sqrt()
    }

    /// Normalize to unit length, widening components to `f64`.
    ///
    /// The zero vector has magnitude 0, so its unit vector is all-NaN
    /// (0.0 / 0.0); the division is deliberately unguarded.
    #[inline(always)]
    pub fn unit(&self) -> Vector3d<f64> {
        let magn = self.magnitude();
        Vector3d::new(self.ax() / magn, self.ay() / magn, self.az() / magn)
    }
}

impl<T> Vector3d<T>
where
    T: Copy + Mul<Output = T> + Sub<Output = T>,
{
    /// Cross product of two vectors (right-hand rule).
    ///
    /// Anti-commutative: `a.cross(&b) == -b.cross(&a)`. Yields the zero
    /// vector when the operands are parallel.
    #[inline(always)]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::new(
            self.ay * rhs.az - self.az * rhs.ay,
            self.az * rhs.ax - self.ax * rhs.az,
            self.ax * rhs.ay - self.ay * rhs.ax,
        )
    }
}

impl<T> Vector3d<T>
where
    T: Copy + Mul<Output = T>,
{
    /// Scale the vector by a scalar, applied as `scalar * component`.
    #[inline(always)]
    pub fn scale(&self, scalar: T) -> Self {
        Self::new(scalar * self.ax, scalar * self.ay, scalar * self.az)
    }
}

impl<T: Copy> From<[T; 3]> for Vector3d<T> {
    fn from(arr: [T; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl<T> From<Vector3d<T>> for [T; 3] {
    fn from(v: Vector3d<T>) -> [T; 3] {
        [v.ax, v.ay, v.az]
    }
}

impl<T: Add<Output = T>> Add for Vector3d<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.ax + rhs.ax, self.ay + rhs.ay, self.az + rhs.az)
    }
}

impl<T: Sub<Output = T>> Sub for Vector3d<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.ax - rhs.ax, self.ay - rhs.ay, self.az - rhs.az)
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Vector3d<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}

impl<T: Neg<Output = T>> Neg for Vector3d<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self::new(-self.ax, -self.ay, -self.az)
    }
}

/// Canonical text form: the three components widened to `f64` and
/// separated by single spaces, e.g. `1 2 3`.
///
/// Uses Rust's default `f64` formatting: the shortest representation that
/// round-trips, with no decimal point for integral values.
impl<T> fmt::Display for Vector3d<T>
where
    T: Copy + 'static + AsPrimitive<f64>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.ax(), self.ay(), self.az())
    }
}

/// A tiny wrapper for printing a `Vector3d` rounded to `decimals` places.
pub struct Rounded<'a, T>(pub &'a Vector3d<T>, pub usize);

impl<'a, T> Rounded<'a, T> {
    /// Wrap a `&Vector3d` for printing with `decimals` digits.
    #[inline(always)]
    pub fn new(v: &'a Vector3d<T>, decimals: usize) -> Self {
        Rounded(v, decimals)
    }
}

impl<'a, T> fmt::Display for Rounded<'a, T>
where
    T: Copy + 'static + AsPrimitive<f64>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Rounded(v, dec) = *self;
        write!(
            f,
            "{ax:.dec$} {ay:.dec$} {az:.dec$}",
            ax = v.ax(),
            ay = v.ay(),
            az = v.az(),
            dec = dec
        )
    }
}
