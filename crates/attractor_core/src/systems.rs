use crate::traits::{Scalar, VectorField};
use crate::trajectory::State;
use serde::{Deserialize, Serialize};

/// The Lorenz system, an idealized model of atmospheric convection.
///
/// Constants map onto the classical literature parameterization as
/// a → σ, b → ρ, c → β.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lorenz<T: Scalar> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T: Scalar> Lorenz<T> {
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }
}

impl<T: Scalar> Default for Lorenz<T> {
    fn default() -> Self {
        Self {
            a: T::from_f64(12.0).unwrap(),
            b: T::from_f64(24.0).unwrap(),
            c: T::from_f64(2.67).unwrap(),
        }
    }
}

impl<T: Scalar> VectorField<T> for Lorenz<T> {
    fn derivative(&self, s: State<T>) -> State<T> {
        State {
            x: self.a * (s.y - s.x),
            y: s.x * (self.b - s.z) - s.y,
            z: s.x * s.y - self.c * s.z,
        }
    }
}

/// The Rössler system, a minimal flow exhibiting a single-lobed
/// strange attractor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rossler<T: Scalar> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T: Scalar> Rossler<T> {
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }
}

impl<T: Scalar> Default for Rossler<T> {
    fn default() -> Self {
        Self {
            a: T::from_f64(0.1).unwrap(),
            b: T::from_f64(0.1).unwrap(),
            c: T::from_f64(14.0).unwrap(),
        }
    }
}

impl<T: Scalar> VectorField<T> for Rossler<T> {
    fn derivative(&self, s: State<T>) -> State<T> {
        State {
            x: -s.y - s.z,
            y: s.x + self.a * s.y,
            z: self.b + s.z * (s.x - self.c),
        }
    }
}
