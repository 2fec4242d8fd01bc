use crate::trajectory::State;
use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in the integrated systems.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// An autonomous vector field on 3D phase space.
pub trait VectorField<T: Scalar> {
    /// Evaluates the instantaneous rate of change at `s`.
    ///
    /// Pure and total over all real inputs, with no time dependence.
    /// Pathological inputs are not guarded; the result follows standard
    /// floating-point rules.
    fn derivative(&self, s: State<T>) -> State<T>;
}

/// A trait for steppers that advance a state by one fixed step.
pub trait Steppable<T: Scalar> {
    /// Performs one step of size dt, updating `state` in place.
    fn step(&self, field: &impl VectorField<T>, state: &mut State<T>, dt: T);
}
