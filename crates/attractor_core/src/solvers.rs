use crate::traits::{Scalar, Steppable, VectorField};
use crate::trajectory::State;

/// First-order explicit Euler stepper, fixed step.
///
/// Advances `state` to `state + derivative(state) * dt`. The update is
/// strictly Markovian: the next state depends only on the current one and
/// the field's constants.
pub struct Euler;

impl<T: Scalar> Steppable<T> for Euler {
    fn step(&self, field: &impl VectorField<T>, state: &mut State<T>, dt: T) {
        let d = field.derivative(*state);
        state.x = state.x + d.x * dt;
        state.y = state.y + d.y * dt;
        state.z = state.z + d.z * dt;
    }
}
