use crate::traits::Scalar;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A point in 3D phase space at one discrete time index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct State<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> State<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// True when all three components are finite (no NaN, no infinities).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<T: Scalar> From<(T, T, T)> for State<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self { x, y, z }
    }
}

/// An ordered sequence of states, insertion order = time order.
///
/// Filled sequentially by the integrator and never mutated afterwards.
/// Divergence is not an error: when a component first leaves the finite
/// range the index is recorded and integration carries on, with subsequent
/// states propagating NaN/Inf per standard floating-point rules.
#[derive(Debug, Clone, Serialize)]
pub struct Trajectory<T: Scalar> {
    states: Vec<State<T>>,
    first_non_finite: Option<usize>,
}

impl<T: Scalar> Trajectory<T> {
    pub(crate) fn with_capacity(steps: usize) -> Self {
        Self {
            states: Vec::with_capacity(steps),
            first_non_finite: None,
        }
    }

    pub(crate) fn push(&mut self, state: State<T>) {
        if self.first_non_finite.is_none() && !state.is_finite() {
            self.first_non_finite = Some(self.states.len());
            warn!(
                step = self.states.len(),
                state = ?state,
                "trajectory left the finite range"
            );
        }
        self.states.push(state);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[State<T>] {
        &self.states
    }

    /// Index of the first state with a non-finite component, if any.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.first_non_finite
    }

    /// The states as aligned (x, y, z) tuples, in time order.
    pub fn points(&self) -> impl Iterator<Item = (T, T, T)> + '_ {
        self.states.iter().map(|s| (s.x, s.y, s.z))
    }
}
