//! Core numerical engine for computing chaotic attractor trajectories.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction), `VectorField` (autonomous 3D systems), `Steppable` (steppers).
//! - **Systems**: the `Lorenz` and `Rossler` vector fields with their classical constants.
//! - **Solvers**: the fixed-step explicit `Euler` stepper.
//! - **Trajectory**: phase-space states and the recorded orbit, including divergence tracking.
//! - **Config**: explicit run configuration with up-front validation.
//!
//! Integration is strictly sequential by data dependency; a run owns its
//! trajectory buffer exclusively and fills it left to right.

pub mod config;
pub mod integrate;
pub mod solvers;
pub mod systems;
pub mod traits;
pub mod trajectory;
