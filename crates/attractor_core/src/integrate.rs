use crate::config::{ConfigError, RunConfig, SystemConfig};
use crate::solvers::Euler;
use crate::traits::{Scalar, Steppable, VectorField};
use crate::trajectory::{State, Trajectory};
use tracing::info;

/// Integrates `field` forward from `initial` across `steps` fixed steps.
///
/// The first stored state is `initial` itself; each subsequent state is one
/// Euler update of its predecessor. Exactly `steps` states are produced,
/// with no early termination: non-finite values propagate and are recorded
/// on the trajectory rather than aborting the run.
pub fn integrate<T: Scalar>(
    field: &impl VectorField<T>,
    initial: State<T>,
    dt: T,
    steps: usize,
) -> Trajectory<T> {
    let mut trajectory = Trajectory::with_capacity(steps);
    if steps == 0 {
        return trajectory;
    }

    let mut state = initial;
    trajectory.push(state);
    for _ in 1..steps {
        Euler.step(field, &mut state, dt);
        trajectory.push(state);
    }
    trajectory
}

/// Validates `config`, then integrates the configured system.
pub fn run(config: &RunConfig) -> Result<Trajectory<f64>, ConfigError> {
    config.validate()?;
    info!(
        system = %config.system,
        steps = config.steps,
        dt = config.dt,
        "starting integration"
    );

    let initial = State::from(config.initial_state);
    let trajectory = match config.system {
        SystemConfig::Lorenz(params) => integrate(&params, initial, config.dt, config.steps),
        SystemConfig::Rossler(params) => integrate(&params, initial, config.dt, config.steps),
    };
    Ok(trajectory)
}
