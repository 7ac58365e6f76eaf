use crate::traits::{DynamicalSystem, Stepper};
use anyhow::{bail, Result};

/// Runs `steps` consecutive sub-steps of size `dt`, recording the state
/// after each one. `state` and `t` are advanced in place, so a session can
/// batch a handful of sub-steps per animation tick and keep integrating
/// from where the batch left off.
pub fn sample_orbit(
    system: &impl DynamicalSystem<f64>,
    stepper: &mut impl Stepper<f64>,
    t: &mut f64,
    state: &mut [f64],
    steps: usize,
    dt: f64,
) -> Result<Vec<Vec<f64>>> {
    if state.len() != system.dimension() {
        bail!(
            "State dimension mismatch. Expected {}, got {}.",
            system.dimension(),
            state.len()
        );
    }
    if steps == 0 {
        bail!("Orbit sampling requires at least one step.");
    }
    if !dt.is_finite() || dt <= 0.0 {
        bail!("Step size dt must be positive and finite.");
    }

    let mut samples = Vec::with_capacity(steps);
    for _ in 0..steps {
        stepper.step(system, t, state, dt);
        samples.push(state.to_vec());
    }
    Ok(samples)
}
