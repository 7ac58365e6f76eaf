use crate::traits::{DynamicalSystem, Scalar};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Physical parameters of the double pendulum. Lengths and gravity are in
/// display units (pixels), matching the scale the sessions render at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendulumParams {
    pub m1: f64,
    pub m2: f64,
    pub l1: f64,
    pub l2: f64,
    pub g: f64,
    /// Post-step multiplicative attenuation of both angular velocities.
    /// Applied by the session, never inside the derivative.
    pub damping: f64,
}

impl Default for PendulumParams {
    fn default() -> Self {
        Self {
            m1: 10.0,
            m2: 10.0,
            l1: 100.0,
            l2: 100.0,
            g: 98.1,
            damping: 0.999,
        }
    }
}

/// Both arms released level, at rest. The 0.1 rad offset between the arms
/// is what separates neighbouring trajectories and exhibits the
/// sensitivity to initial conditions.
pub const INITIAL_STATE: [f64; 4] = [FRAC_PI_2, 0.0, FRAC_PI_2 + 0.1, 0.0];

/// Double pendulum over the state (theta1, omega1, theta2, omega2), with
/// the Lagrangian-derived angular accelerations.
///
/// Both accelerations share the denominator factor
/// `2 m1 + m2 - m2 cos(2 (theta1 - theta2))`, which for positive masses is
/// bounded below by `2 m1`. Degenerate mass/angle configurations that drive
/// it toward zero are not guarded against; the resulting non-finite floats
/// propagate to the caller.
#[derive(Debug, Clone, Copy)]
pub struct DoublePendulum {
    pub params: PendulumParams,
}

impl DoublePendulum {
    pub fn new(params: PendulumParams) -> Self {
        Self { params }
    }
}

impl<T: Scalar> DynamicalSystem<T> for DoublePendulum {
    fn dimension(&self) -> usize {
        4
    }

    fn eval(&self, _t: T, state: &[T], out: &mut [T]) {
        let m1 = T::from_f64(self.params.m1).unwrap();
        let m2 = T::from_f64(self.params.m2).unwrap();
        let l1 = T::from_f64(self.params.l1).unwrap();
        let l2 = T::from_f64(self.params.l2).unwrap();
        let g = T::from_f64(self.params.g).unwrap();
        let two = T::from_f64(2.0).unwrap();

        let (th1, w1, th2, w2) = (state[0], state[1], state[2], state[3]);
        let delta = th1 - th2;
        let total_mass = two * m1 + m2;
        let shared = total_mass - m2 * (two * delta).cos();

        let alpha1 = (-g * total_mass * th1.sin()
            - m2 * g * (th1 - two * th2).sin()
            - two * delta.sin() * m2 * (w2 * w2 * l2 + w1 * w1 * l1 * delta.cos()))
            / (l1 * shared);

        let alpha2 = (two
            * delta.sin()
            * (w1 * w1 * l1 * (m1 + m2) + g * (m1 + m2) * th1.cos() + w2 * w2 * l2 * m2 * delta.cos()))
            / (l2 * shared);

        out[0] = w1;
        out[1] = alpha1;
        out[2] = w2;
        out[3] = alpha2;
    }
}

/// Maps angles and rod lengths to the two bob positions, relative to the
/// pivot. Screen convention: y grows downward, so the rest configuration
/// (theta = 0) hangs at positive y.
pub fn bob_positions(state: &[f64; 4], params: &PendulumParams) -> (Point2<f64>, Point2<f64>) {
    let upper = Point2::new(params.l1 * state[0].sin(), params.l1 * state[0].cos());
    let lower = Point2::new(
        upper.x + params.l2 * state[2].sin(),
        upper.y + params.l2 * state[2].cos(),
    );
    (upper, lower)
}
