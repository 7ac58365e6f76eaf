use crate::error::{ensure_finite, ensure_positive, SimResult};
use chaoscope_core::lorenz::{Lorenz, LorenzParams};
use chaoscope_core::solvers::Rk4;
use chaoscope_core::traits::{DynamicalSystem, Scalar, Stepper};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Integration step size of the drift session, before speed scaling.
pub const DT: f64 = 0.01;
/// Starting point of the roaming hero point, inside the attractor basin
/// rather than at the canonical Lorenz seed.
pub const INITIAL_STATE: [f64; 3] = [10.0, 10.0, 10.0];
/// Vertical shift that centers the attractor's z range on the display
/// origin.
pub const DISPLAY_Z_OFFSET: f64 = -25.0;

/// Tuning of the roaming hero point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftParams {
    /// Multiplies the step size, trading accuracy for visible motion.
    pub speed: f64,
    pub repulsion_strength: f64,
    pub repulsion_radius: f64,
}

impl Default for DriftParams {
    fn default() -> Self {
        Self {
            speed: 8.0,
            repulsion_strength: 50.0,
            repulsion_radius: 100.0,
        }
    }
}

/// Lorenz field with a repulsive forcing term around a movable point
/// (typically the pointer, mapped into attractor space). Outside the
/// repulsion radius the field is exactly the Lorenz flow.
#[derive(Debug, Clone, Copy)]
pub struct RepelledLorenz {
    pub lorenz: Lorenz,
    pub repulsor: Option<Point3<f64>>,
    pub strength: f64,
    pub radius: f64,
}

impl RepelledLorenz {
    pub fn new(params: LorenzParams, strength: f64, radius: f64) -> Self {
        Self {
            lorenz: Lorenz::new(params),
            repulsor: None,
            strength,
            radius,
        }
    }
}

impl<T: Scalar> DynamicalSystem<T> for RepelledLorenz {
    fn dimension(&self) -> usize {
        3
    }

    fn eval(&self, t: T, state: &[T], out: &mut [T]) {
        self.lorenz.eval(t, state, out);

        let Some(repulsor) = self.repulsor else {
            return;
        };

        let dx = state[0] - T::from_f64(repulsor.x).unwrap();
        let dy = state[1] - T::from_f64(repulsor.y).unwrap();
        let dz = state[2] - T::from_f64(repulsor.z).unwrap();
        let dist_sq = dx * dx + dy * dy + dz * dz;

        let radius_sq = T::from_f64(self.radius * self.radius).unwrap();
        if dist_sq < radius_sq {
            let one = T::from_f64(1.0).unwrap();
            let factor = T::from_f64(self.strength).unwrap() / (dist_sq + one);
            out[0] = out[0] + dx * factor;
            out[1] = out[1] + dy * factor;
            out[2] = out[2] + dz * factor;
        }
    }
}

/// Session behind the hero background: a single point riding the Lorenz
/// flow, nudged away from the pointer, with no trace kept.
pub struct DriftSession {
    system: RepelledLorenz,
    stepper: Rk4<f64>,
    state: [f64; 3],
    t: f64,
    speed: f64,
    paused: bool,
}

impl DriftSession {
    pub fn new(lorenz: LorenzParams, params: DriftParams) -> SimResult<Self> {
        ensure_finite("sigma", lorenz.sigma)?;
        ensure_finite("rho", lorenz.rho)?;
        ensure_finite("beta", lorenz.beta)?;
        ensure_positive("speed", params.speed)?;
        ensure_finite("repulsion_strength", params.repulsion_strength)?;
        ensure_positive("repulsion_radius", params.repulsion_radius)?;

        Ok(Self {
            system: RepelledLorenz::new(lorenz, params.repulsion_strength, params.repulsion_radius),
            stepper: Rk4::new(3),
            state: INITIAL_STATE,
            t: 0.0,
            speed: params.speed,
            paused: false,
        })
    }

    /// Advances by one tick, repelled from `repulsor` if one is given.
    /// The step size is `DT` scaled by the configured speed. No-op while
    /// paused.
    pub fn advance(&mut self, repulsor: Option<Point3<f64>>) {
        if self.paused {
            return;
        }
        self.system.repulsor = repulsor;
        self.stepper
            .step(&self.system, &mut self.t, &mut self.state, DT * self.speed);
    }

    pub fn reset(&mut self) {
        self.state = INITIAL_STATE;
        self.t = 0.0;
    }

    pub fn state(&self) -> [f64; 3] {
        self.state
    }

    /// The point in display coordinates: attractor space with the z range
    /// recentered on the origin.
    pub fn display_position(&self) -> Point3<f64> {
        Point3::new(
            self.state[0],
            self.state[1],
            self.state[2] + DISPLAY_Z_OFFSET,
        )
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}
