use crate::error::{ensure_positive, SimResult};
use crate::trace::Trace;
use chaoscope_core::pendulum::{bob_positions, DoublePendulum, PendulumParams, INITIAL_STATE};
use chaoscope_core::solvers::Rk4;
use chaoscope_core::traits::Stepper;
use nalgebra::Point2;
use serde::Serialize;

/// Step size that gives a good visual speed at typical frame rates.
pub const DEFAULT_DT: f64 = 0.15;
/// Trace length of the lower bob's path.
pub const TRACE_CAPACITY: usize = 300;

/// Snapshot handed to the rendering layer. All coordinates are relative to
/// the pivot; the host adds its own pivot offset when drawing.
#[derive(Debug, Clone, Serialize)]
pub struct PendulumFrame {
    pub upper: Point2<f64>,
    pub lower: Point2<f64>,
    pub trace: Vec<Point2<f64>>,
}

/// Tick-driven double-pendulum session. One RK4 step per tick, followed by
/// the damping attenuation of both angular velocities, followed by a trace
/// append of the lower bob.
pub struct PendulumSession {
    system: DoublePendulum,
    stepper: Rk4<f64>,
    state: [f64; 4],
    t: f64,
    trace: Trace<Point2<f64>>,
    paused: bool,
}

impl PendulumSession {
    pub fn new(params: PendulumParams) -> SimResult<Self> {
        validate(&params)?;
        Ok(Self {
            system: DoublePendulum::new(params),
            stepper: Rk4::new(4),
            state: INITIAL_STATE,
            t: 0.0,
            trace: Trace::bounded(TRACE_CAPACITY)?,
            paused: false,
        })
    }

    pub fn params(&self) -> PendulumParams {
        self.system.params
    }

    /// Replaces the parameter bundle without touching state or trace; the
    /// trajectory bends from the current state on the next tick.
    pub fn set_params(&mut self, params: PendulumParams) -> SimResult<()> {
        validate(&params)?;
        self.system = DoublePendulum::new(params);
        Ok(())
    }

    /// Advances by one tick of size `dt`. Damping is applied to the
    /// angular velocities after the integration step, then the lower bob's
    /// position is appended to the trace. No-op while paused.
    pub fn advance(&mut self, dt: f64) {
        if self.paused {
            return;
        }
        self.stepper
            .step(&self.system, &mut self.t, &mut self.state, dt);

        let damping = self.system.params.damping;
        self.state[1] *= damping;
        self.state[3] *= damping;

        let (_, lower) = bob_positions(&self.state, &self.system.params);
        self.trace.push(lower);
    }

    /// Restores the canonical release state and an empty trace, keeping
    /// the current parameters.
    pub fn reset(&mut self) {
        self.state = INITIAL_STATE;
        self.t = 0.0;
        self.trace.clear();
    }

    pub fn frame(&self) -> PendulumFrame {
        let (upper, lower) = bob_positions(&self.state, &self.system.params);
        PendulumFrame {
            upper,
            lower,
            trace: self.trace.snapshot(),
        }
    }

    pub fn state(&self) -> [f64; 4] {
        self.state
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

fn validate(params: &PendulumParams) -> SimResult<()> {
    ensure_positive("m1", params.m1)?;
    ensure_positive("m2", params.m2)?;
    ensure_positive("l1", params.l1)?;
    ensure_positive("l2", params.l2)?;
    ensure_positive("g", params.g)?;
    ensure_positive("damping", params.damping)
}
