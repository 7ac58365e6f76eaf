use crate::error::{ensure_finite, SimResult};
use crate::trace::Trace;
use chaoscope_core::lorenz::{Lorenz, LorenzParams, INITIAL_STATE};
use chaoscope_core::solvers::Rk4;
use chaoscope_core::traits::Stepper;
use nalgebra::Point3;
use serde::Serialize;

/// Integration step size of a Lorenz session.
pub const DT: f64 = 0.01;
/// Sub-steps batched per animation tick. Keeps the trajectory visually
/// smooth at a bounded per-frame cost.
pub const SUBSTEPS_PER_TICK: usize = 5;
/// Trace length of the attractor ribbon.
pub const TRACE_CAPACITY: usize = 3000;

/// Snapshot handed to the rendering layer.
#[derive(Debug, Clone, Serialize)]
pub struct LorenzFrame {
    pub state: [f64; 3],
    pub trace: Vec<Point3<f64>>,
}

/// Tick-driven Lorenz attractor session: owns the state vector, the time
/// accumulator and the trace; the rendering loop calls `advance` once per
/// frame and reads `frame`.
pub struct LorenzSession {
    system: Lorenz,
    stepper: Rk4<f64>,
    state: [f64; 3],
    t: f64,
    trace: Trace<Point3<f64>>,
    paused: bool,
}

impl LorenzSession {
    pub fn new(params: LorenzParams) -> SimResult<Self> {
        validate(&params)?;
        Ok(Self {
            system: Lorenz::new(params),
            stepper: Rk4::new(3),
            state: INITIAL_STATE,
            t: 0.0,
            trace: Trace::bounded(TRACE_CAPACITY)?,
            paused: false,
        })
    }

    pub fn params(&self) -> LorenzParams {
        self.system.params
    }

    /// Replaces the parameter bundle and restarts from the canonical
    /// initial condition with an empty trace; no old-regime point survives
    /// the change.
    pub fn set_params(&mut self, params: LorenzParams) -> SimResult<()> {
        validate(&params)?;
        self.system = Lorenz::new(params);
        self.restart();
        Ok(())
    }

    /// Advances the trajectory by one animation tick (a batch of
    /// `SUBSTEPS_PER_TICK` RK4 sub-steps), appending each resulting point
    /// to the trace. No-op while paused.
    pub fn advance(&mut self) {
        if self.paused {
            return;
        }
        for _ in 0..SUBSTEPS_PER_TICK {
            self.stepper
                .step(&self.system, &mut self.t, &mut self.state, DT);
            self.trace
                .push(Point3::new(self.state[0], self.state[1], self.state[2]));
        }
    }

    /// Restores the canonical initial condition and clears the trace,
    /// keeping the current parameters.
    pub fn reset(&mut self) {
        self.restart();
    }

    fn restart(&mut self) {
        self.state = INITIAL_STATE;
        self.t = 0.0;
        self.trace.clear();
    }

    pub fn frame(&self) -> LorenzFrame {
        LorenzFrame {
            state: self.state,
            trace: self.trace.snapshot(),
        }
    }

    pub fn state(&self) -> [f64; 3] {
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

fn validate(params: &LorenzParams) -> SimResult<()> {
    ensure_finite("sigma", params.sigma)?;
    ensure_finite("rho", params.rho)?;
    ensure_finite("beta", params.beta)
}

#[cfg(test)]
mod tests {
    use super::{LorenzSession, SUBSTEPS_PER_TICK, TRACE_CAPACITY};
    use chaoscope_core::lorenz::{LorenzParams, INITIAL_STATE};
    use chaoscope_core::orbit::sample_orbit;
    use chaoscope_core::solvers::Rk4;

    #[test]
    fn rejects_non_finite_parameters() {
        let params = LorenzParams {
            rho: f64::NAN,
            ..LorenzParams::default()
        };
        assert!(LorenzSession::new(params).is_err());
    }

    #[test]
    fn one_tick_appends_one_point_per_substep() {
        let mut session = LorenzSession::new(LorenzParams::default()).unwrap();
        session.advance();

        let frame = session.frame();
        assert_eq!(frame.trace.len(), SUBSTEPS_PER_TICK);
        assert_ne!(frame.state, INITIAL_STATE);
        assert!((session.time() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn ticks_are_bit_reproducible_across_sessions() {
        let mut a = LorenzSession::new(LorenzParams::default()).unwrap();
        let mut b = LorenzSession::new(LorenzParams::default()).unwrap();

        for _ in 0..10 {
            a.advance();
            b.advance();
        }

        assert_eq!(a.state(), b.state());
        assert_eq!(a.frame().trace, b.frame().trace);
    }

    #[test]
    fn tick_matches_offline_orbit_sampling() {
        let mut session = LorenzSession::new(LorenzParams::default()).unwrap();
        session.advance();

        let system = chaoscope_core::lorenz::Lorenz::new(LorenzParams::default());
        let mut stepper = Rk4::new(3);
        let mut t = 0.0;
        let mut state = INITIAL_STATE;
        let samples = sample_orbit(
            &system,
            &mut stepper,
            &mut t,
            &mut state,
            SUBSTEPS_PER_TICK,
            super::DT,
        )
        .unwrap();

        assert_eq!(session.state().to_vec(), samples[SUBSTEPS_PER_TICK - 1]);
    }

    #[test]
    fn trace_saturates_at_capacity() {
        let mut session = LorenzSession::new(LorenzParams::default()).unwrap();
        let ticks = TRACE_CAPACITY / SUBSTEPS_PER_TICK + 10;
        for _ in 0..ticks {
            session.advance();
        }
        assert_eq!(session.frame().trace.len(), TRACE_CAPACITY);
    }

    #[test]
    fn reset_restores_the_initial_condition_exactly() {
        let mut session = LorenzSession::new(LorenzParams::default()).unwrap();
        for _ in 0..7 {
            session.advance();
        }

        session.reset();
        assert_eq!(session.state(), INITIAL_STATE);
        assert_eq!(session.time(), 0.0);
        assert!(session.frame().trace.is_empty());

        // Idempotent.
        session.reset();
        assert_eq!(session.state(), INITIAL_STATE);
        assert_eq!(session.time(), 0.0);
    }

    #[test]
    fn parameter_change_clears_the_old_regime() {
        let mut session = LorenzSession::new(LorenzParams::default()).unwrap();
        for _ in 0..4 {
            session.advance();
        }
        assert!(!session.frame().trace.is_empty());

        let calmer = LorenzParams {
            rho: 14.0,
            ..LorenzParams::default()
        };
        session.set_params(calmer).unwrap();

        assert!(session.frame().trace.is_empty());
        assert_eq!(session.state(), INITIAL_STATE);
        assert_eq!(session.params(), calmer);

        // The first post-change tick only carries new-regime points.
        session.advance();
        assert_eq!(session.frame().trace.len(), super::SUBSTEPS_PER_TICK);
    }

    #[test]
    fn paused_sessions_freeze_state_time_and_trace() {
        let mut session = LorenzSession::new(LorenzParams::default()).unwrap();
        session.advance();
        let before = session.frame();
        let t_before = session.time();

        session.set_paused(true);
        session.advance();
        session.advance();

        assert_eq!(session.frame().state, before.state);
        assert_eq!(session.frame().trace.len(), before.trace.len());
        assert_eq!(session.time(), t_before);

        session.set_paused(false);
        session.advance();
        assert_ne!(session.frame().state, before.state);
    }
}
