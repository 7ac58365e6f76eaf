use chaoscope_core::logistic::{cobweb, iterates, LogisticParams};
use nalgebra::Point2;
use serde::Serialize;

/// Default number of staircase iterations.
pub const DEFAULT_ITERATIONS: usize = 50;

/// Snapshot handed to the rendering layer: the raw iterate sequence plus
/// the staircase polyline in unit-square coordinates. The parabola and
/// diagonal backdrop curves are the host's concern.
#[derive(Debug, Clone, Serialize)]
pub struct CobwebFrame {
    pub iterates: Vec<f64>,
    pub path: Vec<Point2<f64>>,
}

/// Controller for the logistic-map cobweb diagram. Unlike the flow
/// sessions it holds no trajectory state between frames: any change to
/// `r`, `x0` or the iteration count restarts the recurrence from the seed,
/// and `frame` recomputes the full sequence.
pub struct CobwebSession {
    params: LogisticParams,
    iterations: usize,
    initial: (LogisticParams, usize),
}

impl CobwebSession {
    pub fn new(params: LogisticParams, iterations: usize) -> Self {
        Self {
            params,
            iterations,
            initial: (params, iterations),
        }
    }

    pub fn params(&self) -> LogisticParams {
        self.params
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn set_r(&mut self, r: f64) {
        self.params.r = r;
    }

    pub fn set_x0(&mut self, x0: f64) {
        self.params.x0 = x0;
    }

    pub fn set_iterations(&mut self, iterations: usize) {
        self.iterations = iterations;
    }

    /// Restores the parameters the session was constructed with.
    pub fn reset(&mut self) {
        let (params, iterations) = self.initial;
        self.params = params;
        self.iterations = iterations;
    }

    /// Recomputes the iterate sequence and its staircase from the seed.
    pub fn frame(&self) -> CobwebFrame {
        let LogisticParams { r, x0 } = self.params;
        CobwebFrame {
            iterates: iterates(r, x0, self.iterations).collect(),
            path: cobweb(r, x0, self.iterations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CobwebSession, DEFAULT_ITERATIONS};
    use chaoscope_core::logistic::LogisticParams;

    #[test]
    fn frame_carries_n_iterates_and_the_matching_staircase() {
        let session = CobwebSession::new(LogisticParams::default(), DEFAULT_ITERATIONS);
        let frame = session.frame();

        assert_eq!(frame.iterates.len(), DEFAULT_ITERATIONS);
        assert_eq!(frame.path.len(), 2 * DEFAULT_ITERATIONS + 1);
        // The staircase's vertical steps land on the iterates.
        assert_eq!(frame.path[1].y, frame.iterates[0]);
        assert_eq!(frame.path[3].y, frame.iterates[1]);
    }

    #[test]
    fn zero_iterations_yield_only_the_seed_vertex() {
        let session = CobwebSession::new(LogisticParams::default(), 0);
        let frame = session.frame();

        assert!(frame.iterates.is_empty());
        assert_eq!(frame.path.len(), 1);
    }

    #[test]
    fn changing_r_restarts_the_sequence_from_the_seed() {
        let mut session = CobwebSession::new(LogisticParams { r: 2.0, x0: 0.2 }, 10);
        let before = session.frame();

        session.set_r(3.9);
        let after = session.frame();

        assert_eq!(after.path[0], before.path[0]);
        assert_ne!(after.iterates[0], before.iterates[0]);
        assert_eq!(after.iterates.len(), 10);
    }

    #[test]
    fn frames_recompute_rather_than_extend() {
        let session = CobwebSession::new(LogisticParams::default(), 25);
        let a = session.frame();
        let b = session.frame();

        assert_eq!(a.iterates, b.iterates);
        assert_eq!(a.path, b.path);
    }

    #[test]
    fn reset_restores_the_construction_parameters() {
        let params = LogisticParams { r: 3.2, x0: 0.4 };
        let mut session = CobwebSession::new(params, 30);

        session.set_r(1.1);
        session.set_x0(0.9);
        session.set_iterations(5);
        session.reset();

        assert_eq!(session.params(), params);
        assert_eq!(session.iterations(), 30);
    }
}
