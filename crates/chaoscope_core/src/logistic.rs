use crate::solvers::DiscreteMap;
use crate::traits::{DynamicalSystem, Scalar, Stepper};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Growth rate and seed of the logistic recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticParams {
    pub r: f64,
    pub x0: f64,
}

impl Default for LogisticParams {
    fn default() -> Self {
        Self { r: 3.5, x0: 0.2 }
    }
}

/// The logistic map x_{n+1} = r x_n (1 - x_n), as a one-dimensional
/// discrete system so it runs under the same `Stepper` contract as the
/// flows.
#[derive(Debug, Clone, Copy)]
pub struct LogisticMap {
    pub r: f64,
}

impl LogisticMap {
    pub fn new(r: f64) -> Self {
        Self { r }
    }
}

impl<T: Scalar> DynamicalSystem<T> for LogisticMap {
    fn dimension(&self) -> usize {
        1
    }

    fn eval(&self, _t: T, state: &[T], out: &mut [T]) {
        let r = T::from_f64(self.r).unwrap();
        let one = T::from_f64(1.0).unwrap();
        let x = state[0];
        out[0] = r * x * (one - x);
    }
}

/// Lazy, finite sequence of successive logistic iterates x_1 .. x_n.
///
/// Iterates are not clamped to the unit interval; values that escape it are
/// produced like any other and the sequence always has exactly `n` entries.
/// Restarting means constructing a new sequence from the seed.
pub struct Iterates {
    system: LogisticMap,
    stepper: DiscreteMap<f64>,
    state: [f64; 1],
    t: f64,
    remaining: usize,
}

impl Iterator for Iterates {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.stepper
            .step(&self.system, &mut self.t, &mut self.state, 1.0);
        Some(self.state[0])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iterates {}

/// Returns the sequence of `n` successive iterates of the logistic map
/// started from `x0`. With `n = 0` the sequence is empty.
pub fn iterates(r: f64, x0: f64, n: usize) -> Iterates {
    Iterates {
        system: LogisticMap::new(r),
        stepper: DiscreteMap::new(1),
        state: [x0],
        t: 0.0,
        remaining: n,
    }
}

/// The cobweb staircase for `n` iterations from `x0`: starting at
/// (x0, 0), alternate a vertical segment up to the parabola with a
/// horizontal segment across to the diagonal. Yields 2n + 1 vertices.
///
/// The parabola and diagonal curves themselves are the drawing layer's
/// concern.
pub fn cobweb(r: f64, x0: f64, n: usize) -> Vec<Point2<f64>> {
    let mut path = Vec::with_capacity(2 * n + 1);
    let mut x = x0;
    path.push(Point2::new(x, 0.0));
    for y in iterates(r, x0, n) {
        path.push(Point2::new(x, y));
        path.push(Point2::new(y, y));
        x = y;
    }
    path
}
