use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// Scalar type the solvers and models are generic over.
/// Anything float-like with `f64` conversion qualifies.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// A dynamical system: a continuous flow or a discrete map over a
/// fixed-dimension state vector.
pub trait DynamicalSystem<T: Scalar> {
    /// State-space dimension. Fixed for the lifetime of the system.
    fn dimension(&self) -> usize;

    /// Evaluates the vector field (dx/dt) or, for maps, the next iterate.
    ///
    /// `state` and `out` must both have length `dimension()`; that is the
    /// caller's contract and is not checked here. The shipped models are
    /// autonomous, but `t` is part of the contract and every stepper
    /// forwards it at the correct stage offsets.
    fn eval(&self, t: T, state: &[T], out: &mut [T]);
}

/// A fixed-step scheme that advances a system in place.
pub trait Stepper<T: Scalar> {
    /// Advances `state` and `t` by one step of size `h`.
    ///
    /// Steppers may hold scratch buffers between calls, but no semantic
    /// state: identical inputs produce identical outputs.
    fn step(&mut self, system: &impl DynamicalSystem<T>, t: &mut T, state: &mut [T], h: T);
}
