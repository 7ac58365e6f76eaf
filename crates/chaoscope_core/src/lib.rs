//! The `chaoscope_core` crate is the numerical engine behind the chaoscope
//! interactive dynamics sessions.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction), `DynamicalSystem`
//!   (flows and maps), `Stepper` (fixed-step solvers).
//! - **Solvers**: the classical `Rk4` integrator and the `DiscreteMap`
//!   iterator, both driving any `DynamicalSystem` through the same contract.
//! - **Models**: the Lorenz flow, the double pendulum, and the logistic
//!   recurrence with its cobweb construction.
//! - **Orbit sampling**: validated batch sub-stepping for trajectory
//!   collection.

pub mod logistic;
pub mod lorenz;
pub mod orbit;
pub mod pendulum;
pub mod solvers;
pub mod traits;
