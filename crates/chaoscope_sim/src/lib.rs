//! Tick-driven session controllers over `chaoscope_core`.
//!
//! Each session owns one model's mutable state: the current state vector,
//! the time accumulator, the bounded display trace and a pause flag. A
//! rendering host drives a session by calling `advance` once per animation
//! tick and reading `frame`; ticks for one session are never concurrent,
//! and sessions share nothing, so independent sessions may live on
//! independent threads.
//!
//! Sessions validate their configuration at construction and are
//! infallible afterwards; mathematical degeneracies propagate as ordinary
//! floating-point results.

pub mod cobweb;
pub mod drift;
pub mod error;
pub mod lorenz;
pub mod pendulum;
pub mod trace;

pub use error::{SimError, SimResult};
