use crate::traits::{DynamicalSystem, Scalar};
use serde::{Deserialize, Serialize};

/// Parameters of the Lorenz-63 flow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LorenzParams {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
}

impl Default for LorenzParams {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
        }
    }
}

/// Where every Lorenz session starts and restarts from: a point slightly
/// off the unstable origin.
pub const INITIAL_STATE: [f64; 3] = [0.1, 0.0, 0.0];

/// The Lorenz flow:
///
/// dx/dt = sigma (y - x)
/// dy/dt = x (rho - z) - y
/// dz/dt = x y - beta z
#[derive(Debug, Clone, Copy)]
pub struct Lorenz {
    pub params: LorenzParams,
}

impl Lorenz {
    pub fn new(params: LorenzParams) -> Self {
        Self { params }
    }
}

impl<T: Scalar> DynamicalSystem<T> for Lorenz {
    fn dimension(&self) -> usize {
        3
    }

    fn eval(&self, _t: T, state: &[T], out: &mut [T]) {
        let sigma = T::from_f64(self.params.sigma).unwrap();
        let rho = T::from_f64(self.params.rho).unwrap();
        let beta = T::from_f64(self.params.beta).unwrap();

        let (x, y, z) = (state[0], state[1], state[2]);

        out[0] = sigma * (y - x);
        out[1] = x * (rho - z) - y;
        out[2] = x * y - beta * z;
    }
}
