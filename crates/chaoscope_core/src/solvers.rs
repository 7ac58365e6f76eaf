use crate::traits::{DynamicalSystem, Scalar, Stepper};

/// Classical fourth-order Runge-Kutta stepper.
///
/// The four stage slopes and the trial state are kept as reusable buffers
/// sized to the system dimension at construction.
pub struct Rk4<T: Scalar> {
    k1: Vec<T>,
    k2: Vec<T>,
    k3: Vec<T>,
    k4: Vec<T>,
    trial: Vec<T>,
}

impl<T: Scalar> Rk4<T> {
    pub fn new(dim: usize) -> Self {
        let zero = T::from_f64(0.0).unwrap();
        Self {
            k1: vec![zero; dim],
            k2: vec![zero; dim],
            k3: vec![zero; dim],
            k4: vec![zero; dim],
            trial: vec![zero; dim],
        }
    }
}

impl<T: Scalar> Stepper<T> for Rk4<T> {
    fn step(&mut self, system: &impl DynamicalSystem<T>, t: &mut T, state: &mut [T], h: T) {
        let half = T::from_f64(0.5).unwrap();
        let two = T::from_f64(2.0).unwrap();
        let sixth = T::from_f64(1.0 / 6.0).unwrap();

        let t0 = *t;
        let half_h = h * half;

        // k1 = f(t, y)
        system.eval(t0, state, &mut self.k1);

        // k2 = f(t + h/2, y + (h/2) k1)
        for i in 0..state.len() {
            self.trial[i] = state[i] + half_h * self.k1[i];
        }
        system.eval(t0 + half_h, &self.trial, &mut self.k2);

        // k3 = f(t + h/2, y + (h/2) k2)
        for i in 0..state.len() {
            self.trial[i] = state[i] + half_h * self.k2[i];
        }
        system.eval(t0 + half_h, &self.trial, &mut self.k3);

        // k4 = f(t + h, y + h k3)
        for i in 0..state.len() {
            self.trial[i] = state[i] + h * self.k3[i];
        }
        system.eval(t0 + h, &self.trial, &mut self.k4);

        // y <- y + (h/6)(k1 + 2 k2 + 2 k3 + k4)
        for i in 0..state.len() {
            state[i] = state[i]
                + h * sixth * (self.k1[i] + two * self.k2[i] + two * self.k3[i] + self.k4[i]);
        }

        *t = t0 + h;
    }
}

/// Stepper for discrete recurrences: x_{n+1} = f(x_n).
///
/// `h` plays no role in the update itself; time still advances by `h` so a
/// map session can count iterations through the same clock.
pub struct DiscreteMap<T: Scalar> {
    next: Vec<T>,
}

impl<T: Scalar> DiscreteMap<T> {
    pub fn new(dim: usize) -> Self {
        Self {
            next: vec![T::from_f64(0.0).unwrap(); dim],
        }
    }
}

impl<T: Scalar> Stepper<T> for DiscreteMap<T> {
    fn step(&mut self, system: &impl DynamicalSystem<T>, t: &mut T, state: &mut [T], h: T) {
        system.eval(*t, state, &mut self.next);
        state.copy_from_slice(&self.next);
        *t = *t + h;
    }
}
