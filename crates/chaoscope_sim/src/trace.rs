use crate::error::{SimError, SimResult};
use std::collections::VecDeque;

/// Bounded history of rendered trajectory points. Appending beyond the
/// capacity evicts the oldest point, so the buffer always holds the most
/// recent `capacity` points in arrival order.
#[derive(Debug, Clone)]
pub struct Trace<P> {
    points: VecDeque<P>,
    capacity: usize,
}

impl<P> Trace<P> {
    pub fn bounded(capacity: usize) -> SimResult<Self> {
        if capacity == 0 {
            return Err(SimError::ZeroCapacity);
        }
        Ok(Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: P) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn latest(&self) -> Option<&P> {
        self.points.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.points.iter()
    }
}

impl<P: Clone> Trace<P> {
    /// Copies the buffered points, oldest first.
    pub fn snapshot(&self) -> Vec<P> {
        self.points.iter().cloned().collect()
    }
}
