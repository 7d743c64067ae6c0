use std::collections::VecDeque;

use crate::orbit::Cartesian;

pub const DEFAULT_TRAIL_LENGTH: usize = 100;

/// Most recent positions of one satellite, oldest first.
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    capacity: usize,
    points: VecDeque<Cartesian>,
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_LENGTH)
    }
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            points: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, point: Cartesian) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn points(&self) -> impl Iterator<Item = &Cartesian> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
