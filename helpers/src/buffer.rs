use std::collections::VecDeque;

/// RingBuffer keeps the latest values up to a user-defined capacity. As soon as the capacity is
/// reached, pushing a new value drops the oldest one.
#[derive(Debug)]
pub struct RingBuffer<T> {
    vals: VecDeque<T>,
    capacity: usize,
}

impl<T: Into<f64> + Copy> RingBuffer<T> {
    pub fn new(capacity: usize) -> RingBuffer<T> {
        RingBuffer {
            vals: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }
    pub fn push(&mut self, val: T) {
        if self.vals.len() == self.capacity {
            self.vals.pop_front();
        }
        self.vals.push_back(val);
    }
    pub fn len(&self) -> usize {
        self.vals.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }
    pub fn get_avg(&self) -> Option<f64> {
        if self.vals.is_empty() {
            return None;
        }
        Some(self.vals.iter().map(|&val| val.into()).sum::<f64>() / self.vals.len() as f64)
    }
}
