// Bounded time-series buffer backing the line charts
use serde::Serialize;
use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 30;

/// Sliding window of the most recent samples. Appends at the back and evicts
/// from the front once `capacity` is exceeded; samples are never reordered.
#[derive(Debug, Clone)]
pub struct SeriesBuffer {
    capacity: usize,
    values: VecDeque<f64>,
}

impl SeriesBuffer {
    /// A zero capacity is clamped to one. Storage grows on demand past the
    /// default window.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            values: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY) + 1),
        }
    }

    pub fn push(&mut self, value: f64) {
        self.values.push_back(value);
        while self.values.len() > self.capacity {
            self.values.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<f64> {
        self.values.back().copied()
    }

    /// Oldest first.
    pub fn values(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }
}

impl Default for SeriesBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Serialize for SeriesBuffer {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_last_capacity_values_in_order() {
        let mut buffer = SeriesBuffer::new(DEFAULT_CAPACITY);
        for i in 0..75 {
            buffer.push(i as f64);
            assert!(buffer.len() <= buffer.capacity());
        }

        let expected: Vec<f64> = (45..75).map(|i| i as f64).collect();
        assert_eq!(buffer.values(), expected);
        assert_eq!(buffer.latest(), Some(74.0));
    }

    #[test]
    fn test_partial_fill() {
        let mut buffer = SeriesBuffer::new(5);
        buffer.push(1.0);
        buffer.push(1.0);
        assert_eq!(buffer.values(), vec![1.0, 1.0]);
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut buffer = SeriesBuffer::new(0);
        buffer.push(1.0);
        buffer.push(2.0);
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.values(), vec![2.0]);
    }

    #[test]
    fn test_huge_capacity_allocates_lazily() {
        let mut buffer = SeriesBuffer::new(usize::MAX);
        for i in 0..3 {
            buffer.push(i as f64);
        }
        assert_eq!(buffer.capacity(), usize::MAX);
        assert_eq!(buffer.values(), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_serializes_as_array() {
        let mut buffer = SeriesBuffer::new(3);
        buffer.push(1.5);
        buffer.push(2.5);
        assert_eq!(serde_json::to_string(&buffer).unwrap(), "[1.5,2.5]");
    }
}
