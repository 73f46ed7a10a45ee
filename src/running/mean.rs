/// Cumulative arithmetic mean kept as a running sum and count.
///
/// Each push is O(1), so averaging every prefix of a sequence costs O(n)
/// rather than recomputing each prefix mean from scratch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningMean {
    sum: f64,
    count: usize,
}

impl RunningMean {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value and return the mean of everything seen so far
    #[inline]
    pub fn push(&mut self, value: f64) -> f64 {
        self.sum += value;
        self.count += 1;
        self.sum / self.count as f64
    }
}
