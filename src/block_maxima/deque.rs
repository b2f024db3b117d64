//! Monotone index deque for running window maxima.
//!
//! Fixed-capacity ring buffer of `(index, value)` pairs whose values are
//! non-increasing from front to back under the NaN-propagating order of
//! [`dominates`]. The front is always the maximum of the live window.

use crate::block_maxima::primitives::dominates;

#[derive(Debug, Clone)]
pub(crate) struct MaxDeque {
    buf: Vec<(usize, f64)>,
    head: usize,
    tail: usize,
    mask: usize,
}

impl MaxDeque {
    /// Deque able to hold a full window of `width` entries.
    pub(crate) fn with_width(width: usize) -> Self {
        // Strictly larger than `width` so a full window never aliases empty.
        let size = (width + 1).next_power_of_two();
        Self { buf: vec![(0, f64::NEG_INFINITY); size], head: 0, tail: 0, mask: size - 1 }
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    #[inline(always)]
    fn back(&self) -> (usize, f64) {
        self.buf[self.tail.wrapping_sub(1) & self.mask]
    }

    /// Value of the current window maximum. Callers push before reading.
    #[inline(always)]
    pub(crate) fn front_value(&self) -> f64 {
        self.buf[self.head].1
    }

    /// Drop entries whose index precedes `oldest_allowed`.
    #[inline(always)]
    pub(crate) fn expire(&mut self, oldest_allowed: usize) {
        while !self.is_empty() && self.buf[self.head].0 < oldest_allowed {
            self.head = (self.head + 1) & self.mask;
        }
    }

    /// Append `value` at `idx`, evicting every back entry it dominates.
    #[inline(always)]
    pub(crate) fn push(&mut self, idx: usize, value: f64) {
        while !self.is_empty() && dominates(value, self.back().1) {
            self.tail = self.tail.wrapping_sub(1) & self.mask;
        }
        self.buf[self.tail] = (idx, value);
        self.tail = (self.tail + 1) & self.mask;
    }
}
