/*!
 * Sample History
 * Count-based ring over memory samples
 *
 * Fixed capacity, not time-based: the oldest sample is evicted on overflow
 * regardless of its age. Eviction at the front keeps ingest O(1) amortized.
 */

use crate::core::types::MemorySample;
use std::collections::VecDeque;

/// Bounded, insertion-ordered sample window. Only the ingest path mutates
/// it; the analyzers read it.
#[derive(Debug)]
pub struct SampleHistory {
    samples: VecDeque<MemorySample>,
    capacity: usize,
}

impl SampleHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest when full.
    pub fn push(&mut self, sample: MemorySample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recently ingested sample.
    #[inline]
    pub fn latest(&self) -> Option<&MemorySample> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MemorySample> {
        self.samples.iter()
    }

    /// The most recent `count` samples, oldest first.
    pub fn tail(&self, count: usize) -> impl Iterator<Item = &MemorySample> {
        let skip = self.samples.len().saturating_sub(count);
        self.samples.iter().skip(skip)
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
