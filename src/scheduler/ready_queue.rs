//! Shortest-job ready queue.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::models::{Process, Time};

/// Heap key. Field order is the selection order: shortest burst, then
/// earliest arrival, then position in the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    burst_time: Time,
    arrival_time: Time,
    index: usize,
}

/// Min-heap of ready processes, identified by their index in the input.
///
/// Selection is deterministic: equal bursts go to the earlier arrival, and
/// equal arrivals go to the earlier input position.
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    heap: BinaryHeap<Reverse<Entry>>,
}

impl ReadyQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the process at `index` of the input.
    pub fn push(&mut self, index: usize, process: &Process) {
        self.heap.push(Reverse(Entry {
            burst_time: process.burst_time,
            arrival_time: process.arrival_time,
            index,
        }));
    }

    /// Removes and returns the input index of the next process to run.
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse(entry)| entry.index)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
