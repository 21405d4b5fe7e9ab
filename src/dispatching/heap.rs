//! Array-backed binary min-heap for ready processes.
//!
//! # Ordering
//! Entries are ordered by `(key, seq)`, where `seq` is a per-heap insertion
//! counter. The smallest key pops first and equal keys pop in the order
//! they were pushed, so dispatch order is fully deterministic.
//!
//! # Complexity
//! `push` and `pop` are O(log n), `peek` is O(1).
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 6 (Heapsort)

use crate::error::ScheduleError;

#[derive(Debug, Clone)]
struct HeapEntry<T> {
    item: T,
    key: i64,
    seq: u64,
}

impl<T> HeapEntry<T> {
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        (self.key, self.seq) < (other.key, other.seq)
    }
}

/// A minimum-oriented priority queue over `(item, key)` pairs.
///
/// # Example
/// ```
/// use u_procsim::dispatching::ReadyHeap;
///
/// let mut heap = ReadyHeap::new();
/// heap.push("long", 8);
/// heap.push("short", 2);
/// heap.push("also-short", 2);
///
/// assert_eq!(heap.pop().unwrap(), ("short", 2));
/// assert_eq!(heap.pop().unwrap(), ("also-short", 2));
/// assert_eq!(heap.pop().unwrap(), ("long", 8));
/// assert!(heap.pop().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ReadyHeap<T> {
    entries: Vec<HeapEntry<T>>,
    next_seq: u64,
}

impl<T> ReadyHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    /// Creates an empty heap with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Inserts an item with the given key.
    pub fn push(&mut self, item: T, key: i64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(HeapEntry { item, key, seq });
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the entry with the smallest key.
    ///
    /// # Errors
    /// [`ScheduleError::EmptyQueuePop`] if the heap is empty.
    pub fn pop(&mut self) -> Result<(T, i64), ScheduleError> {
        if self.entries.is_empty() {
            return Err(ScheduleError::EmptyQueuePop);
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let entry = self.entries.pop().ok_or(ScheduleError::EmptyQueuePop)?;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok((entry.item, entry.key))
    }

    /// The entry that `pop` would return, without removing it.
    pub fn peek(&self) -> Option<(&T, i64)> {
        self.entries.first().map(|e| (&e.item, e.key))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.entries[idx].precedes(&self.entries[parent]) {
                break;
            }
            self.entries.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;

            if left < len && self.entries[left].precedes(&self.entries[smallest]) {
                smallest = left;
            }
            if right < len && self.entries[right].precedes(&self.entries[smallest]) {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.entries.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<T> Default for ReadyHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
