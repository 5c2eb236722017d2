//! Array-backed binary min-heap keyed by an integer weight.
//!
//! Equal weights are ordered by insertion sequence, so the element inserted
//! first among equals is extracted first and repeated runs over the same
//! inserts always produce the same extraction order.

#[derive(Debug, Clone)]
struct Entry<T> {
    weight: usize,
    seq: u64,
    item: T,
}

impl<T> Entry<T> {
    fn key(&self) -> (usize, u64) {
        (self.weight, self.seq)
    }
}

/// A min-ordered priority queue.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<Entry<T>>,
    next_seq: u64,
}

impl<T> MinHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        MinHeap {
            elements: Vec::new(),
            next_seq: 0,
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            elements: Vec::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Number of queued elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Weight of the element `extract_min` would return next.
    pub fn peek_weight(&self) -> Option<usize> {
        self.elements.first().map(|e| e.weight)
    }

    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn left(i: usize) -> usize {
        2 * i + 1
    }

    fn right(i: usize) -> usize {
        2 * i + 2
    }

    /// Adds `item` with the given weight in O(log n).
    pub fn insert(&mut self, weight: usize, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.elements.push(Entry { weight, seq, item });
        self.sift_up(self.elements.len() - 1);
    }

    /// Removes and returns the lightest element, or `None` when empty.
    pub fn extract_min(&mut self) -> Option<T> {
        if self.elements.len() <= 1 {
            return self.elements.pop().map(|e| e.item);
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let min = self.elements.pop()?;
        self.sift_down(0);
        Some(min.item)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = Self::parent(i);
            if self.elements[i].key() >= self.elements[p].key() {
                break;
            }
            self.elements.swap(i, p);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.elements.len();
        loop {
            let l = Self::left(i);
            let r = Self::right(i);
            let mut smallest = i;
            if l < n && self.elements[l].key() < self.elements[smallest].key() {
                smallest = l;
            }
            if r < n && self.elements[r].key() < self.elements[smallest].key() {
                smallest = r;
            }
            if smallest == i {
                break;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
