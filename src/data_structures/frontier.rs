use std::fmt::Debug;

/// Binary min-heap of (node, priority) pairs used as the open set of a search.
///
/// There is no decrease-key: pushing a node that is already queued simply
/// adds another entry. Callers are expected to treat the priority stored
/// here as a hint and re-check the authoritative cost when an entry pops.
///
/// Equal priorities are not ordered in any particular way.
#[derive(Debug, Clone)]
pub struct Frontier<N, P>
where
    N: Copy + Debug,
    P: PartialOrd + Copy + Debug,
{
    /// Parallel backing arrays, index 0 holds the minimum
    nodes: Vec<N>,
    priorities: Vec<P>,
}

impl<N, P> Default for Frontier<N, P>
where
    N: Copy + Debug,
    P: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, P> Frontier<N, P>
where
    N: Copy + Debug,
    P: PartialOrd + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            nodes: Vec::new(),
            priorities: Vec::new(),
        }
    }

    /// Creates an empty frontier that can hold `capacity` entries without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            nodes: Vec::with_capacity(capacity),
            priorities: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of queued entries, duplicates included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Removes every entry, keeping the allocation
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.priorities.clear();
    }

    /// Queues a node with the given priority. O(log n).
    pub fn push(&mut self, node: N, priority: P) {
        self.nodes.push(node);
        self.priorities.push(priority);
        self.sift_up(self.nodes.len() - 1);
    }

    /// Returns the node with the smallest priority without removing it
    pub fn peek_min(&self) -> Option<N> {
        self.nodes.first().copied()
    }

    /// Returns the smallest priority currently queued
    pub fn peek_priority(&self) -> Option<P> {
        self.priorities.first().copied()
    }

    /// Removes and returns the entry with the smallest priority. O(log n).
    pub fn extract_min(&mut self) -> Option<(N, P)> {
        if self.nodes.is_empty() {
            return None;
        }

        let last = self.nodes.len() - 1;
        self.nodes.swap(0, last);
        self.priorities.swap(0, last);

        let node = self.nodes.pop()?;
        let priority = self.priorities.pop()?;

        if !self.nodes.is_empty() {
            self.sift_down(0);
        }

        Some((node, priority))
    }

    /// Checks that no entry has a smaller priority than its parent
    pub fn is_valid_heap(&self) -> bool {
        (1..self.priorities.len()).all(|i| {
            let parent = (i - 1) >> 1;
            self.priorities[parent] <= self.priorities[i]
        })
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) >> 1;
            // Stop as soon as the parent is not strictly greater
            if !(self.priorities[parent] > self.priorities[index]) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let size = self.nodes.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < size && self.priorities[left] < self.priorities[smallest] {
                smallest = left;
            }
            if right < size && self.priorities[right] < self.priorities[smallest] {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.swap(index, smallest);
            index = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.nodes.swap(a, b);
        self.priorities.swap(a, b);
    }
}
