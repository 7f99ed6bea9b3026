//! Array-backed binary heaps, usable directly as priority queues.
//!
//! [`MaxHeap`] keeps the largest item at the root of an implicit binary tree
//! stored in a `Vec` (the children of index `k` sit at `2k + 1` and
//! `2k + 2`). Inserting swims the new item up, popping moves the last item
//! to the root and sinks it, so both are O(log n) while peeking is O(1).
//!
//! [`MinHeap`] is the same structure with the comparisons turned around,
//! implemented by storing [`Reverse`]-wrapped items in a `MaxHeap` rather
//! than duplicating the swim/sink code.
//!
//! # Examples
//!
//! ```
//! use structures::heap::MinHeap;
//!
//! let mut queue = MinHeap::new();
//! queue.insert(3);
//! queue.insert(1);
//! queue.insert(2);
//!
//! assert_eq!(queue.peek()?, &1);
//! assert_eq!(queue.pop()?, 1);
//! assert_eq!(queue.pop()?, 2);
//! # Ok::<(), structures::Error>(())
//! ```

use std::cmp::Reverse;

use crate::error::Error;

/// A max-oriented binary heap: [`peek`][MaxHeap::peek] and
/// [`pop`][MaxHeap::pop] always see the largest item.
pub struct MaxHeap<T> {
    tree: Vec<T>,
}

impl<T: Ord> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> MaxHeap<T> {
    /// Generates a new, empty `MaxHeap`.
    pub fn new() -> Self {
        Self { tree: Vec::new() }
    }

    /// Returns the number of items on the heap.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the heap holds no items.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Inserts an item in O(log n).
    pub fn insert(&mut self, value: T) {
        self.tree.push(value);
        self.swim(self.tree.len() - 1);
    }

    /// Returns the largest item without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the heap holds no items.
    pub fn peek(&self) -> Result<&T, Error> {
        self.tree.first().ok_or(Error::EmptyCollection)
    }

    /// Removes and returns the largest item in O(log n).
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the heap holds no items.
    pub fn pop(&mut self) -> Result<T, Error> {
        if self.tree.is_empty() {
            return Err(Error::EmptyCollection);
        }
        let last = self.tree.len() - 1;
        self.tree.swap(0, last);
        let value = self.tree.pop().expect("checked non-empty above");
        self.sink(0);
        Ok(value)
    }

    /// The items in heap order: the root first, every parent before its
    /// children, nothing more specific.
    pub fn as_slice(&self) -> &[T] {
        &self.tree
    }

    /// Swims the item at `k` up until its parent is no smaller.
    fn swim(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if self.tree[parent] >= self.tree[k] {
                break;
            }
            self.tree.swap(parent, k);
            k = parent;
        }
    }

    /// Sinks the item at `k` down, always swapping with the larger child.
    fn sink(&mut self, mut k: usize) {
        let n = self.tree.len();
        loop {
            let mut child = 2 * k + 1;
            if child >= n {
                break;
            }
            if child + 1 < n && self.tree[child] < self.tree[child + 1] {
                child += 1;
            }
            if self.tree[k] >= self.tree[child] {
                break;
            }
            self.tree.swap(k, child);
            k = child;
        }
    }
}

/// A min-oriented binary heap: [`peek`][MinHeap::peek] and
/// [`pop`][MinHeap::pop] always see the smallest item.
pub struct MinHeap<T> {
    heap: MaxHeap<Reverse<T>>,
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> MinHeap<T> {
    /// Generates a new, empty `MinHeap`.
    pub fn new() -> Self {
        Self {
            heap: MaxHeap::new(),
        }
    }

    /// Returns the number of items on the heap.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the heap holds no items.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Inserts an item in O(log n).
    pub fn insert(&mut self, value: T) {
        self.heap.insert(Reverse(value));
    }

    /// Returns the smallest item without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the heap holds no items.
    pub fn peek(&self) -> Result<&T, Error> {
        self.heap.peek().map(|reversed| &reversed.0)
    }

    /// Removes and returns the smallest item in O(log n).
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the heap holds no items.
    pub fn pop(&mut self) -> Result<T, Error> {
        self.heap.pop().map(|reversed| reversed.0)
    }

    /// The items in heap order; see [`MaxHeap::as_slice`].
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.heap.as_slice().iter().map(|reversed| &reversed.0)
    }
}
