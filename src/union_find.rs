//! A disjoint-set forest (union-find) over the indices `0..n`.
//!
//! Uses weighted quick-union: `union` hangs the smaller component's root
//! under the larger one's, and `find` compresses the paths it walks by
//! pointing every visited index at its grandparent. Together these make a
//! sequence of operations cost nearly constant time per call.
//!
//! Components only ever merge; the partition never splits and the structure
//! never grows past the `n` it was created with.
//!
//! # Examples
//!
//! ```
//! use structures::union_find::UnionFind;
//!
//! let mut uf = UnionFind::new(10);
//! assert_eq!(uf.count(), 10);
//!
//! uf.union(1, 5)?;
//! uf.union(5, 7)?;
//!
//! assert!(uf.connected(1, 7)?);
//! assert_eq!(uf.count(), 8);
//! # Ok::<(), structures::Error>(())
//! ```

use crate::error::Error;

/// A partition of `{0, ..., n - 1}` into disjoint components.
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// `parent[i]` points towards `i`'s representative; roots point at
    /// themselves.
    parent: Vec<usize>,
    /// Component sizes, meaningful only at roots.
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Creates a partition of `n` singleton components.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Returns the number of indices in the partition (the `n` it was
    /// created with).
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the partition covers no indices at all.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Finds the representative (root) of the component containing `i`,
    /// halving the path as it walks so later finds on the same path are
    /// cheaper.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `i >= n`.
    pub fn find(&mut self, i: usize) -> Result<usize, Error> {
        self.validate(i)?;
        let mut i = i;
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        Ok(i)
    }

    /// Merges the components containing `a` and `b`. Merging two indices
    /// that already share a component is a no-op, so repeating a union is
    /// idempotent.
    ///
    /// The strictly larger component absorbs the smaller one; on a size tie
    /// `b`'s root absorbs `a`'s.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when either index is `>= n`.
    pub fn union(&mut self, a: usize, b: usize) -> Result<(), Error> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a == root_b {
            return Ok(());
        }

        if self.size[root_a] > self.size[root_b] {
            self.parent[root_b] = root_a;
            self.size[root_a] += self.size[root_b];
        } else {
            self.parent[root_a] = root_b;
            self.size[root_b] += self.size[root_a];
        }
        self.count -= 1;
        Ok(())
    }

    /// Returns whether `a` and `b` are in the same component.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when either index is `>= n`.
    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool, Error> {
        Ok(self.find(a)? == self.find(b)?)
    }

    fn validate(&self, i: usize) -> Result<(), Error> {
        if i >= self.parent.len() {
            return Err(Error::IndexOutOfRange {
                index: i,
                len: self.parent.len(),
            });
        }
        Ok(())
    }
}
