//! An ordered symbol table backed by an unbalanced Binary Search Tree.
//!
//! Keys are kept in sorted order, which is what buys the ordered queries
//! ([`min`][Map::min], [`max`][Map::max], [`keys`][Map::keys]) on top of the
//! usual point operations. Nothing rebalances the tree, so every operation is
//! `O(height)`: `Θ(log n)` on random insertion orders but `O(n)` in the worst
//! case. See [`red_black`][crate::red_black] for the variant with a
//! guaranteed logarithmic height.
//!
//! # Examples
//!
//! ```
//! use structures::bst::Map;
//!
//! let mut map = Map::new();
//! map.put("D", 10)?;
//! map.put("A", 15)?;
//! map.put("F", 20)?;
//!
//! assert_eq!(map.get(&"A")?, Some(&15));
//! assert_eq!(map.min()?, &"A");
//! assert_eq!(map.keys()?, vec![&"A", &"D", &"F"]);
//! # Ok::<(), structures::Error>(())
//! ```

use std::cmp::Ordering;

use crate::compare::{three_way, Comparator};
use crate::error::Error;

/// A `Node` has a key that is used for searching/sorting, a value associated
/// with that key, and exclusive ownership of up to two children.
#[derive(Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Option<Box<Node<K, V>>>,
    right: Option<Box<Node<K, V>>>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }
}

/// An ordered map from keys to values, backed by an unbalanced BST.
///
/// Ordering comes from the key type's [`Ord`] implementation unless the map
/// was built with [`Map::with_comparator`], in which case the configured
/// comparator takes precedence.
#[derive(Clone)]
pub struct Map<K, V> {
    root: Option<Box<Node<K, V>>>,
    len: usize,
    comparator: Option<Comparator<K>>,
}

impl<K, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Map<K, V> {
    /// Generates a new, empty `Map` ordered by the keys' natural order.
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            comparator: None,
        }
    }

    /// Generates a new, empty `Map` ordered by the given comparator.
    ///
    /// The comparator must return exactly -1, 0 or 1; any other result fails
    /// the operation that invoked it with [`Error::InvalidComparator`].
    pub fn with_comparator(comparator: Comparator<K>) -> Self {
        Self {
            root: None,
            len: 0,
            comparator: Some(comparator),
        }
    }

    /// Returns the number of key-value pairs in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map holds no key-value pairs.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Puts a key-value pair into the map. If the key already exists, its
    /// value is overwritten in place and the length does not change.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::bst::Map;
    ///
    /// let mut map = Map::new();
    /// map.put(1, 2)?;
    /// map.put(1, 3)?;
    ///
    /// assert_eq!(map.get(&1)?, Some(&3));
    /// assert_eq!(map.len(), 1);
    /// # Ok::<(), structures::Error>(())
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Result<(), Error>
    where
        K: Ord,
    {
        if Self::put_node(&mut self.root, key, value, self.comparator)? {
            self.len += 1;
        }
        Ok(())
    }

    /// Gets the value stored for the given key. `Ok(None)` is the normal
    /// not-found outcome for a key that isn't present.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the map holds no pairs at all.
    pub fn get(&self, key: &K) -> Result<Option<&V>, Error>
    where
        K: Ord,
    {
        if self.root.is_none() {
            return Err(Error::EmptyCollection);
        }
        let mut link = &self.root;
        while let Some(node) = link {
            match three_way(key, &node.key, self.comparator)? {
                Ordering::Less => link = &node.left,
                Ordering::Greater => link = &node.right,
                Ordering::Equal => return Ok(Some(&node.value)),
            }
        }
        Ok(None)
    }

    /// Removes the pair stored for the given key and returns its value, or
    /// `Ok(None)` if the key isn't present. Uses Hibbard deletion: a node
    /// with two children is replaced by its in-order successor, which is
    /// unlinked from the right subtree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the map holds no pairs at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::bst::Map;
    ///
    /// let mut map = Map::new();
    /// map.put(1, 2)?;
    ///
    /// assert_eq!(map.remove(&1)?, Some(2));
    /// assert!(map.is_empty());
    /// # Ok::<(), structures::Error>(())
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<Option<V>, Error>
    where
        K: Ord,
    {
        if self.root.is_none() {
            return Err(Error::EmptyCollection);
        }
        let removed = Self::remove_node(&mut self.root, key, self.comparator)?;
        if removed.is_some() {
            self.len -= 1;
        }
        Ok(removed)
    }

    /// Returns the smallest key in the map.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the map holds no pairs.
    pub fn min(&self) -> Result<&K, Error> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyCollection)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.key)
    }

    /// Returns the largest key in the map.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the map holds no pairs.
    pub fn max(&self) -> Result<&K, Error> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyCollection)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.key)
    }

    /// Returns every key in ascending order via an in-order traversal.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the map holds no pairs.
    pub fn keys(&self) -> Result<Vec<&K>, Error> {
        if self.root.is_none() {
            return Err(Error::EmptyCollection);
        }
        let mut keys = Vec::with_capacity(self.len);
        Self::collect_keys(&self.root, &mut keys);
        Ok(keys)
    }

    /// Recursively puts the key-value pair into position, returning whether a
    /// new node was created. The descent happens on `&mut` links so a
    /// comparator failure propagates before any link is rewritten.
    fn put_node(
        link: &mut Option<Box<Node<K, V>>>,
        key: K,
        value: V,
        cmp: Option<Comparator<K>>,
    ) -> Result<bool, Error>
    where
        K: Ord,
    {
        match link {
            None => {
                *link = Some(Box::new(Node::new(key, value)));
                Ok(true)
            }
            Some(node) => match three_way(&key, &node.key, cmp)? {
                Ordering::Less => Self::put_node(&mut node.left, key, value, cmp),
                Ordering::Greater => Self::put_node(&mut node.right, key, value, cmp),
                Ordering::Equal => {
                    node.value = value;
                    Ok(false)
                }
            },
        }
    }

    fn remove_node(
        link: &mut Option<Box<Node<K, V>>>,
        key: &K,
        cmp: Option<Comparator<K>>,
    ) -> Result<Option<V>, Error>
    where
        K: Ord,
    {
        match link {
            None => Ok(None),
            Some(node) => match three_way(key, &node.key, cmp)? {
                Ordering::Less => Self::remove_node(&mut node.left, key, cmp),
                Ordering::Greater => Self::remove_node(&mut node.right, key, cmp),
                Ordering::Equal => {
                    let mut node = link.take().expect("an equal key was just found here");
                    match (node.left.take(), node.right.take()) {
                        (None, None) => {}
                        (Some(left), None) => *link = Some(left),
                        (None, Some(right)) => *link = Some(right),
                        (Some(left), Some(right)) => {
                            let mut right = Some(right);
                            let (key, value) = Self::take_min(&mut right)
                                .expect("a right child was just matched");
                            *link = Some(Box::new(Node {
                                key,
                                value,
                                left: Some(left),
                                right,
                            }));
                        }
                    }
                    Ok(Some(node.value))
                }
            },
        }
    }

    /// Unlinks the minimum node of the subtree and returns its pair. The
    /// minimum has no left child, so its right child takes its place.
    fn take_min(link: &mut Option<Box<Node<K, V>>>) -> Option<(K, V)> {
        match link {
            None => None,
            Some(node) if node.left.is_some() => Self::take_min(&mut node.left),
            Some(_) => {
                let node = link.take().expect("matched a node above");
                *link = node.right;
                Some((node.key, node.value))
            }
        }
    }

    fn collect_keys<'a>(link: &'a Option<Box<Node<K, V>>>, keys: &mut Vec<&'a K>) {
        if let Some(node) = link {
            Self::collect_keys(&node.left, keys);
            keys.push(&node.key);
            Self::collect_keys(&node.right, keys);
        }
    }
}
