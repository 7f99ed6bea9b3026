//! Pluggable key ordering for the ordered maps.
//!
//! Both map variants accept an optional three-way comparator so callers can
//! impose an ordering other than the key type's natural one. The comparator
//! contract is strict: it must return exactly -1, 0 or 1, and anything else
//! fails the calling operation with [`Error::InvalidComparator`] before the
//! tree is touched.

use std::cmp::Ordering;

use crate::error::Error;

/// A three-way comparator over keys: -1 when `a < b`, 0 when `a == b`,
/// 1 when `a > b`.
pub type Comparator<K> = fn(&K, &K) -> i32;

/// Compares `a` against `b`, through `cmp` when one is configured and the
/// natural order otherwise.
pub(crate) fn three_way<K>(a: &K, b: &K, cmp: Option<Comparator<K>>) -> Result<Ordering, Error>
where
    K: Ord,
{
    match cmp {
        Some(cmp) => match cmp(a, b) {
            -1 => Ok(Ordering::Less),
            0 => Ok(Ordering::Equal),
            1 => Ok(Ordering::Greater),
            other => Err(Error::InvalidComparator(other)),
        },
        None => Ok(a.cmp(b)),
    }
}
