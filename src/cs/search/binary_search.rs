//! Binary search over a sorted view of a [`Sequence`], keyed by a projection
//! and ordered by a caller comparator.
//!
//! Results use a signed encoding: a non-negative value is the index of a
//! match, and a negative value `r` means "not found, insert at `-(r + 1)`".
//! [`decode`] turns that into the `Ok(index)` / `Err(insertion_point)` shape
//! used by [`slice::binary_search`].
//!
//! The range is never checked for sortedness. On unsorted input the result is
//! meaningless but the search still finishes in O(log n) probes.

use std::cmp::Ordering;

use crate::cs::sequence::Sequence;
use crate::error::{Error, Result};

/// Returns the lowest index in `seq` whose key equals `target`.
///
/// # Examples
///
/// ```
/// use collection_algos::cs::search::binary_search::binary_search_first;
///
/// let seq = vec![3, 4, 6, 6, 6, 7, 7, 8, 8, 9, 9, 9];
/// let found = binary_search_first(&seq, &6, |x| *x, |a, b| a.cmp(b)).unwrap();
/// assert_eq!(found, 2);
///
/// let seq = vec![0, 1, 2, 4, 7, 9, 12, 15, 17, 19, 25];
/// let missing = binary_search_first(&seq, &8, |x| *x, |a, b| a.cmp(b)).unwrap();
/// assert_eq!(missing, -6); // would be inserted at index 5
/// ```
pub fn binary_search_first<S, K, FK, FC>(seq: &S, target: &K, key_of: FK, cmp: FC) -> Result<isize>
where
    S: Sequence + ?Sized,
    FK: FnMut(&S::Item) -> K,
    FC: FnMut(&K, &K) -> Ordering,
{
    binary_search_first_in(seq, 0, seq.len(), target, key_of, cmp)
}

/// Returns the highest index in `seq` whose key equals `target`.
///
/// # Examples
///
/// ```
/// use collection_algos::cs::search::binary_search::binary_search_last;
///
/// let seq = vec![3, 4, 6, 6, 6, 7, 7, 8, 8, 9, 9, 9];
/// let found = binary_search_last(&seq, &6, |x| *x, |a, b| a.cmp(b)).unwrap();
/// assert_eq!(found, 4);
/// ```
pub fn binary_search_last<S, K, FK, FC>(seq: &S, target: &K, key_of: FK, cmp: FC) -> Result<isize>
where
    S: Sequence + ?Sized,
    FK: FnMut(&S::Item) -> K,
    FC: FnMut(&K, &K) -> Ordering,
{
    binary_search_last_in(seq, 0, seq.len(), target, key_of, cmp)
}

/// Searches `seq[low..high]` for the first element whose key equals `target`.
///
/// # Returns
/// * `Ok(i)` with `i >= 0` - lowest matching index
/// * `Ok(r)` with `r < 0` - no match; `-(r + 1)` is the lowest index where
///   `target` can be inserted without breaking the order
/// * `Err(Error::InvalidArgument)` - `low > high`
/// * `Err(Error::IndexOutOfRange)` - a bound lies past `seq.len()` or past
///   `isize::MAX`
///
/// # Complexity
/// * Time: O(log(high - low)) key extractions and comparisons
/// * Space: O(1)
pub fn binary_search_first_in<S, K, FK, FC>(
    seq: &S,
    low: usize,
    high: usize,
    target: &K,
    mut key_of: FK,
    mut cmp: FC,
) -> Result<isize>
where
    S: Sequence + ?Sized,
    FK: FnMut(&S::Item) -> K,
    FC: FnMut(&K, &K) -> Ordering,
{
    check_range(seq.len(), low, high)?;
    log::trace!("binary_search_first: range {low}..{high}");

    let mut order_at = |i: usize| -> Result<Ordering> {
        let item = seq
            .get(i)
            .ok_or_else(|| Error::index_out_of_range(i, seq.len()))?;
        Ok(cmp(&key_of(item), target))
    };

    // Lower bound: first index whose key is not less than the target.
    let (mut lo, mut hi) = (low, high);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if order_at(mid)? == Ordering::Less {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    if lo < high && order_at(lo)? == Ordering::Equal {
        as_signed(lo, seq.len())
    } else {
        not_found(lo, seq.len())
    }
}

/// Searches `seq[low..high]` for the last element whose key equals `target`.
///
/// Error and miss semantics match [`binary_search_first_in`]; on a miss both
/// functions report the same insertion point.
pub fn binary_search_last_in<S, K, FK, FC>(
    seq: &S,
    low: usize,
    high: usize,
    target: &K,
    mut key_of: FK,
    mut cmp: FC,
) -> Result<isize>
where
    S: Sequence + ?Sized,
    FK: FnMut(&S::Item) -> K,
    FC: FnMut(&K, &K) -> Ordering,
{
    check_range(seq.len(), low, high)?;
    log::trace!("binary_search_last: range {low}..{high}");

    let mut order_at = |i: usize| -> Result<Ordering> {
        let item = seq
            .get(i)
            .ok_or_else(|| Error::index_out_of_range(i, seq.len()))?;
        Ok(cmp(&key_of(item), target))
    };

    // Upper bound: first index whose key is greater than the target.
    let (mut lo, mut hi) = (low, high);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if order_at(mid)? == Ordering::Greater {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    if lo > low && order_at(lo - 1)? == Ordering::Equal {
        return as_signed(lo - 1, seq.len());
    }

    // Nothing equal sits below the upper bound, so on sorted input the upper
    // and lower bounds coincide here.
    not_found(lo, seq.len())
}

/// Converts a signed search result into `Ok(index)` for a match or
/// `Err(insertion_point)` for a miss.
///
/// # Examples
///
/// ```
/// use collection_algos::cs::search::binary_search::decode;
///
/// assert_eq!(decode(3), Ok(3));
/// assert_eq!(decode(-1), Err(0));
/// assert_eq!(decode(-6), Err(5));
/// ```
pub fn decode(code: isize) -> std::result::Result<usize, usize> {
    if code >= 0 {
        Ok(code.unsigned_abs())
    } else {
        Err((code + 1).unsigned_abs())
    }
}

fn check_range(len: usize, low: usize, high: usize) -> Result<()> {
    if low > high {
        return Err(Error::invalid_argument(format!(
            "low bound {low} is greater than high bound {high}"
        )));
    }
    // Every index and insertion point must be representable as `isize`.
    if high > len || isize::try_from(high).is_err() {
        return Err(Error::index_out_of_range(high, len));
    }
    Ok(())
}

fn as_signed(index: usize, len: usize) -> Result<isize> {
    isize::try_from(index).map_err(|_| Error::index_out_of_range(index, len))
}

fn not_found(insertion_point: usize, len: usize) -> Result<isize> {
    Ok(-as_signed(insertion_point, len)? - 1)
}
