//! Two-way merge of already sorted sequences.

use std::cmp::Ordering;

use crate::cs::sequence::Sequence;
use crate::error::{Error, Result};

/// What [`collate_by`] does with elements that compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Duplicates {
    /// Every input element appears in the output.
    #[default]
    Keep,
    /// Each run of equal elements collapses to its first element.
    Drop,
}

/// Merges two sequences sorted by natural order.
///
/// # Examples
///
/// ```
/// use collection_algos::cs::sort::collate::{collate, Duplicates};
///
/// let a = vec![1, 3, 3, 5];
/// let b = vec![2, 3, 6];
/// assert_eq!(
///     collate(Some(&a), Some(&b), Duplicates::Keep).unwrap(),
///     vec![1, 2, 3, 3, 3, 5, 6]
/// );
/// assert_eq!(
///     collate(Some(&a), Some(&b), Duplicates::Drop).unwrap(),
///     vec![1, 2, 3, 5, 6]
/// );
/// ```
pub fn collate<A, B, T>(a: Option<&A>, b: Option<&B>, duplicates: Duplicates) -> Result<Vec<T>>
where
    A: Sequence<Item = T> + ?Sized,
    B: Sequence<Item = T> + ?Sized,
    T: Ord + Clone,
{
    collate_by(a, b, T::cmp, duplicates)
}

/// Merges two sequences that are each sorted by `cmp` into one sorted `Vec`.
///
/// The merge is stable and left-biased: when an element of `a` and an element
/// of `b` compare equal, the one from `a` comes first. With
/// [`Duplicates::Drop`] an element is skipped when it compares equal to the
/// last element emitted, across the whole merged stream.
///
/// Sortedness of the inputs is not checked.
///
/// # Returns
/// * `Ok(merged)` - `a.len() + b.len()` elements with [`Duplicates::Keep`]
/// * `Err(Error::InvalidArgument)` - `a` or `b` is `None`
///
/// # Complexity
/// * Time: O(|a| + |b|) comparisons
/// * Space: O(|a| + |b|) for the output
pub fn collate_by<A, B, T, F>(
    a: Option<&A>,
    b: Option<&B>,
    mut cmp: F,
    duplicates: Duplicates,
) -> Result<Vec<T>>
where
    A: Sequence<Item = T> + ?Sized,
    B: Sequence<Item = T> + ?Sized,
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let a = a.ok_or_else(|| Error::invalid_argument("first sequence is missing"))?;
    let b = b.ok_or_else(|| Error::invalid_argument("second sequence is missing"))?;
    log::trace!(
        "collate: merging {} + {} elements ({:?} duplicates)",
        a.len(),
        b.len(),
        duplicates
    );

    let mut merged: Vec<T> = Vec::with_capacity(a.len() + b.len());
    let mut i = 0;
    let mut j = 0;

    loop {
        let next = match (a.get(i), b.get(j)) {
            (Some(x), Some(y)) => {
                if cmp(y, x) == Ordering::Less {
                    j += 1;
                    y
                } else {
                    i += 1;
                    x
                }
            }
            (Some(x), None) => {
                i += 1;
                x
            }
            (None, Some(y)) => {
                j += 1;
                y
            }
            (None, None) => break,
        };

        if duplicates == Duplicates::Drop {
            if let Some(last) = merged.last() {
                if cmp(last, next) == Ordering::Equal {
                    continue;
                }
            }
        }
        merged.push(next.clone());
    }

    Ok(merged)
}
