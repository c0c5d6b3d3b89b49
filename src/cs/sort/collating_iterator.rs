//! Lazy k-way merge over sorted iterators.

use std::cmp::Ordering;
use std::iter::{Fuse, FusedIterator};

/// Merges any number of iterators, each sorted by `cmp`, into one sorted
/// stream.
///
/// Every call to `next` compares the current head of each source and yields
/// the least one. Equal heads are resolved in favour of the source added
/// first, so the merge is stable across sources the same way
/// [`collate_by`](crate::cs::sort::collate::collate_by) is for two.
///
/// # Examples
///
/// ```
/// use collection_algos::cs::sort::collating_iterator::CollatingIterator;
///
/// let a = vec![1, 4, 7];
/// let b = vec![2, 5, 8];
/// let c = vec![3, 6, 9];
/// let merged: Vec<i32> = CollatingIterator::natural(vec![
///     a.into_iter(),
///     b.into_iter(),
///     c.into_iter(),
/// ])
/// .collect();
/// assert_eq!(merged, (1..=9).collect::<Vec<_>>());
/// ```
pub struct CollatingIterator<I: Iterator, F> {
    sources: Vec<Fuse<I>>,
    heads: Vec<Option<I::Item>>,
    cmp: F,
    last_source: Option<usize>,
}

impl<I, F> CollatingIterator<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    /// Creates a merge over `sources` ordered by `cmp`. Sources are not
    /// advanced until the first call to `next`.
    pub fn new<S>(sources: S, cmp: F) -> Self
    where
        S: IntoIterator<Item = I>,
    {
        let sources: Vec<Fuse<I>> = sources.into_iter().map(Iterator::fuse).collect();
        let heads = sources.iter().map(|_| None).collect();
        CollatingIterator {
            sources,
            heads,
            cmp,
            last_source: None,
        }
    }

    /// Index of the source that produced the most recently returned element.
    pub fn last_source(&self) -> Option<usize> {
        self.last_source
    }

    /// Number of sources being merged.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    fn fill_heads(&mut self) {
        for (source, head) in self.sources.iter_mut().zip(self.heads.iter_mut()) {
            if head.is_none() {
                *head = source.next();
            }
        }
    }
}

impl<I> CollatingIterator<I, fn(&I::Item, &I::Item) -> Ordering>
where
    I: Iterator,
    I::Item: Ord,
{
    /// Creates a merge over `sources` in natural order.
    pub fn natural<S>(sources: S) -> Self
    where
        S: IntoIterator<Item = I>,
    {
        Self::new(sources, <I::Item as Ord>::cmp)
    }
}

impl<I, F> Iterator for CollatingIterator<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.fill_heads();

        let mut least: Option<(usize, &I::Item)> = None;
        for (index, head) in self.heads.iter().enumerate() {
            let Some(value) = head else { continue };
            match least {
                Some((_, best)) if (self.cmp)(value, best) != Ordering::Less => {}
                _ => least = Some((index, value)),
            }
        }

        let (index, _) = least?;
        self.last_source = Some(index);
        self.heads[index].take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = self.heads.iter().filter(|head| head.is_some()).count();
        self.sources
            .iter()
            .map(Iterator::size_hint)
            .fold((buffered, Some(buffered)), |(lo, hi), (s_lo, s_hi)| {
                (
                    lo.saturating_add(s_lo),
                    hi.and_then(|hi| s_hi.and_then(|s_hi| hi.checked_add(s_hi))),
                )
            })
    }
}

impl<I, F> FusedIterator for CollatingIterator<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
}

/// Drains `sources` through a [`CollatingIterator`] into a `Vec`.
pub fn collate_all<I, S, F>(sources: S, cmp: F) -> Vec<I::Item>
where
    I: Iterator,
    S: IntoIterator<Item = I>,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let merged: Vec<I::Item> = CollatingIterator::new(sources, cmp).collect();
    log::trace!("collate_all: merged {} elements", merged.len());
    merged
}
