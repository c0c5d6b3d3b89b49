//! Merging of sorted sequences.
//!
//! - [`collate()`] / [`collate_by`]: eager two-way merge into a `Vec`
//! - [`CollatingIterator`]: lazy k-way merge over iterators

pub mod collate;
pub mod collating_iterator;

pub use collate::{collate, collate_by, Duplicates};
pub use collating_iterator::{collate_all, CollatingIterator};
