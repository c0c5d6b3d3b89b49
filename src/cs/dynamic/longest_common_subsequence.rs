//! Longest common subsequence over any pair of [`Sequence`]s.

use ndarray::Array2;

use crate::cs::sequence::{self, Sequence};
use crate::error::{Error, Result};

/// Returns one longest common subsequence of `a` and `b` under `==`.
///
/// Either input being `None` is an [`Error::InvalidArgument`].
///
/// # Examples
///
/// ```
/// use collection_algos::cs::dynamic::longest_common_subsequence::longest_common_subsequence;
///
/// let a = vec![1, 2, 3, 4, 1];
/// let b = vec![3, 4, 1, 2, 1, 3];
/// let lcs = longest_common_subsequence(Some(&a), Some(&b)).unwrap();
/// assert_eq!(lcs.len(), 3);
/// ```
pub fn longest_common_subsequence<A, B, T>(a: Option<&A>, b: Option<&B>) -> Result<Vec<T>>
where
    A: Sequence<Item = T> + ?Sized,
    B: Sequence<Item = T> + ?Sized,
    T: PartialEq + Clone,
{
    longest_common_subsequence_by(a, b, |x, y| x == y)
}

/// Returns one longest common subsequence of `a` and `b`, treating two
/// elements as equal when `eq` says so.
///
/// The DP table `L[i][j]` holds the LCS length of `a[..i]` and `b[..j]`. One
/// subsequence is rebuilt by walking back from `L[|a|][|b|]`; when moving up
/// and moving left keep the same length, the walk moves up (drops from `a`).
/// Elements in the result are clones of the matching elements of `a`.
///
/// Time and space are O(|a|·|b|).
///
/// # Examples
///
/// ```
/// use collection_algos::cs::dynamic::longest_common_subsequence::longest_common_subsequence_by;
///
/// let a = ["Apple", "banana", "Cherry"];
/// let b = ["apple", "CHERRY"];
/// let lcs = longest_common_subsequence_by(Some(&a), Some(&b), |x, y| {
///     x.eq_ignore_ascii_case(y)
/// })
/// .unwrap();
/// assert_eq!(lcs, vec!["Apple", "Cherry"]);
/// ```
pub fn longest_common_subsequence_by<A, B, T, F>(
    a: Option<&A>,
    b: Option<&B>,
    mut eq: F,
) -> Result<Vec<T>>
where
    A: Sequence<Item = T> + ?Sized,
    B: Sequence<Item = T> + ?Sized,
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let (a, b) = require_both(a, b)?;
    let a_items: Vec<&T> = sequence::iter(a).collect();
    let b_items: Vec<&T> = sequence::iter(b).collect();
    let m = a_items.len();
    let n = b_items.len();

    if m == 0 || n == 0 {
        return Ok(Vec::new());
    }

    log::trace!("lcs: building {}x{} table", m + 1, n + 1);

    // Build DP table of lengths
    let mut dp = Array2::<usize>::zeros((m + 1, n + 1));

    for i in 1..=m {
        for j in 1..=n {
            if eq(a_items[i - 1], b_items[j - 1]) {
                dp[[i, j]] = dp[[i - 1, j - 1]] + 1;
            } else {
                dp[[i, j]] = dp[[i - 1, j]].max(dp[[i, j - 1]]);
            }
        }
    }

    let mut i = m;
    let mut j = n;
    let mut subsequence = Vec::with_capacity(dp[[m, n]]);

    while i > 0 && j > 0 {
        if eq(a_items[i - 1], b_items[j - 1]) {
            subsequence.push(a_items[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if dp[[i - 1, j]] >= dp[[i, j - 1]] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    // Collected back to front.
    subsequence.reverse();
    Ok(subsequence)
}

/// Character form of [`longest_common_subsequence`].
///
/// Compares Unicode scalar values, so multi-byte characters are never split.
///
/// # Examples
///
/// ```
/// use collection_algos::cs::dynamic::longest_common_subsequence::lcs_string;
///
/// assert_eq!(lcs_string(Some("BANANA"), Some("ANANAS")).unwrap(), "ANANA");
/// assert_eq!(lcs_string(Some("BANANA"), Some("ZORRO")).unwrap(), "");
/// assert!(lcs_string(None, Some("ZORRO")).is_err());
/// ```
pub fn lcs_string(a: Option<&str>, b: Option<&str>) -> Result<String> {
    let (a, b) = require_both(a, b)?;
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let chars = longest_common_subsequence(Some(&a_chars), Some(&b_chars))?;
    Ok(chars.into_iter().collect())
}

/// Returns the length of the longest common subsequence of `a` and `b`.
///
/// # Examples
///
/// ```
/// use collection_algos::cs::dynamic::longest_common_subsequence::lcs_length;
///
/// let s1: Vec<char> = "ABCDGH".chars().collect();
/// let s2: Vec<char> = "AEDFHR".chars().collect();
/// assert_eq!(lcs_length(Some(&s1), Some(&s2)).unwrap(), 3); // "ADH"
/// ```
pub fn lcs_length<A, B, T>(a: Option<&A>, b: Option<&B>) -> Result<usize>
where
    A: Sequence<Item = T> + ?Sized,
    B: Sequence<Item = T> + ?Sized,
    T: PartialEq,
{
    lcs_length_by(a, b, |x, y| x == y)
}

/// Length-only form of [`longest_common_subsequence_by`].
///
/// Keeps two rows of the table, so space is O(|b|).
pub fn lcs_length_by<A, B, T, F>(a: Option<&A>, b: Option<&B>, mut eq: F) -> Result<usize>
where
    A: Sequence<Item = T> + ?Sized,
    B: Sequence<Item = T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let (a, b) = require_both(a, b)?;
    let b_items: Vec<&T> = sequence::iter(b).collect();
    let n = b_items.len();

    let mut prev_row = vec![0usize; n + 1];
    let mut curr_row = vec![0usize; n + 1];

    for x in sequence::iter(a) {
        for (j, &y) in b_items.iter().enumerate() {
            curr_row[j + 1] = if eq(x, y) {
                prev_row[j] + 1
            } else {
                prev_row[j + 1].max(curr_row[j])
            };
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    Ok(prev_row[n])
}

fn require_both<'a, A: ?Sized, B: ?Sized>(
    a: Option<&'a A>,
    b: Option<&'a B>,
) -> Result<(&'a A, &'a B)> {
    match (a, b) {
        (Some(a), Some(b)) => Ok((a, b)),
        (None, _) => Err(Error::invalid_argument("first sequence is missing")),
        (_, None) => Err(Error::invalid_argument("second sequence is missing")),
    }
}
