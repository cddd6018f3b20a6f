use crate::collection::each;
use crate::fold::fold;
use crate::query::{contains, every};
use crate::transform::reject;

/// Pairs up the columns of several same-typed arrays.
///
/// The result is as long as the longest input; a row holds one entry per
/// input array, `None` where that array has run out.
///
/// # Examples
///
/// ```
/// use underfold::zip;
///
/// let letters = ["a", "b", "c", "d"];
/// let digits = ["1", "2", "3"];
/// assert_eq!(
///     zip(&[&letters[..], &digits[..]]),
///     [
///         [Some("a"), Some("1")],
///         [Some("b"), Some("2")],
///         [Some("c"), Some("3")],
///         [Some("d"), None],
///     ]
/// );
/// ```
pub fn zip<T: Clone>(arrays: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = fold(arrays, 0, |longest, array| {
        *longest = (*longest).max(array.len());
    });
    (0..longest)
        .map(|row| arrays.iter().map(|array| array.get(row).cloned()).collect())
        .collect()
}

/// A sequence whose elements are either leaves or nested sequences.
///
/// The explicit sum type standing in for "arbitrarily nested array": a
/// node is a [`Value`](Nested::Value) leaf or a [`List`](Nested::List) of
/// further nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    /// A leaf.
    Value(T),
    /// A nested level.
    List(Vec<Nested<T>>),
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Value(value)
    }
}

/// Flattens arbitrarily nested sequences into one flat `Vec` of leaves.
///
/// Depth-first, left to right.
///
/// # Examples
///
/// ```
/// use underfold::{Nested::{List, Value}, flatten};
///
/// let nested = [
///     Value(1),
///     List(vec![Value(2), List(vec![Value(3), List(vec![Value(4)])]), Value(5)]),
/// ];
/// assert_eq!(flatten(&nested), [1, 2, 3, 4, 5]);
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    let mut flat = Vec::new();
    flatten_into(nested, &mut flat);
    flat
}

/// [`flatten`] with a caller-supplied accumulator.
///
/// Leaves are appended to `out` after whatever it already holds.
pub fn flatten_into<T: Clone>(nested: &[Nested<T>], out: &mut Vec<T>) {
    each(nested, |node, _, _| match node {
        Nested::Value(value) => out.push(value.clone()),
        Nested::List(inner) => flatten_into(inner, out),
    });
}

/// Elements of `first` that every other array also contains.
///
/// Deduplicated by `==`, in order of first occurrence in `first`.
///
/// # Examples
///
/// ```
/// use underfold::intersection;
///
/// let shared = intersection(&[1, 2, 3], &[&[2, 3, 4], &[3, 4, 5]]);
/// assert_eq!(shared, [3]);
/// ```
pub fn intersection<T>(first: &[T], others: &[&[T]]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    let mut shared: Vec<T> = Vec::new();
    each(first, |value, _, _| {
        let duplicate = contains(shared.as_slice(), value);
        if !duplicate && every(others, |other| contains(*other, value)) {
            shared.push(value.clone());
        }
    });
    shared
}

/// Elements of `array` present in none of the other arrays.
///
/// # Examples
///
/// ```
/// use underfold::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4], &[&[2, 4]]), [1, 3]);
/// ```
pub fn difference<T>(array: &[T], others: &[&[T]]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    let mut union: Vec<T> = Vec::new();
    each(others, |other, _, _| {
        each(*other, |value, _, _| union.push(value.clone()));
    });
    reject(array, |value| contains(union.as_slice(), value))
}
