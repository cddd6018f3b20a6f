use crate::collection::Collection;

/// Folds a collection left-to-right into `seed`.
///
/// `f` receives the accumulator by mutable reference and the current
/// element, once per entry in traversal order. The final accumulator is
/// returned.
///
/// # Examples
///
/// ```
/// use underfold::fold;
///
/// let sum = fold(&[1, 2, 3], 0, |total, n| *total += n);
/// assert_eq!(sum, 6);
/// ```
///
/// The accumulator can be any value, including a borrowed one:
///
/// ```
/// use underfold::fold;
///
/// let longest = fold(&["fir", "sycamore", "oak"], "", |longest, tree| {
///     if tree.len() > longest.len() {
///         *longest = *tree;
///     }
/// });
/// assert_eq!(longest, "sycamore");
/// ```
pub fn fold<C, A>(collection: &C, seed: A, mut f: impl FnMut(&mut A, &C::Value)) -> A
where
    C: Collection + ?Sized,
{
    let mut accum = seed;
    collection.traverse(|value, _, _| f(&mut accum, value));
    accum
}

/// Folds a collection left-to-right with no seed.
///
/// The first visited element becomes the initial accumulator, untouched by
/// `f`; every later element is combined with `f(accumulator, element)`. An
/// empty collection yields `None` — an edge case of the contract, not an
/// error.
///
/// # Examples
///
/// ```
/// use underfold::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3], |total, n| total + n), Some(6));
///
/// // A single element is returned as-is: `f` never runs.
/// assert_eq!(reduce(&[5], |total, n| total + n * n), Some(5));
///
/// assert_eq!(reduce(&[] as &[i32], |total, n| total + n), None);
/// ```
pub fn reduce<C>(collection: &C, mut f: impl FnMut(C::Value, &C::Value) -> C::Value) -> Option<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
{
    let mut accum = None;
    collection.traverse(|value, _, _| {
        accum = Some(match accum.take() {
            Some(previous) => f(previous, value),
            None => value.clone(),
        });
    });
    accum
}
