use std::collections::HashSet;
use std::hash::Hash;

use crate::collection::{Collection, each};
use crate::mapping::Mapping;

/// Returns `f(value, key, collection)` for each entry, in traversal order.
///
/// The result always has the same cardinality as the input.
///
/// # Examples
///
/// ```
/// use underfold::map;
///
/// let labeled = map(&["low", "high"], |level, index, _| format!("{index}:{level}"));
/// assert_eq!(labeled, ["0:low", "1:high"]);
/// ```
pub fn map<C, R>(collection: &C, mut f: impl FnMut(&C::Value, &C::Key, &C) -> R) -> Vec<R>
where
    C: Collection + ?Sized,
{
    let mut mapped = Vec::new();
    each(collection, |value, key, collection| {
        mapped.push(f(value, key, collection));
    });
    mapped
}

/// Extracts the value under `key` from each row.
///
/// [`map`] specialized to property extraction; rows missing the key yield
/// `None`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use underfold::pluck;
///
/// let people = [
///     BTreeMap::from([("name", "moe"), ("town", "ada")]),
///     BTreeMap::from([("name", "curly")]),
/// ];
/// assert_eq!(pluck(&people, &"town"), [Some("ada"), None]);
/// ```
pub fn pluck<M>(rows: &[M], key: &M::Key) -> Vec<Option<M::Value>>
where
    M: Mapping,
    M::Value: Clone,
{
    map(rows, |row, _, _| row.get(key).cloned())
}

/// Calls `method(element, &args)` on each element and collects the results.
///
/// One closure covers both halves of the source contract — applying a free
/// function to the element and calling a method on it — since Rust resolves
/// methods statically.
///
/// # Examples
///
/// ```
/// use underfold::invoke;
///
/// let shouted = invoke(&["ready", "go"], |word, suffix| format!("{word}{suffix}"), &"!");
/// assert_eq!(shouted, ["ready!", "go!"]);
/// ```
pub fn invoke<C, A, R>(collection: &C, mut method: impl FnMut(&C::Value, &A) -> R, args: &A) -> Vec<R>
where
    C: Collection + ?Sized,
{
    map(collection, |value, _, _| method(value, args))
}

/// Keeps the elements for which `test` returns `true`.
///
/// # Examples
///
/// ```
/// use underfold::filter;
///
/// assert_eq!(filter(&[1, 2, 3, 4], |n| n % 2 == 0), [2, 4]);
/// ```
pub fn filter<C>(collection: &C, mut test: impl FnMut(&C::Value) -> bool) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
{
    let mut kept = Vec::new();
    each(collection, |value, _, _| {
        if test(value) {
            kept.push(value.clone());
        }
    });
    kept
}

/// Drops the elements for which `test` returns `true`.
///
/// [`filter`] with the predicate negated.
///
/// # Examples
///
/// ```
/// use underfold::reject;
///
/// assert_eq!(reject(&[1, 2, 3, 4], |n| n % 2 == 0), [1, 3]);
/// ```
pub fn reject<C>(collection: &C, mut test: impl FnMut(&C::Value) -> bool) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
{
    filter(collection, |value| !test(value))
}

/// Deduplicates `array`, comparing elements by `key`.
///
/// Returns the *keys*, not the original elements — that is the contract,
/// in both branches. With `is_sorted` set, each key is compared only to its
/// immediate predecessor, which is O(n) but correct only if the input is
/// already sorted by `key`. Otherwise seen keys are tracked in a hash set.
///
/// # Examples
///
/// ```
/// use underfold::uniq_by;
///
/// let initials = uniq_by(&["ada", "alan", "grace"], false, |name| name.as_bytes()[0]);
/// assert_eq!(initials, [b'a', b'g']);
/// ```
pub fn uniq_by<T, K>(array: &[T], is_sorted: bool, mut key: impl FnMut(&T) -> K) -> Vec<K>
where
    K: Clone + Eq + Hash,
{
    let mut kept = Vec::new();
    if is_sorted {
        let mut previous: Option<K> = None;
        each(array, |value, _, _| {
            let candidate = key(value);
            if previous.as_ref() != Some(&candidate) {
                kept.push(candidate.clone());
                previous = Some(candidate);
            }
        });
    } else {
        let mut seen = HashSet::new();
        each(array, |value, _, _| {
            let candidate = key(value);
            if seen.insert(candidate.clone()) {
                kept.push(candidate);
            }
        });
    }
    kept
}

/// Deduplicates `array` by the elements themselves.
///
/// # Examples
///
/// ```
/// use underfold::uniq;
///
/// assert_eq!(uniq(&[1, 1, 2, 2, 3], true), [1, 2, 3]);
/// assert_eq!(uniq(&[3, 1, 3, 2, 1], false), [3, 1, 2]);
/// ```
pub fn uniq<T>(array: &[T], is_sorted: bool) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    uniq_by(array, is_sorted, |value| value.clone())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn map_over_a_mapping_follows_key_order() {
        let ages = BTreeMap::from([("rin", 9), ("aya", 7)]);
        let lines = map(&ages, |age, name, _| format!("{name} is {age}"));
        assert_eq!(lines, ["aya is 7", "rin is 9"]);
    }

    #[test]
    fn pluck_preserves_row_order() {
        let rows = [
            BTreeMap::from([("n", 2)]),
            BTreeMap::from([("n", 1)]),
            BTreeMap::new(),
        ];
        assert_eq!(pluck(&rows, &"n"), [Some(2), Some(1), None]);
    }

    #[test]
    fn filter_and_reject_partition_the_input() {
        let values = [1, 2, 3, 4, 5];
        let even = filter(values.as_slice(), |n| n % 2 == 0);
        let odd = reject(values.as_slice(), |n| n % 2 == 0);
        assert_eq!(even, [2, 4]);
        assert_eq!(odd, [1, 3, 5]);
    }

    #[test]
    fn sorted_uniq_only_compares_neighbours() {
        // Unsorted input: the sorted branch happily repeats a key it has
        // seen before, as documented.
        assert_eq!(uniq(&[1, 2, 2, 1], true), [1, 2, 1]);
    }

    #[test]
    fn uniq_by_returns_keys_not_elements() {
        let lengths = uniq_by(&["on", "to", "off", "tin"], false, |word| word.len());
        assert_eq!(lengths, [2, 3]);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn map_preserves_cardinality_and_order(values in propvec(any::<i32>(), ..=32)) {
            let mapped = map(values.as_slice(), |value, index, _| (*index, value.wrapping_mul(3)));
            prop_assert_eq!(mapped.len(), values.len());
            for (position, (index, tripled)) in mapped.iter().enumerate() {
                prop_assert_eq!(*index, position);
                prop_assert_eq!(*tripled, values[position].wrapping_mul(3));
            }
        }

        #[test]
        fn filter_and_reject_are_complements(values in propvec(any::<i8>(), ..=32)) {
            let kept = filter(values.as_slice(), |n| *n >= 0);
            let dropped = reject(values.as_slice(), |n| *n >= 0);
            prop_assert_eq!(kept.len() + dropped.len(), values.len());
            prop_assert!(kept.iter().all(|n| *n >= 0));
            prop_assert!(dropped.iter().all(|n| *n < 0));
        }
    }
}
