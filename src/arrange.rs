use std::cmp::Ordering;

use rand::RngExt;

use crate::collection::{Collection, each};

/// Sorts a collection's values by a caller-derived key, stably.
///
/// An insertion sort: each element goes in after every already-placed
/// element whose key it equals or exceeds, so ties keep their input order.
/// A key with no defined order against itself — `f64::NAN` is the canonical
/// case — sinks to the end.
///
/// # Examples
///
/// ```
/// use underfold::sort_by;
///
/// let people = [("bo", 41), ("ada", 36), ("cy", 29)];
/// let by_name = sort_by(&people, |person| person.0);
/// assert_eq!(by_name, [("ada", 36), ("bo", 41), ("cy", 29)]);
/// ```
pub fn sort_by<C, K>(collection: &C, mut key: impl FnMut(&C::Value) -> K) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    K: PartialOrd,
{
    let mut placed: Vec<(K, C::Value)> = Vec::new();
    each(collection, |value, _, _| {
        let candidate = key(value);
        // A key incomparable with itself has no position; start past the end.
        let mut index = if candidate.partial_cmp(&candidate).is_none() {
            placed.len()
        } else {
            0
        };
        while index < placed.len()
            && matches!(
                candidate.partial_cmp(&placed[index].0),
                Some(Ordering::Greater | Ordering::Equal)
            )
        {
            index += 1;
        }
        placed.insert(index, (candidate, value.clone()));
    });
    placed.into_iter().map(|(_, value)| value).collect()
}

/// Returns the input's elements in uniformly random order.
///
/// The input is never touched: a working copy gives up one uniformly
/// chosen element per step until none remain.
///
/// # Examples
///
/// ```
/// use underfold::shuffle;
///
/// let deck = [1, 2, 3, 4, 5];
/// let mut dealt = shuffle(&deck);
/// dealt.sort_unstable();
/// assert_eq!(dealt, deck);
/// ```
pub fn shuffle<T: Clone>(array: &[T]) -> Vec<T> {
    shuffle_with(array, &mut rand::rng())
}

/// [`shuffle`] driven by a caller-supplied random source.
pub fn shuffle_with<T, R>(array: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: RngExt + ?Sized,
{
    let mut remaining = array.to_vec();
    let mut shuffled = Vec::with_capacity(remaining.len());
    while !remaining.is_empty() {
        let index = rng.random_range(0..remaining.len());
        shuffled.push(remaining.remove(index));
    }
    shuffled
}


#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    proptest! {
        #[test]
        fn shuffle_is_a_permutation(values in propvec(any::<i32>(), ..=32), seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut actual = shuffle_with(&values, &mut rng);
            let mut expected = values.clone();
            actual.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn sort_by_identity_agrees_with_std_sort(values in propvec(any::<i16>(), ..=32)) {
            let mut expected = values.clone();
            expected.sort();
            prop_assert_eq!(sort_by(values.as_slice(), |n| *n), expected);
        }
    }
}
