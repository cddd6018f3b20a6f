use crate::collection::each;
use crate::fold::fold;
use crate::mapping::Mapping;

/// Copies every entry of every source into `target`, in order.
///
/// Later sources overwrite earlier ones and `target`'s own keys. The
/// target is mutated in place and handed back, so merges can chain. A fold
/// over the source list drives the merge; each source is traversed once.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use underfold::extend;
///
/// let mut config = BTreeMap::from([("retries", 1)]);
/// let overrides = BTreeMap::from([("retries", 5), ("timeout", 30)]);
/// extend(&mut config, &[&overrides]);
/// assert_eq!(config, BTreeMap::from([("retries", 5), ("timeout", 30)]));
/// ```
pub fn extend<'a, M>(target: &'a mut M, sources: &[&M]) -> &'a mut M
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
{
    fold(sources, target, |target, source| {
        each(*source, |value, key, _| target.put(key.clone(), value.clone()));
    })
}

/// Fills `target`'s missing keys from the sources, in order.
///
/// Same mutate-and-return contract as [`extend`], but a key already present
/// on the accumulating target is never overwritten — so the *earliest*
/// source supplying an absent key wins.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use underfold::defaults;
///
/// let mut config = BTreeMap::from([("retries", 1)]);
/// let fallback = BTreeMap::from([("retries", 99), ("timeout", 30)]);
/// defaults(&mut config, &[&fallback]);
/// assert_eq!(config, BTreeMap::from([("retries", 1), ("timeout", 30)]));
/// ```
pub fn defaults<'a, M>(target: &'a mut M, sources: &[&M]) -> &'a mut M
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
{
    fold(sources, target, |target, source| {
        each(*source, |value, key, _| {
            if !target.has(key) {
                target.put(key.clone(), value.clone());
            }
        });
    })
}
