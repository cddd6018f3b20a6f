use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A callable that caches one result per distinct argument value.
///
/// [`Once`](crate::Once) generalized over argument lists: the first call
/// with a given argument computes and stores the result, and every later
/// call with an equal argument returns a clone of the stored value. The
/// memo table is keyed by the argument itself and is never pruned — it
/// grows for as long as the decorator lives, which is the accepted
/// trade-off, not a leak.
///
/// # Examples
///
/// ```
/// use underfold::Memoize;
///
/// fn fact(n: u64) -> u64 {
///     if n <= 1 { 1 } else { n * fact(n - 1) }
/// }
///
/// let mut memo_fact = Memoize::new(fact);
/// assert_eq!(memo_fact.call(6), 720);
/// assert_eq!(memo_fact.call(6), 720); // served from the table
/// ```
pub struct Memoize<A, R, F> {
    func: F,
    cache: HashMap<A, R>,
}

impl<A, R, F> Memoize<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: FnMut(A) -> R,
{
    /// Wraps `func` with an empty memo table.
    pub fn new(func: F) -> Self {
        Memoize {
            func,
            cache: HashMap::new(),
        }
    }

    /// Returns the cached result for `args`, computing and storing it on
    /// the first sighting.
    pub fn call(&mut self, args: A) -> R {
        if let Some(hit) = self.cache.get(&args) {
            return hit.clone();
        }
        let result = (self.func)(args.clone());
        self.cache.insert(args, result.clone());
        result
    }
}

impl<A: Debug + Eq + Hash, R: Debug, F> Debug for Memoize<A, R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memoize")
            .field("cache", &self.cache)
            .finish()
    }
}
