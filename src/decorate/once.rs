use std::fmt::Debug;
use std::marker::PhantomData;

/// A callable that runs at most one time.
///
/// The first [`call`](Once::call) invokes the wrapped function and keeps
/// its result; every later call returns a clone of that first result, no
/// matter what arguments it is given.
///
/// # Examples
///
/// ```
/// use underfold::Once;
///
/// let mut boot = Once::new(|port: u16| format!("listening on {port}"));
///
/// assert_eq!(boot.call(8080), "listening on 8080");
/// assert_eq!(boot.call(9999), "listening on 8080");
/// ```
pub struct Once<A, R, F> {
    func: Option<F>,
    result: Option<R>,
    _marker: PhantomData<fn(A)>,
}

impl<A, R, F> Once<A, R, F>
where
    F: FnOnce(A) -> R,
    R: Clone,
{
    /// Wraps `func`.
    pub fn new(func: F) -> Self {
        Once {
            func: Some(func),
            result: None,
            _marker: PhantomData,
        }
    }

    /// Runs the wrapped function on the first call; afterwards returns a
    /// clone of the first result regardless of `args`.
    pub fn call(&mut self, args: A) -> R {
        if let Some(func) = self.func.take() {
            let result = func(args);
            self.result = Some(result.clone());
            return result;
        }
        match &self.result {
            Some(result) => result.clone(),
            // `func` is vacated only after `result` is recorded.
            None => unreachable!("a first call always records its result"),
        }
    }

    /// Whether the wrapped function has run.
    pub fn called(&self) -> bool {
        self.func.is_none()
    }
}

impl<A, R: Debug, F> Debug for Once<A, R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Once")
            .field("called", &self.func.is_none())
            .field("result", &self.result)
            .finish()
    }
}
