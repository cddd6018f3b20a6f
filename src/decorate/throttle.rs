use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

/// Rate-limits a callable to at most one execution per time window.
///
/// The first call of a window executes immediately. Calls landing inside
/// the window are not executed; they record their arguments instead, and
/// once the window lapses the most recently recorded arguments execute as
/// a trailing call, which starts the next window. A pending trailing call
/// dies only by its window lapsing with nothing recorded — there is no
/// cancel handle.
///
/// The wrapped callable runs with the throttle's internal state locked, so
/// it must not re-enter the same `Throttle`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use underfold::Throttle;
///
/// let log = Throttle::new(|line: &str| println!("{line}"), Duration::from_millis(200));
/// log.call("printed right away");
/// log.call("absorbed into the window; prints when it lapses");
/// ```
pub struct Throttle<A, F> {
    inner: Arc<Mutex<Inner<A, F>>>,
}

struct Inner<A, F> {
    func: F,
    wait: Duration,
    window_started: Option<Instant>,
    pending: Option<A>,
    timer_armed: bool,
}

impl<A, F> Throttle<A, F>
where
    A: Send + 'static,
    F: FnMut(A) + Send + 'static,
{
    /// Wraps `func` with a `wait`-long throttle window.
    pub fn new(func: F, wait: Duration) -> Self {
        Throttle {
            inner: Arc::new(Mutex::new(Inner {
                func,
                wait,
                window_started: None,
                pending: None,
                timer_armed: false,
            })),
        }
    }

    /// Executes now if no window is open, otherwise records `args` for the
    /// trailing-edge call.
    pub fn call(&self, args: A) {
        let mut inner = self.inner.lock().expect("throttle state poisoned");
        let now = Instant::now();
        match inner.window_started {
            Some(started) if now.duration_since(started) < inner.wait => {
                inner.pending = Some(args);
                // One timer per window carries out the trailing call.
                if !inner.timer_armed {
                    inner.timer_armed = true;
                    self.arm_timer(started + inner.wait);
                }
            }
            _ => {
                inner.window_started = Some(now);
                (inner.func)(args);
            }
        }
    }

    fn arm_timer(&self, deadline: Instant) {
        let shared = Arc::clone(&self.inner);
        thread::spawn(move || {
            let now = Instant::now();
            if deadline > now {
                thread::sleep(deadline - now);
            }
            let mut inner = shared.lock().expect("throttle state poisoned");
            inner.timer_armed = false;
            if let Some(args) = inner.pending.take() {
                inner.window_started = Some(Instant::now());
                (inner.func)(args);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_call_fires_immediately_and_the_window_absorbs_the_rest() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&fired);
        let throttle = Throttle::new(
            move |n: i32| sink.lock().expect("sink poisoned").push(n),
            Duration::from_millis(80),
        );

        throttle.call(1);
        throttle.call(2);
        throttle.call(3);
        assert_eq!(*fired.lock().expect("sink poisoned"), [1]);

        // Past the window: the latest absorbed call has fired, the others
        // never will.
        thread::sleep(Duration::from_millis(240));
        assert_eq!(*fired.lock().expect("sink poisoned"), [1, 3]);
    }

    #[test]
    fn a_lapsed_window_makes_the_next_call_leading_again() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&fired);
        let throttle = Throttle::new(
            move |n: i32| sink.lock().expect("sink poisoned").push(n),
            Duration::from_millis(40),
        );

        throttle.call(1);
        thread::sleep(Duration::from_millis(120));
        throttle.call(2);
        assert_eq!(*fired.lock().expect("sink poisoned"), [1, 2]);
    }
}
