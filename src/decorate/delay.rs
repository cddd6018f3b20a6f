use std::thread;
use std::time::Duration;

/// Schedules one invocation of `func(args)` no earlier than `wait` from now.
///
/// The caller is never blocked: the invocation happens on a detached timer
/// thread. Fire-and-forget — there is no cancellation handle, and a result
/// the function produces goes nowhere.
///
/// # Examples
///
/// ```
/// use std::sync::mpsc;
/// use std::time::Duration;
/// use underfold::delay;
///
/// let (sender, receiver) = mpsc::channel();
/// delay(move |word| { let _ = sender.send(word); }, Duration::from_millis(10), "later");
///
/// assert_eq!(receiver.recv_timeout(Duration::from_secs(2)), Ok("later"));
/// ```
pub fn delay<A, F>(func: F, wait: Duration, args: A)
where
    A: Send + 'static,
    F: FnOnce(A) + Send + 'static,
{
    thread::spawn(move || {
        thread::sleep(wait);
        func(args);
    });
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::time::Instant;

    use super::*;

    #[test]
    fn fires_once_no_earlier_than_the_wait() {
        let (sender, receiver) = mpsc::channel();
        let started = Instant::now();
        delay(
            move |message| {
                let _ = sender.send(message);
            },
            Duration::from_millis(40),
            "ping",
        );

        // Scheduling does not block and has not fired yet.
        assert!(receiver.try_recv().is_err());

        assert_eq!(receiver.recv_timeout(Duration::from_secs(5)), Ok("ping"));
        assert!(started.elapsed() >= Duration::from_millis(40));

        // One shot only.
        assert!(receiver.recv_timeout(Duration::from_millis(80)).is_err());
    }
}
