//! Function decorators.
//!
//! Each decorator bundles a wrapped callable with whatever private state it
//! needs — a first-result slot, a memo table, a throttle window — behind a
//! single `call` operation. State is owned by the decorator value alone;
//! two decorators never share a cache.

mod delay;
mod memoize;
mod once;
mod throttle;

pub use delay::delay;
pub use memoize::Memoize;
pub use once::Once;
pub use throttle::Throttle;
