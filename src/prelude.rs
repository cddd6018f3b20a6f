//! Re-exports the crate's trait seams for wildcard import.
//!
//! # Example
//!
//! ```
//! use underfold::prelude::*;
//! ```

pub use crate::collection::Collection;
pub use crate::mapping::Mapping;
