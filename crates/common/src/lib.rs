//! Common crate
//!
//! Shared identity and error handling for Floe.
//!
//! # Example
//! ```rust
//! use floe_common::KeyAllocator;
//! let mut keys = KeyAllocator::new("scope").unwrap();
//! assert_eq!(keys.next_key().to_string(), "scope-0");
//! ```

pub mod error;
pub mod key;

pub use error::{Error, Result};
pub use key::{KeyAllocator, OperatorKey};
