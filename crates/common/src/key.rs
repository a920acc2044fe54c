//! Node identity shared by stages and the operators they host.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a plan node: an allocation scope plus a sequence number.
///
/// Keys are handed out by whoever owns the enclosing graph; nodes only store
/// and echo them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OperatorKey {
    scope: String,
    id: u64,
}

impl OperatorKey {
    /// Builds a key, rejecting scopes that are empty or contain whitespace.
    pub fn new(scope: impl Into<String>, id: u64) -> Result<Self> {
        let scope = scope.into();
        validate_scope(&scope)?;
        Ok(Self { scope, id })
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for OperatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.scope, self.id)
    }
}

fn validate_scope(scope: &str) -> Result<()> {
    if scope.is_empty() {
        return Err(Error::InvalidKey("scope must not be empty".to_string()));
    }
    if scope.chars().any(char::is_whitespace) {
        return Err(Error::InvalidKey(format!(
            "scope '{}' must not contain whitespace",
            scope
        )));
    }
    Ok(())
}

/// Hands out keys within one scope.
///
/// There is no process-wide counter: each compilation owns its allocator, so
/// two allocators over the same scope produce the same sequence.
#[derive(Debug, Clone)]
pub struct KeyAllocator {
    scope: String,
    next: u64,
}

impl KeyAllocator {
    pub fn new(scope: impl Into<String>) -> Result<Self> {
        let scope = scope.into();
        validate_scope(&scope)?;
        Ok(Self { scope, next: 0 })
    }

    /// Allocator over a fresh v4 UUID scope.
    pub fn with_random_scope() -> Self {
        Self {
            scope: Uuid::new_v4().simple().to_string(),
            next: 0,
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn next_key(&mut self) -> OperatorKey {
        let key = OperatorKey {
            scope: self.scope.clone(),
            id: self.next,
        };
        self.next += 1;
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display() {
        let key = OperatorKey::new("scope", 12).unwrap();
        assert_eq!(key.to_string(), "scope-12");
        assert_eq!(key.scope(), "scope");
        assert_eq!(key.id(), 12);
    }

    #[test]
    fn test_malformed_scope_is_rejected() {
        assert!(matches!(OperatorKey::new("", 1), Err(Error::InvalidKey(_))));
        assert!(matches!(OperatorKey::new("a b", 1), Err(Error::InvalidKey(_))));
        assert!(KeyAllocator::new("").is_err());
    }

    #[test]
    fn test_allocator_is_sequential_and_deterministic() {
        let mut first = KeyAllocator::new("plan").unwrap();
        let mut second = KeyAllocator::new("plan").unwrap();
        let a: Vec<_> = (0..3).map(|_| first.next_key()).collect();
        let b: Vec<_> = (0..3).map(|_| second.next_key()).collect();
        assert_eq!(a, b);
        assert_eq!(a[2], OperatorKey::new("plan", 2).unwrap());
    }

    #[test]
    fn test_random_scope_is_valid() {
        let mut alloc = KeyAllocator::with_random_scope();
        assert!(!alloc.scope().is_empty());
        let key = alloc.next_key();
        assert_eq!(key.id(), 0);
        assert!(OperatorKey::new(alloc.scope(), 0).is_ok());
    }
}
