use std::collections::HashSet;

use serde::{Serialize, Serializer};

use crate::generator::error::IdentityError;

/// Input triple for one generation run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    first: String,
    last: String,
    domain: String,
}

impl Identity {
    /// Trims surrounding whitespace and rejects empty fields.
    pub fn new(first: &str, last: &str, domain: &str) -> Result<Self, IdentityError> {
        let first = first.trim();
        let last = last.trim();
        let domain = domain.trim();

        if first.is_empty() {
            return Err(IdentityError::EmptyFirstName);
        }
        if last.is_empty() {
            return Err(IdentityError::EmptyLastName);
        }
        if domain.is_empty() {
            return Err(IdentityError::EmptyDomain);
        }

        Ok(Self {
            first: first.to_string(),
            last: last.to_string(),
            domain: domain.to_string(),
        })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

/// Deduplicated candidate addresses, first-insertion order preserved.
///
/// Equality compares the ordered entries, so two sets are equal only when
/// they hold the same addresses in the same order.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a candidate; returns `false` when it was already present.
    pub(crate) fn insert(&mut self, candidate: String) -> bool {
        if !self.seen.insert(candidate.clone()) {
            return false;
        }
        self.entries.push(candidate);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, address: &str) -> bool {
        self.seen.contains(address)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }
}

impl PartialEq for PatternSet {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for PatternSet {}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Serializes as a plain sequence of addresses.
impl Serialize for PatternSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.entries.iter())
    }
}
