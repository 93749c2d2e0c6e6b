//! Candidate address generation.
//!
//! The public entry point is [`generate_patterns`], a pure function mapping a
//! validated [`Identity`] to a deduplicated [`PatternSet`] of at least
//! [`MIN_PATTERNS`] addresses. Insertion order is preserved, so the same
//! identity always yields the same set in the same order.

mod error;
mod expand;
mod templates;
mod types;

pub use error::IdentityError;
pub use types::{Identity, PatternSet};

use templates::NameParts;

/// Floor on the size of a generated candidate set.
pub const MIN_PATTERNS: usize = 100;

/// Builds the candidate set for `identity`.
///
/// Name components and the domain are lowercased here; [`Identity::new`]
/// already guarantees trimmed, non-empty input. The local parts are plain
/// template combinations, no grammar validation is applied to them.
pub fn generate_patterns(identity: &Identity) -> PatternSet {
    let parts = NameParts::from_identity(identity);
    let mut set = PatternSet::new();

    for local in templates::fixed_locals(&parts) {
        set.insert(parts.address(local));
    }
    expand::separator_variants(&parts, &mut set);
    expand::numeric_suffixes(&parts, &mut set);
    expand::reversed_variants(&parts, &mut set);
    expand::leading_numbers(&parts, &mut set);
    expand::top_up(&parts, &mut set);

    tracing::debug!(
        "generated {} candidate addresses for domain {}",
        set.len(),
        parts.domain
    );
    set
}

/// Validates the raw triple, then generates.
pub fn generate(first: &str, last: &str, domain: &str) -> Result<PatternSet, IdentityError> {
    let identity = Identity::new(first, last, domain)?;
    Ok(generate_patterns(&identity))
}

#[cfg(test)]
mod tests;
