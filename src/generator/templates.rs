use crate::generator::types::Identity;

/// Join characters used between name components. The empty separator is part
/// of the table: bare concatenation is a variant like any other.
pub(crate) const SEPARATORS: [&str; 4] = [".", "_", "-", ""];

/// Lowercased name components plus derived one-character initials.
pub(crate) struct NameParts {
    pub(crate) first: String,
    pub(crate) last: String,
    pub(crate) domain: String,
    pub(crate) first_initial: String,
    pub(crate) last_initial: String,
}

impl NameParts {
    pub(crate) fn from_identity(identity: &Identity) -> Self {
        let first = identity.first().to_lowercase();
        let last = identity.last().to_lowercase();
        let first_initial = initial(&first);
        let last_initial = initial(&last);
        Self {
            first,
            last,
            domain: identity.domain().to_lowercase(),
            first_initial,
            last_initial,
        }
    }

    pub(crate) fn address(&self, local: impl AsRef<str>) -> String {
        format!("{}@{}", local.as_ref(), self.domain)
    }
}

/// For a one-character name the initial equals the name itself; the
/// duplicate variants this produces collapse in the set.
fn initial(name: &str) -> String {
    name.chars().take(1).collect()
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(head) => head.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The always-present template combinations.
pub(crate) fn fixed_locals(parts: &NameParts) -> Vec<String> {
    let NameParts {
        first,
        last,
        first_initial: fi,
        last_initial: li,
        ..
    } = parts;

    vec![
        // basic combinations
        first.clone(),
        last.clone(),
        format!("{first}.{last}"),
        format!("{first}_{last}"),
        format!("{first}-{last}"),
        format!("{first}{last}"),
        format!("{last}.{first}"),
        format!("{last}{first}"),
        format!("{fi}{last}"),
        format!("{fi}.{last}"),
        format!("{first}{li}"),
        format!("{first}.{li}"),
        format!("{fi}{li}"),
        format!("{fi}.{li}"),
        // numeric and year-like suffixes
        format!("{first}1"),
        format!("{first}123"),
        format!("{first}.{last}1"),
        format!("{first}_{last}123"),
        format!("{first}{last}2025"),
        format!("{fi}{last}99"),
        // reversed order with suffixes
        format!("{last}.{first}1"),
        format!("{last}{first}2025"),
        // remaining separator/initial pairings
        format!("{first}-{li}"),
        format!("{fi}-{last}"),
        format!("{fi}_{last}"),
        format!("{first}_{li}"),
        // double initials with suffixes
        format!("{fi}{li}1"),
        format!("{fi}.{li}2023"),
        // capitalized variants
        format!("{}{}", capitalize(first), capitalize(last)),
        format!("{}.{}", capitalize(first), capitalize(last)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_takes_first_char_only() {
        assert_eq!(initial("john"), "j");
        assert_eq!(initial("j"), "j");
    }

    #[test]
    fn capitalize_upcases_head_only() {
        assert_eq!(capitalize("john"), "John");
        assert_eq!(capitalize("j"), "J");
    }
}
