use crate::generator::MIN_PATTERNS;
use crate::generator::templates::{NameParts, SEPARATORS};
use crate::generator::types::PatternSet;

/// `first·last`, `f·last` and `first·l` across the separator table.
pub(crate) fn separator_variants(parts: &NameParts, set: &mut PatternSet) {
    let NameParts {
        first,
        last,
        first_initial: fi,
        last_initial: li,
        ..
    } = parts;

    for sep in SEPARATORS {
        set.insert(parts.address(format!("{first}{sep}{last}")));
        set.insert(parts.address(format!("{fi}{sep}{last}")));
        set.insert(parts.address(format!("{first}{sep}{li}")));
    }
}

/// Trailing `1..=9` suffixes on the joined and initial forms. The separator
/// is iterated explicitly for every suffix, never inherited from a previous
/// loop.
pub(crate) fn numeric_suffixes(parts: &NameParts, set: &mut PatternSet) {
    let NameParts {
        first,
        last,
        first_initial: fi,
        ..
    } = parts;

    for sep in SEPARATORS {
        for n in 1..10 {
            set.insert(parts.address(format!("{first}{sep}{last}{n}")));
            set.insert(parts.address(format!("{fi}{sep}{last}{n}")));
        }
    }
}

/// Last-before-first order across the separator table.
pub(crate) fn reversed_variants(parts: &NameParts, set: &mut PatternSet) {
    let NameParts {
        first,
        last,
        first_initial: fi,
        ..
    } = parts;

    for sep in SEPARATORS {
        set.insert(parts.address(format!("{last}{sep}{first}")));
        set.insert(parts.address(format!("{last}{sep}{fi}")));
    }
}

/// `1..=9` wedged between the first component and the last name.
pub(crate) fn leading_numbers(parts: &NameParts, set: &mut PatternSet) {
    let NameParts {
        first,
        last,
        first_initial: fi,
        ..
    } = parts;

    for sep in SEPARATORS {
        for n in 1..10 {
            set.insert(parts.address(format!("{first}{n}{sep}{last}")));
            set.insert(parts.address(format!("{fi}{n}{sep}{last}")));
        }
    }
}

/// Two-digit suffixes on the bare names and the joined forms, applied until
/// the floor is met. The suffix loop is the bound; the floor is always
/// reached well before it runs out because `first10..first99` alone are
/// pairwise distinct.
pub(crate) fn top_up(parts: &NameParts, set: &mut PatternSet) {
    let NameParts { first, last, .. } = parts;

    for n in 10..100 {
        if set.len() >= MIN_PATTERNS {
            break;
        }
        set.insert(parts.address(format!("{first}{n}")));
        set.insert(parts.address(format!("{last}{n}")));
        for sep in SEPARATORS {
            set.insert(parts.address(format!("{first}{sep}{last}{n}")));
        }
    }
}
