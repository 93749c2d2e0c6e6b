use std::collections::HashSet;

use proptest::prelude::*;

use super::{Identity, IdentityError, MIN_PATTERNS, PatternSet, generate, generate_patterns};

fn john_doe() -> PatternSet {
    generate("John", "Doe", "Example.com").expect("valid identity")
}

#[test]
fn includes_reference_members() {
    let set = john_doe();
    for expected in [
        "john@example.com",
        "doe@example.com",
        "john.doe@example.com",
        "jdoe@example.com",
        "JohnDoe@example.com",
    ] {
        assert!(set.contains(expected), "missing {expected}");
    }
}

#[test]
fn meets_floor() {
    assert!(john_doe().len() >= MIN_PATTERNS);
}

#[test]
fn every_member_targets_the_lowercased_domain() {
    for address in john_doe().iter() {
        assert_eq!(address.matches('@').count(), 1, "bad shape: {address}");
        let (local, domain) = address.split_once('@').expect("one '@'");
        assert!(!local.is_empty(), "empty local part: {address}");
        assert_eq!(domain, "example.com");
    }
}

#[test]
fn deterministic_across_calls() {
    // PatternSet equality is order-sensitive, so this covers content and order.
    assert_eq!(john_doe(), john_doe());
}

#[test]
fn no_duplicates_in_iteration() {
    let set = john_doe();
    let unique: HashSet<&str> = set.iter().collect();
    assert_eq!(unique.len(), set.len());
}

#[test]
fn single_char_first_name_degenerates_without_error() {
    let set = generate("J", "Doe", "x.com").expect("valid identity");
    assert!(set.len() >= MIN_PATTERNS);
    assert!(set.contains("j@x.com"));
    assert!(set.contains("jdoe@x.com"));
    // initial == name, so the initial and full-name variants collapse
    assert!(set.contains("j.doe@x.com"));
}

#[test]
fn single_char_both_names_still_meet_floor() {
    let set = generate("a", "a", "x.com").expect("valid identity");
    assert!(set.len() >= MIN_PATTERNS);
}

#[test]
fn rejects_empty_fields() {
    assert_eq!(
        Identity::new("", "Doe", "x.com").unwrap_err(),
        IdentityError::EmptyFirstName
    );
    assert_eq!(
        Identity::new("John", "   ", "x.com").unwrap_err(),
        IdentityError::EmptyLastName
    );
    assert_eq!(
        Identity::new("John", "Doe", "\t").unwrap_err(),
        IdentityError::EmptyDomain
    );
}

#[test]
fn trims_surrounding_whitespace() {
    let identity = Identity::new("  John ", "Doe", " Example.com ").expect("valid identity");
    assert_eq!(identity.first(), "John");
    assert_eq!(identity.domain(), "Example.com");
    let set = generate_patterns(&identity);
    assert!(set.contains("john.doe@example.com"));
}

#[test]
fn numeric_and_reversed_expansions_are_present() {
    let set = john_doe();
    // every separator gets its own suffix sweep
    assert!(set.contains("john.doe1@example.com"));
    assert!(set.contains("john_doe9@example.com"));
    assert!(set.contains("jdoe5@example.com"));
    assert!(set.contains("doe-john@example.com"));
    assert!(set.contains("john1.doe@example.com"));
    assert!(set.contains("j9-doe@example.com"));
}

#[test]
fn insert_rejects_duplicates_and_keeps_order() {
    let mut set = PatternSet::new();
    assert!(set.insert("b@x.com".to_string()));
    assert!(set.insert("a@x.com".to_string()));
    assert!(!set.insert("b@x.com".to_string()));
    assert_eq!(set.len(), 2);
    let entries: Vec<&str> = set.iter().collect();
    assert_eq!(entries, ["b@x.com", "a@x.com"]);
}

proptest! {
    #[test]
    fn floor_and_shape_hold_for_all_inputs(
        first in "[a-z]{1,12}",
        last in "[a-z]{1,12}",
        domain in "[a-z]{1,10}\\.[a-z]{2,6}",
    ) {
        let set = generate(&first, &last, &domain).expect("valid identity");
        prop_assert!(set.len() >= MIN_PATTERNS);
        for address in set.iter() {
            prop_assert_eq!(address.matches('@').count(), 1);
            let (local, addr_domain) = address.split_once('@').expect("one '@'");
            prop_assert!(!local.is_empty());
            prop_assert_eq!(addr_domain, domain.as_str());
        }
    }
}
