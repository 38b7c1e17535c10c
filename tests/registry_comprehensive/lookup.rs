//! Lookup Tests
//!
//! Case → object and object → case through the facade.

use crate::*;

#[test]
fn test_resolve_each_case() {
    let registry = CaseRegistry::new();
    let expected = [("first", 1), ("second", 2), ("third", 3)];

    for (case, (identity, value)) in registry.all_cases().zip(expected) {
        let object = registry.resolve(case);
        assert_eq!(object.identity(), identity);
        assert_eq!(object.value(), value);
    }
}

#[test]
fn test_reverse_lookup_roundtrip() {
    let registry = CaseRegistry::new();
    for case in registry.all_cases() {
        assert_eq!(registry.case_for(registry.resolve(case)), Some(case));
    }
}

#[test]
fn test_reverse_lookup_by_token() {
    let registry = CaseRegistry::new();
    assert_eq!(registry.case_for_identity("first"), Some(Case::FirstState));
    assert_eq!(registry.case_for_identity("second"), Some(Case::SecondState));
    assert_eq!(registry.case_for_identity("third"), Some(Case::ThirdState));
}

#[test]
fn test_reverse_lookup_absent() {
    let registry = CaseRegistry::new();
    assert_eq!(registry.case_for(&StateObject::from("zeroth")), None);
}

#[test]
fn test_case_id_parse_roundtrip() {
    for case in Case::all() {
        assert_eq!(case.id().parse::<Case>().unwrap(), *case);
    }
    let err = "FIRSTSTATE".parse::<Case>().unwrap_err();
    assert!(matches!(err, Error::UnknownCase(ref id) if id == "FIRSTSTATE"));
}
