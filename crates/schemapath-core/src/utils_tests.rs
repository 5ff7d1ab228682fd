use crate::utils::{
    is_rust_identifier, is_rust_keyword, paths_type_name, rust_ident, unraw, wildcard_match,
};

#[test]
fn keywords_become_raw() {
    assert!(is_rust_keyword("type"));
    assert!(is_rust_keyword("gen"));
    assert!(!is_rust_keyword("Type"));
    assert_eq!(rust_ident("match"), "r#match");
    assert_eq!(rust_ident("matches"), "matches");
}

#[test]
fn unraw_strips_prefix_once() {
    assert_eq!(unraw("r#fn"), "fn");
    assert_eq!(unraw("r#r#x"), "r#x");
}

#[test]
fn paths_type_name_uses_unraw_name() {
    assert_eq!(paths_type_name("r#Order", "Paths"), "OrderPaths");
    assert_eq!(paths_type_name("Order", "Schema"), "OrderSchema");
}

#[test]
fn wildcard_exact() {
    assert!(wildcard_match("User", "User"));
    assert!(!wildcard_match("User", "Users"));
    assert!(!wildcard_match("User", "Use"));
}

#[test]
fn wildcard_star() {
    assert!(wildcard_match("*", "Anything"));
    assert!(wildcard_match("*", ""));
    assert!(wildcard_match("*Line", "OrderLine"));
    assert!(wildcard_match("Order*", "Order"));
    assert!(wildcard_match("O*r*e", "OrderLine"));
    assert!(!wildcard_match("*Line", "LineItem"));
    assert!(!wildcard_match("A*A", "A"));
}

#[test]
fn rust_identifier_rules() {
    assert!(is_rust_identifier("customer"));
    assert!(is_rust_identifier("_customer"));
    assert!(is_rust_identifier("match"));
    assert!(!is_rust_identifier("a$b"));
    assert!(!is_rust_identifier("$inner"));
    assert!(!is_rust_identifier("9lives"));
    assert!(!is_rust_identifier("_"));
    assert!(!is_rust_identifier("self"));
    assert!(!is_rust_identifier(""));
}
