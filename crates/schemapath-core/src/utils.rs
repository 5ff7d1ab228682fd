/// Rust keywords that need the `r#` prefix to be used as identifiers.
///
/// `self`, `Self`, `super` and `crate` cannot be raw identifiers and are not listed.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe",
    "unsized", "use", "virtual", "where", "while", "yield",
];

pub fn is_rust_keyword(s: &str) -> bool {
    RUST_KEYWORDS.contains(&s)
}

/// Render `name` as a Rust identifier, adding `r#` for keywords.
///
/// # Examples
/// ```
/// use schemapath_core::utils::rust_ident;
/// assert_eq!(rust_ident("order"), "order");
/// assert_eq!(rust_ident("type"), "r#type");
/// ```
pub fn rust_ident(name: &str) -> String {
    if is_rust_keyword(name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}

/// Whether `name` can be written as a Rust identifier, raw form included.
///
/// # Examples
/// ```
/// use schemapath_core::utils::is_rust_identifier;
/// assert!(is_rust_identifier("_total"));
/// assert!(is_rust_identifier("type"));
/// assert!(!is_rust_identifier("a$b"));
/// ```
pub fn is_rust_identifier(name: &str) -> bool {
    if matches!(name, "_" | "self" | "Self" | "super" | "crate") {
        return false;
    }
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || first.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Strip a leading `r#` from a raw identifier.
///
/// # Examples
/// ```
/// use schemapath_core::utils::unraw;
/// assert_eq!(unraw("r#type"), "type");
/// assert_eq!(unraw("name"), "name");
/// ```
pub fn unraw(ident: &str) -> &str {
    ident.strip_prefix("r#").unwrap_or(ident)
}

/// Name of the companion type holding a type's path builders.
///
/// # Examples
/// ```
/// use schemapath_core::utils::paths_type_name;
/// assert_eq!(paths_type_name("Order", "Paths"), "OrderPaths");
/// ```
pub fn paths_type_name(type_name: &str, suffix: &str) -> String {
    format!("{}{}", unraw(type_name), suffix)
}

/// Match `name` against a pattern where `*` stands for any run of characters.
///
/// # Examples
/// ```
/// use schemapath_core::utils::wildcard_match;
/// assert!(wildcard_match("Order*", "OrderLine"));
/// assert!(!wildcard_match("Order", "OrderLine"));
/// ```
pub fn wildcard_match(pattern: &str, name: &str) -> bool {
    let mut parts = pattern.split('*');
    let Some(first) = parts.next() else {
        return name.is_empty();
    };
    let Some(mut rest) = name.strip_prefix(first) else {
        return false;
    };

    let parts: Vec<&str> = parts.collect();
    let Some((last, middle)) = parts.split_last() else {
        // No `*` at all: the whole name must be consumed.
        return rest.is_empty();
    };

    for part in middle {
        match rest.find(part) {
            Some(idx) => rest = &rest[idx + part.len()..],
            None => return false,
        }
    }
    rest.len() >= last.len() && rest.ends_with(last)
}
