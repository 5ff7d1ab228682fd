//! Which declarations the synthesis pass runs on.

use schemapath_core::utils::wildcard_match;
use schemapath_core::{SCHEMA_MARKER, TypeDecl};

/// Declaration selection.
///
/// By default a declaration is selected when it carries the `@Schema` marker.
/// An explicit list of names (with `*` wildcards) replaces the marker check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Marked,
    Names(Vec<String>),
}

impl Selection {
    pub fn names<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Names(patterns.into_iter().map(Into::into).collect())
    }

    /// Names from the command line; an empty list means "use the marker".
    pub fn from_patterns(patterns: Vec<String>) -> Self {
        if patterns.is_empty() {
            Self::Marked
        } else {
            Self::Names(patterns)
        }
    }

    pub fn selects<L>(&self, decl: &TypeDecl<L>) -> bool {
        match self {
            Selection::Marked => decl.has_attribute(SCHEMA_MARKER),
            Selection::Names(patterns) => patterns.iter().any(|p| wildcard_match(p, &decl.name)),
        }
    }

    /// Patterns that match none of `decls`. Always empty for [`Selection::Marked`].
    pub fn unmatched<'a, L>(&'a self, decls: &[TypeDecl<L>]) -> Vec<&'a str> {
        let Selection::Names(patterns) = self else {
            return Vec::new();
        };
        patterns
            .iter()
            .filter(|p| !decls.iter().any(|d| wildcard_match(p, &d.name)))
            .map(String::as_str)
            .collect()
    }
}
