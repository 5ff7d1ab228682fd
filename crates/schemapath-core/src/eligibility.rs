//! Eligibility filter: which member fields receive descriptors.
//!
//! A field qualifies iff it is neither final nor static and carries no
//! attributes at all. Any attribute disqualifies it, the exclusion marker
//! included; there is no way to keep a field that is otherwise marked.

use serde::Serialize;

use crate::model::MemberField;

/// Why a field was passed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Exclusion {
    Final,
    Static,
    Annotated,
}

impl std::fmt::Display for Exclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Exclusion::Final => write!(f, "final"),
            Exclusion::Static => write!(f, "static"),
            Exclusion::Annotated => write!(f, "annotated"),
        }
    }
}

/// First reason `field` is excluded, or `None` if it is eligible.
pub fn exclusion<L>(field: &MemberField<L>) -> Option<Exclusion> {
    if field.modifiers.is_final {
        return Some(Exclusion::Final);
    }
    if field.modifiers.is_static {
        return Some(Exclusion::Static);
    }
    if !field.attributes.is_empty() {
        return Some(Exclusion::Annotated);
    }
    None
}

pub fn is_eligible<L>(field: &MemberField<L>) -> bool {
    exclusion(field).is_none()
}
