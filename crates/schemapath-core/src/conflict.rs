//! Conflict detector: synthesized names against pre-existing static members.
//!
//! Only members that existed before the pass are consulted. Two fields whose
//! descriptors would share a name within one pass are not detected here.

use crate::error::{Located, SchemaError};
use crate::model::{MemberField, MemberKind, TypeDecl};

/// Check `candidate` against the static members of `decl` of the given `kind`.
///
/// On a hit, the error is located at `field`, the field the name was
/// synthesized for.
pub fn check_collision<L: Clone>(
    decl: &TypeDecl<L>,
    field: &MemberField<L>,
    candidate: &str,
    kind: MemberKind,
) -> Option<Located<L>> {
    let existing = decl
        .static_members()
        .find(|m| m.kind == kind && m.name == candidate)?;

    tracing::debug!(
        decl = %decl.name,
        field = %field.name,
        name = candidate,
        %kind,
        "descriptor collides with existing static member"
    );

    Some(Located::new(
        SchemaError::DuplicateDescriptor {
            field: field.name.clone(),
            name: existing.name.to_string(),
            kind,
        },
        field.location.clone(),
    ))
}
