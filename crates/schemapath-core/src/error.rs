use crate::model::MemberKind;

/// Problems found while synthesizing a declaration's descriptors.
///
/// Collected, never raised: the pass reports them and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The schema marker sits on an interface-like declaration.
    #[error("`@Schema` cannot be applied to interface `{type_name}`")]
    InvalidTarget { type_name: String },

    /// A synthesized name is already taken by a static member.
    #[error("schema for field `{field}` already exists: static {kind} `{name}`")]
    DuplicateDescriptor {
        field: String,
        name: String,
        kind: MemberKind,
    },
}

/// A [`SchemaError`] with the location it is reported at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<L> {
    pub error: SchemaError,
    pub location: L,
}

impl<L> Located<L> {
    pub fn new(error: SchemaError, location: L) -> Self {
        Self { error, location }
    }
}

impl<L> std::fmt::Display for Located<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}
