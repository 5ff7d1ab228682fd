//! Descriptor synthesizer.
//!
//! Builds, for one eligible field, the descriptor constant and, when the field
//! type is composite, the path builder. Pure construction.

use serde::Serialize;

use crate::leaf::LeafTable;
use crate::model::MemberField;
use crate::{DESCRIPTOR_PREFIX, PATH_SEPARATOR, SUBPATH_PARAM};

/// Static string member naming a field: `_name = "name"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptorConstant {
    pub name: String,
    /// The field's own name. A leaf label, not a dotted path.
    pub value: String,
}

/// Static function prefixing a field name onto a caller-supplied subpath.
///
/// The body is `field + "." + subpath`; `prefix` holds the literal part
/// (`field` followed by the separator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathBuilder {
    pub name: String,
    pub param: &'static str,
    pub field: String,
    pub prefix: String,
}

impl PathBuilder {
    /// Evaluate the builder body for `subpath`. `subpath` is taken verbatim.
    pub fn apply(&self, subpath: &str) -> String {
        [self.field.as_str(), PATH_SEPARATOR, subpath].concat()
    }
}

/// Synthesized members for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    pub field: String,
    pub constant: DescriptorConstant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builder: Option<PathBuilder>,
}

impl Descriptor {
    pub fn is_composite(&self) -> bool {
        self.builder.is_some()
    }
}

/// Name of every member synthesized for a field called `field`.
pub fn descriptor_name(field: &str) -> String {
    format!("{DESCRIPTOR_PREFIX}{field}")
}

pub fn synthesize<L>(field: &MemberField<L>, leaves: &LeafTable) -> Descriptor {
    let name = descriptor_name(&field.name);
    let constant = DescriptorConstant {
        name: name.clone(),
        value: field.name.clone(),
    };

    let builder = (!leaves.is_leaf(&field.ty)).then(|| PathBuilder {
        name,
        param: SUBPATH_PARAM,
        field: field.name.clone(),
        prefix: format!("{}{PATH_SEPARATOR}", field.name),
    });

    Descriptor {
        field: field.name.clone(),
        constant,
        builder,
    }
}
