//! Per-declaration synthesis pass.

use crate::conflict::check_collision;
use crate::eligibility::exclusion;
use crate::error::{Located, SchemaError};
use crate::leaf::LeafTable;
use crate::model::{DeclKind, MemberKind, TypeDecl};
use crate::synth::{Descriptor, synthesize};

/// Output of the pass for one declaration.
#[derive(Debug, Clone)]
pub struct Synthesis<L> {
    pub type_name: String,
    /// One entry per eligible field, in declaration order.
    pub descriptors: Vec<Descriptor>,
    pub errors: Vec<Located<L>>,
}

impl<L> Synthesis<L> {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn constants(&self) -> impl Iterator<Item = &crate::DescriptorConstant> {
        self.descriptors.iter().map(|d| &d.constant)
    }

    pub fn builders(&self) -> impl Iterator<Item = &crate::PathBuilder> {
        self.descriptors.iter().filter_map(|d| d.builder.as_ref())
    }
}

/// Run eligibility, conflict detection and synthesis over `decl`'s fields.
///
/// An interface yields a single `InvalidTarget` error and nothing else.
/// A field whose descriptor collides is reported and still synthesized;
/// remaining fields are processed either way.
pub fn synthesize_schema<L: Clone>(decl: &TypeDecl<L>, leaves: &LeafTable) -> Synthesis<L> {
    let mut synthesis = Synthesis {
        type_name: decl.name.clone(),
        descriptors: Vec::new(),
        errors: Vec::new(),
    };

    if decl.kind == DeclKind::Interface {
        synthesis.errors.push(Located::new(
            SchemaError::InvalidTarget {
                type_name: decl.name.clone(),
            },
            decl.location.clone(),
        ));
        return synthesis;
    }

    for field in &decl.fields {
        if let Some(reason) = exclusion(field) {
            tracing::debug!(decl = %decl.name, field = %field.name, %reason, "field skipped");
            continue;
        }

        let descriptor = synthesize(field, leaves);

        synthesis.errors.extend(check_collision(
            decl,
            field,
            &descriptor.constant.name,
            MemberKind::Field,
        ));
        if let Some(builder) = &descriptor.builder {
            synthesis.errors.extend(check_collision(
                decl,
                field,
                &builder.name,
                MemberKind::Function,
            ));
        }

        tracing::trace!(
            decl = %decl.name,
            field = %field.name,
            composite = descriptor.is_composite(),
            "descriptor synthesized"
        );
        synthesis.descriptors.push(descriptor);
    }

    synthesis
}
