//! Type declaration model consumed by the synthesis pass.
//!
//! Front ends build these from their own syntax trees. The pass only reads
//! them; synthesized members are returned separately.

use std::fmt;

use serde::Serialize;

/// What kind of declaration carries the schema marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    /// Record/class-like declaration with member fields.
    Class,
    /// Interface-like declaration. Never a valid synthesis target.
    Interface,
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclKind::Class => write!(f, "class"),
            DeclKind::Interface => write!(f, "interface"),
        }
    }
}

/// A type declaration with its member fields in declaration order.
#[derive(Debug, Clone)]
pub struct TypeDecl<L> {
    pub name: String,
    pub kind: DeclKind,
    /// Type-level marker names (last path segment), e.g. `Schema`.
    pub attributes: Vec<String>,
    pub fields: Vec<MemberField<L>>,
    pub methods: Vec<MethodDecl>,
    pub location: L,
}

impl<L> TypeDecl<L> {
    pub fn new(name: impl Into<String>, kind: DeclKind, location: L) -> Self {
        Self {
            name: name.into(),
            kind,
            attributes: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            location,
        }
    }

    pub fn with_field(mut self, field: MemberField<L>) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(name.into());
        self
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a == name)
    }

    /// Static members that existed before synthesis: static fields and static methods.
    pub fn static_members(&self) -> impl Iterator<Item = StaticMember<'_>> {
        let fields = self
            .fields
            .iter()
            .filter(|f| f.modifiers.is_static)
            .map(|f| StaticMember {
                name: &f.name,
                kind: MemberKind::Field,
            });
        let methods = self
            .methods
            .iter()
            .filter(|m| m.is_static)
            .map(|m| StaticMember {
                name: &m.name,
                kind: MemberKind::Function,
            });
        fields.chain(methods)
    }
}

/// A member field of a type declaration.
#[derive(Debug, Clone)]
pub struct MemberField<L> {
    pub name: String,
    pub ty: TypeRef,
    pub modifiers: Modifiers,
    /// Attached marker attributes (names only). Empty for an unmarked field.
    pub attributes: Vec<String>,
    pub location: L,
}

impl<L> MemberField<L> {
    pub fn new(name: impl Into<String>, ty: TypeRef, location: L) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Modifiers::default(),
            attributes: Vec::new(),
            location,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(name.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Modifiers {
    pub is_final: bool,
    pub is_static: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        is_final: false,
        is_static: false,
    };

    pub const FINAL: Modifiers = Modifiers {
        is_final: true,
        is_static: false,
    };

    pub const STATIC: Modifiers = Modifiers {
        is_final: false,
        is_static: true,
    };
}

/// A method declaration. Only its name and staticness matter for collisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: String,
    pub is_static: bool,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>, is_static: bool) -> Self {
        Self {
            name: name.into(),
            is_static,
        }
    }
}

/// Kind of a static member, used to pick which existing members a name is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Field,
    Function,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberKind::Field => write!(f, "field"),
            MemberKind::Function => write!(f, "function"),
        }
    }
}

/// A pre-existing static member of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticMember<'a> {
    pub name: &'a str,
    pub kind: MemberKind,
}

/// Nominal reference to a declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeRef {
    /// Path segments, e.g. `["java", "math", "BigDecimal"]`. Never empty.
    pub segments: Vec<String>,
    /// Generic arguments, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<TypeRef>,
    /// Number of array dimensions (`String[][]` has two).
    #[serde(skip_serializing_if = "is_zero")]
    pub array_depth: u8,
}

fn is_zero(n: &u8) -> bool {
    *n == 0
}

impl TypeRef {
    /// Single-segment type without arguments.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
            args: Vec::new(),
            array_depth: 0,
        }
    }

    pub fn path<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        assert!(!segments.is_empty(), "type path needs at least one segment");
        Self {
            segments,
            args: Vec::new(),
            array_depth: 0,
        }
    }

    pub fn with_args(mut self, args: Vec<TypeRef>) -> Self {
        self.args = args;
        self
    }

    pub fn array_of(mut self) -> Self {
        self.array_depth = self.array_depth.saturating_add(1);
        self
    }

    /// Last path segment: the simple name of the type.
    pub fn name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    pub fn is_array(&self) -> bool {
        self.array_depth > 0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))?;
        if !self.args.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", arg)?;
            }
            write!(f, ">")?;
        }
        for _ in 0..self.array_depth {
            write!(f, "[]")?;
        }
        Ok(())
    }
}
