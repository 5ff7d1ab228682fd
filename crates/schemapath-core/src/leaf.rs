//! Leaf-type table: value types that are terminal for path purposes.
//!
//! A field of a leaf type gets only a descriptor constant. Any other type is
//! composite and additionally gets a path builder for nested paths.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::TypeRef;

/// Terminal value types.
///
/// Closed set. Each variant accepts the JVM-style spellings used by schema
/// files and the native Rust spellings seen by the proc macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum LeafType {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Boolean,
    Char,
    String,
    Decimal,
    BigInteger,
    /// Generic numeric supertype.
    Number,
    /// Class reference.
    Class,
    /// Enumeration supertype.
    Enum,
    DateTime,
}

impl LeafType {
    pub const ALL: [LeafType; 15] = [
        LeafType::Byte,
        LeafType::Short,
        LeafType::Int,
        LeafType::Long,
        LeafType::Float,
        LeafType::Double,
        LeafType::Boolean,
        LeafType::Char,
        LeafType::String,
        LeafType::Decimal,
        LeafType::BigInteger,
        LeafType::Number,
        LeafType::Class,
        LeafType::Enum,
        LeafType::DateTime,
    ];

    /// Type names recognized as this leaf type.
    pub fn spellings(self) -> &'static [&'static str] {
        match self {
            LeafType::Byte => &["byte", "Byte", "i8", "u8"],
            LeafType::Short => &["short", "Short", "i16", "u16"],
            LeafType::Int => &["int", "Integer", "i32", "u32", "isize", "usize"],
            LeafType::Long => &["long", "Long", "i64", "u64", "i128", "u128"],
            LeafType::Float => &["float", "Float", "f32"],
            LeafType::Double => &["double", "Double", "f64"],
            LeafType::Boolean => &["boolean", "Boolean", "bool"],
            LeafType::Char => &["char", "Character"],
            LeafType::String => &["String", "str"],
            LeafType::Decimal => &["BigDecimal", "Decimal"],
            LeafType::BigInteger => &["BigInteger", "BigInt", "BigUint"],
            LeafType::Number => &["Number"],
            LeafType::Class => &["Class", "TypeId"],
            LeafType::Enum => &["Enum"],
            LeafType::DateTime => &[
                "Date",
                "SystemTime",
                "NaiveDate",
                "NaiveDateTime",
                "DateTime",
                "OffsetDateTime",
            ],
        }
    }

    /// Look up the leaf type spelled `name`.
    pub fn from_name(name: &str) -> Option<LeafType> {
        Self::ALL
            .into_iter()
            .find(|leaf| leaf.spellings().contains(&name))
    }
}

/// Membership table for leaf types.
///
/// Immutable once built. `standard()` is the fixed table; `with_extra()` adds
/// names supplied by configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafTable {
    extra: BTreeSet<String>,
}

impl LeafTable {
    pub fn standard() -> Self {
        Self::default()
    }

    /// Standard table extended with additional terminal type names.
    pub fn with_extra<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extra: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `ty` is terminal. Arrays are never terminal.
    pub fn is_leaf(&self, ty: &TypeRef) -> bool {
        if ty.is_array() {
            return false;
        }
        let name = ty.name();
        LeafType::from_name(name).is_some() || self.extra.contains(name)
    }

    pub fn classify(&self, ty: &TypeRef) -> Option<LeafType> {
        if ty.is_array() {
            return None;
        }
        LeafType::from_name(ty.name())
    }

    pub fn extra(&self) -> impl Iterator<Item = &str> {
        self.extra.iter().map(String::as_str)
    }
}
