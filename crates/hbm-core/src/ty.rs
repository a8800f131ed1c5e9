use crate::TypeIdent;

use std::collections::HashMap;

/// The declared value type of an entity member.
///
/// Scalars resolve to storage type names through [`TypeMap`]. The remaining
/// variants identify another type and drive the type-directed parts of
/// compilation: enumerations take a custom type descriptor, entities become
/// association targets, and lists become collection children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueTy {
    Bool,
    I16,
    I32,
    I64,
    F32,
    F64,
    String,
    DateTime,
    Guid,
    /// An enumeration type.
    Enum(TypeIdent),
    /// A reference to another mapped class.
    Entity(TypeIdent),
    /// A collection of another mapped class.
    List(TypeIdent),
}

impl ValueTy {
    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(..))
    }

    pub fn as_enum(&self) -> Option<&TypeIdent> {
        match self {
            Self::Enum(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn is_entity(&self) -> bool {
        matches!(self, Self::Entity(..))
    }

    pub fn as_entity(&self) -> Option<&TypeIdent> {
        match self {
            Self::Entity(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(..))
    }

    pub fn as_list(&self) -> Option<&TypeIdent> {
        match self {
            Self::List(ty) => Some(ty),
            _ => None,
        }
    }
}

impl core::fmt::Display for ValueTy {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            ValueTy::Bool => f.write_str("Bool"),
            ValueTy::I16 => f.write_str("I16"),
            ValueTy::I32 => f.write_str("I32"),
            ValueTy::I64 => f.write_str("I64"),
            ValueTy::F32 => f.write_str("F32"),
            ValueTy::F64 => f.write_str("F64"),
            ValueTy::String => f.write_str("String"),
            ValueTy::DateTime => f.write_str("DateTime"),
            ValueTy::Guid => f.write_str("Guid"),
            ValueTy::Enum(ty) => write!(f, "Enum({})", ty.name),
            ValueTy::Entity(ty) => write!(f, "Entity({})", ty.name),
            ValueTy::List(ty) => write!(f, "List({})", ty.name),
        }
    }
}

/// Lookup from declared value types to the storage type names rendered in
/// `type` attributes.
///
/// Scalar coverage is built in (`I64` resolves to `"Int64"` and so on).
/// Hosts extend or replace entries per type with [`TypeMap::insert`]; a type
/// with neither a built-in nor a registered name fails compilation.
#[derive(Debug, Clone, Default)]
pub struct TypeMap {
    overrides: HashMap<ValueTy, String>,
}

impl TypeMap {
    pub fn new() -> TypeMap {
        TypeMap::default()
    }

    /// Registers (or replaces) the storage name for a value type.
    pub fn insert(&mut self, ty: ValueTy, storage: impl Into<String>) {
        self.overrides.insert(ty, storage.into());
    }

    /// Resolves the storage type name for `ty`, if one is known.
    pub fn resolve(&self, ty: &ValueTy) -> Option<String> {
        if let Some(storage) = self.overrides.get(ty) {
            return Some(storage.clone());
        }
        Self::built_in(ty).map(str::to_owned)
    }

    fn built_in(ty: &ValueTy) -> Option<&'static str> {
        match ty {
            ValueTy::Bool => Some("Boolean"),
            ValueTy::I16 => Some("Int16"),
            ValueTy::I32 => Some("Int32"),
            ValueTy::I64 => Some("Int64"),
            ValueTy::F32 => Some("Single"),
            ValueTy::F64 => Some("Double"),
            ValueTy::String => Some("String"),
            ValueTy::DateTime => Some("DateTime"),
            ValueTy::Guid => Some("Guid"),
            ValueTy::Enum(_) | ValueTy::Entity(_) | ValueTy::List(_) => None,
        }
    }
}
