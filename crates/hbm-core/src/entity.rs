use crate::{Error, Result, TypeIdent, ValueTy};

/// Externally supplied description of a modeled type: its identity and the
/// members that mapping rules may reference.
///
/// Stands in for reflection. The host describes each entity once; the
/// fluent builder resolves member names against the description, so a
/// mapping can never point at a member the type does not declare.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityDef {
    /// Identity of the described type.
    pub ty: TypeIdent,

    /// Declared members, in declaration order.
    pub members: Vec<Member>,
}

/// A member of a modeled type: its name and declared value type.
///
/// Rules store a clone of the resolved member, so a finished mapping is
/// self-contained and compiles without the definition in scope.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Member {
    pub name: String,
    pub ty: ValueTy,
}

impl EntityDef {
    pub fn new(ty: TypeIdent) -> EntityDef {
        EntityDef {
            ty,
            members: vec![],
        }
    }

    /// Declares a member. Consuming, so definitions chain.
    pub fn with_member(mut self, name: impl Into<String>, ty: ValueTy) -> EntityDef {
        self.members.push(Member {
            name: name.into(),
            ty,
        });
        self
    }

    /// Short name of the described type.
    pub fn name(&self) -> &str {
        &self.ty.name
    }

    /// Resolves a member by name.
    pub fn member(&self, name: &str) -> Result<&Member> {
        self.members
            .iter()
            .find(|member| member.name == name)
            .ok_or_else(|| Error::unknown_member(&self.ty.name, name))
    }
}
