use super::Rule;
use crate::TypeIdent;

/// Maps a subclass within a discriminated hierarchy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subclass {
    /// Identity of the subclass type; rendered fully qualified.
    pub ty: TypeIdent,

    /// Discriminator value identifying rows of this subclass.
    pub discriminator_value: String,

    /// Rules resolved against the subclass's own definition.
    pub rules: Vec<Rule>,
}

impl Subclass {
    pub(crate) fn new(ty: TypeIdent, discriminator_value: impl Into<String>) -> Subclass {
        Subclass {
            ty,
            discriminator_value: discriminator_value.into(),
            rules: vec![],
        }
    }
}
