use crate::ValueTy;

/// Discriminator column for mapping a class hierarchy into one table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Discriminator {
    /// Column holding the discriminating value.
    pub column: String,

    /// Declared value type of the column.
    pub ty: ValueTy,

    /// Value identifying the base class itself; rendered as
    /// `discriminator-value` on the `class` element, not here.
    pub class_value: Option<String>,
}

impl Discriminator {
    pub(crate) fn new(column: impl Into<String>, ty: ValueTy) -> Discriminator {
        Discriminator {
            column: column.into(),
            ty,
            class_value: None,
        }
    }
}
