use crate::{naming, Member, TypeIdent};

/// Maps a scalar member onto a column.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    /// The mapped member.
    pub member: Member,

    /// Explicit column override; the member name when unset.
    pub column: Option<String>,

    /// Renders `unique="true"` when set.
    pub unique: bool,

    /// Custom storage description replacing the default type lookup.
    ///
    /// Enumeration members receive [`CustomType::enum_mapper`] at
    /// compilation when nothing explicit is set here.
    pub custom_type: Option<CustomType>,
}

/// Storage description for types the plain lookup cannot express: a type
/// name plus a structured column carrying `sql-type` and `length`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomType {
    pub type_name: String,
    pub sql_type: String,
    pub length: u32,
}

impl Property {
    pub(crate) fn new(member: Member) -> Property {
        Property {
            member,
            column: None,
            unique: false,
            custom_type: None,
        }
    }

    /// Resolved column name.
    pub fn column_name(&self) -> String {
        match &self.column {
            Some(column) => column.clone(),
            None => naming::default_column_name(&self.member.name),
        }
    }

    /// Overrides the column name.
    pub fn column(&mut self, column: impl Into<String>) -> &mut Self {
        self.column = Some(column.into());
        self
    }

    /// Adds a unique constraint on the column.
    pub fn with_unique_constraint(&mut self) -> &mut Self {
        self.unique = true;
        self
    }

    /// Replaces the storage description entirely.
    pub fn custom_type(&mut self, custom: CustomType) -> &mut Self {
        self.custom_type = Some(custom);
        self
    }
}

impl CustomType {
    pub fn new(
        type_name: impl Into<String>,
        sql_type: impl Into<String>,
        length: u32,
    ) -> CustomType {
        CustomType {
            type_name: type_name.into(),
            sql_type: sql_type.into(),
            length,
        }
    }

    /// Default descriptor for enumeration members: a generic mapper over
    /// the enum type, stored as a length-50 string column.
    pub fn enum_mapper(enum_ty: &TypeIdent) -> CustomType {
        let mapper = TypeIdent::new(
            format!("GenericEnumMapper<{}>", enum_ty.name),
            enum_ty.namespace.clone(),
            enum_ty.assembly.clone(),
        );
        CustomType::new(mapper.qualified(), "string", 50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_mapper_descriptor() {
        let color = TypeIdent::new("ColorEnum", "Domain.Model", "Domain");
        let custom = CustomType::enum_mapper(&color);
        assert_eq!(
            custom.type_name,
            "Domain.Model.GenericEnumMapper<ColorEnum>, Domain"
        );
        assert_eq!(custom.sql_type, "string");
        assert_eq!(custom.length, 50);
    }
}
