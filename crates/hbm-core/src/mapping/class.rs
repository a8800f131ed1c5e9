use super::{Discriminator, IdMapping, Join, Rule, Subclass};
use crate::{naming, TypeIdent};

/// Root aggregate describing how one entity maps onto relational storage.
///
/// Built through [`ClassMap`](crate::ClassMap) and treated as read-only by
/// the compiler. Child rules keep declaration order; rendering preserves it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassMapping {
    /// Identity of the mapped type.
    pub ty: TypeIdent,

    /// Explicit table override. [`ClassMapping::table_name`] resolves the
    /// default.
    pub table: Option<String>,

    /// Optional schema qualifier.
    pub schema: Option<String>,

    /// Identity rule. Compilation fails without one.
    pub id: Option<IdMapping>,

    /// Child rules in declaration order.
    pub rules: Vec<Rule>,

    /// Discriminator column. Set whenever subclasses are mapped.
    pub discriminator: Option<Discriminator>,

    /// Subclass mappings. Non-empty only when `discriminator` is set.
    pub subclasses: Vec<Subclass>,

    /// Secondary-table mappings.
    pub joins: Vec<Join>,
}

impl ClassMapping {
    pub fn new(ty: TypeIdent) -> ClassMapping {
        ClassMapping {
            ty,
            table: None,
            schema: None,
            id: None,
            rules: vec![],
            discriminator: None,
            subclasses: vec![],
            joins: vec![],
        }
    }

    /// Short name of the mapped type.
    pub fn name(&self) -> &str {
        &self.ty.name
    }

    /// Resolved table name: the explicit override verbatim, or the
    /// bracket-wrapped type name.
    pub fn table_name(&self) -> String {
        match &self.table {
            Some(table) => table.clone(),
            None => naming::default_table_name(&self.ty.name),
        }
    }

    /// Name of the persisted document artifact for this mapping.
    pub fn file_name(&self) -> String {
        format!("{}.hbm.xml", self.ty.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> ClassMapping {
        ClassMapping::new(TypeIdent::new("MappedObject", "Domain", "Domain"))
    }

    #[test]
    fn table_name_defaults_to_bracketed_type_name() {
        assert_eq!(mapping().table_name(), "[MappedObject]");
    }

    #[test]
    fn table_name_override_passes_through() {
        let mut mapping = mapping();
        mapping.table = Some("myTableName".to_string());
        assert_eq!(mapping.table_name(), "myTableName");
    }

    #[test]
    fn file_name_derives_from_type_name() {
        assert_eq!(mapping().file_name(), "MappedObject.hbm.xml");
    }
}
