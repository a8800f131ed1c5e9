//! Default naming conventions for tables, columns, and constraints.
//!
//! Every function is pure and total. The compiler consults these only when
//! a rule carries no explicit override; overrides pass through verbatim.

/// Default table name for an entity: the type name wrapped in brackets.
///
/// The brackets distinguish a defaulted name from an explicit override,
/// which is never wrapped.
pub fn default_table_name(entity: &str) -> String {
    format!("[{}]", entity)
}

/// Default column name for a member: the member name itself.
pub fn default_column_name(member: &str) -> String {
    member.to_string()
}

/// Default foreign-key column referencing `name`: `<name>_id`.
pub fn default_foreign_key_column(name: &str) -> String {
    format!("{}_id", name)
}

/// Default join table for a many-to-many association: `<child>To<parent>`.
pub fn default_join_table_name(child: &str, parent: &str) -> String {
    format!("{}To{}", child, parent)
}

/// Default foreign-key constraint name: `FK_<parent>To<member>`.
pub fn default_foreign_key_constraint(parent: &str, member: &str) -> String {
    format!("FK_{}To{}", parent, member)
}
