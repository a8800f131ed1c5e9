/// Identity of a modeled type: short name, namespace, and owning assembly.
///
/// Mapping documents embed the qualified form wherever the persistence
/// engine must load the type by name (`class` attributes on associations
/// and subclasses); the short name is used for the `class` element itself
/// and for artifact naming.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeIdent {
    /// Short type name, e.g. `MappedObject`.
    pub name: String,

    /// Namespace the type is declared in.
    pub namespace: String,

    /// Assembly the type is loaded from.
    pub assembly: String,
}

impl TypeIdent {
    pub fn new(
        name: impl Into<String>,
        namespace: impl Into<String>,
        assembly: impl Into<String>,
    ) -> TypeIdent {
        TypeIdent {
            name: name.into(),
            namespace: namespace.into(),
            assembly: assembly.into(),
        }
    }

    /// Assembly-qualified name: `"{namespace}.{name}, {assembly}"`.
    pub fn qualified(&self) -> String {
        format!("{}.{}, {}", self.namespace, self.name, self.assembly)
    }
}
