use super::{Cascade, Fetch};
use crate::{naming, Member, TypeIdent};

/// Maps a collection member as a one-to-many or many-to-many association.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Collection {
    /// The mapped member.
    pub member: Member,

    /// Association shape: keyed on the child table, or through a join table.
    pub kind: AssociationKind,

    /// Rendered element; a bag when unset.
    pub repr: CollectionRepr,

    /// Identity of the child class.
    pub child: TypeIdent,

    /// Override for the key column referencing the owner; `<owner>_id`
    /// when unset.
    pub parent_key_column: Option<String>,

    /// Override for the column referencing the child (many-to-many);
    /// `<child>_id` when unset.
    pub child_key_column: Option<String>,

    /// Join-table override (many-to-many); `<child>To<owner>` when unset.
    pub table: Option<String>,

    /// Rendered only when set.
    pub cascade: Option<Cascade>,

    /// Rendered only when set, on the nested many-to-many element.
    pub fetch: Option<Fetch>,

    /// Rendered only when set.
    pub lazy: Option<bool>,

    /// Rendered only when set.
    pub inverse: Option<bool>,
}

/// Association shape of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssociationKind {
    OneToMany,
    ManyToMany,
}

/// Collection representation, naming the rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollectionRepr {
    #[default]
    Bag,
    Set,
}

impl CollectionRepr {
    pub fn element_name(&self) -> &'static str {
        match self {
            CollectionRepr::Bag => "bag",
            CollectionRepr::Set => "set",
        }
    }
}

impl Collection {
    pub(crate) fn new(member: Member, kind: AssociationKind, child: TypeIdent) -> Collection {
        Collection {
            member,
            kind,
            repr: CollectionRepr::default(),
            child,
            parent_key_column: None,
            child_key_column: None,
            table: None,
            cascade: None,
            fetch: None,
            lazy: None,
            inverse: None,
        }
    }

    /// Resolved join-table name. Meaningful for many-to-many associations;
    /// one-to-many collections render no table.
    pub fn table_name(&self, owner: &str) -> String {
        match &self.table {
            Some(table) => table.clone(),
            None => naming::default_join_table_name(&self.child.name, owner),
        }
    }

    /// Resolved key column referencing the owner.
    pub fn parent_key_column(&self, owner: &str) -> String {
        match &self.parent_key_column {
            Some(column) => column.clone(),
            None => naming::default_foreign_key_column(owner),
        }
    }

    /// Resolved column referencing the child.
    pub fn child_key_column(&self) -> String {
        match &self.child_key_column {
            Some(column) => column.clone(),
            None => naming::default_foreign_key_column(&self.child.name),
        }
    }

    /// Renders the collection as a `set`.
    pub fn as_set(&mut self) -> &mut Self {
        self.repr = CollectionRepr::Set;
        self
    }

    /// Renders the collection as a `bag` (the default).
    pub fn as_bag(&mut self) -> &mut Self {
        self.repr = CollectionRepr::Bag;
        self
    }

    /// Overrides the key column referencing the owner.
    pub fn with_parent_key_column(&mut self, column: impl Into<String>) -> &mut Self {
        self.parent_key_column = Some(column.into());
        self
    }

    /// Overrides the column referencing the child.
    pub fn with_child_key_column(&mut self, column: impl Into<String>) -> &mut Self {
        self.child_key_column = Some(column.into());
        self
    }

    /// Overrides the join-table name.
    pub fn with_table(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = Some(table.into());
        self
    }

    /// Sets the cascade style.
    pub fn cascade(&mut self, cascade: Cascade) -> &mut Self {
        self.cascade = Some(cascade);
        self
    }

    /// Sets the fetch strategy.
    pub fn fetch(&mut self, fetch: Fetch) -> &mut Self {
        self.fetch = Some(fetch);
        self
    }

    /// Marks the collection lazily loaded.
    pub fn lazy_load(&mut self) -> &mut Self {
        self.lazy = Some(true);
        self
    }

    /// Marks the collection as the inverse side of the association.
    pub fn is_inverse(&mut self) -> &mut Self {
        self.inverse = Some(true);
        self
    }
}
