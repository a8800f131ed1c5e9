use super::{Cascade, Fetch};
use crate::{naming, Member};

/// Maps a member holding a reference to another mapped class onto a
/// foreign-key column.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManyToOne {
    /// The mapped member.
    pub member: Member,

    /// Explicit column override; `<member>_id` when unset.
    pub column: Option<String>,

    /// Rendered only when set.
    pub cascade: Option<Cascade>,

    /// Rendered only when set.
    pub fetch: Option<Fetch>,

    /// Foreign-key constraint naming; no attribute when unset.
    pub foreign_key: Option<ForeignKey>,
}

/// How a requested foreign-key constraint is named.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ForeignKey {
    /// `FK_<owner>To<member>`, derived at compilation.
    Derived,
    /// Explicit constraint name, passed through verbatim.
    Named(String),
}

impl ManyToOne {
    pub(crate) fn new(member: Member) -> ManyToOne {
        ManyToOne {
            member,
            column: None,
            cascade: None,
            fetch: None,
            foreign_key: None,
        }
    }

    /// Resolved foreign-key column name.
    pub fn column_name(&self) -> String {
        match &self.column {
            Some(column) => column.clone(),
            None => naming::default_foreign_key_column(&self.member.name),
        }
    }

    /// Resolved constraint name, if a foreign key was requested.
    pub fn foreign_key_name(&self, owner: &str) -> Option<String> {
        match &self.foreign_key {
            Some(ForeignKey::Derived) => Some(naming::default_foreign_key_constraint(
                owner,
                &self.member.name,
            )),
            Some(ForeignKey::Named(name)) => Some(name.clone()),
            None => None,
        }
    }

    /// Overrides the column name.
    pub fn column(&mut self, column: impl Into<String>) -> &mut Self {
        self.column = Some(column.into());
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

    /// Requests a foreign-key constraint with the derived name.
    pub fn with_foreign_key(&mut self) -> &mut Self {
        self.foreign_key = Some(ForeignKey::Derived);
        self
    }

    /// Requests a foreign-key constraint with an explicit name.
    pub fn with_foreign_key_named(&mut self, name: impl Into<String>) -> &mut Self {
        self.foreign_key = Some(ForeignKey::Named(name.into()));
        self
    }
}
