use super::{Cascade, Fetch, ForeignKey};
use crate::{naming, Member, TypeIdent};

/// Maps a one-to-one association onto the target class.
///
/// Unlike [`ManyToOne`](super::ManyToOne) there is no column; the element
/// names the target class instead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OneToOne {
    /// The mapped member.
    pub member: Member,

    /// Identity of the associated class, from the member's declared type.
    pub target: TypeIdent,

    /// Rendered only when set.
    pub cascade: Option<Cascade>,

    /// Rendered only when set.
    pub fetch: Option<Fetch>,

    /// Foreign-key constraint naming; no attribute when unset.
    pub foreign_key: Option<ForeignKey>,
}

impl OneToOne {
    pub(crate) fn new(member: Member, target: TypeIdent) -> OneToOne {
        OneToOne {
            member,
            target,
            cascade: None,
            fetch: None,
            foreign_key: None,
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
