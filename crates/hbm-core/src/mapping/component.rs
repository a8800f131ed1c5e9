use super::Rule;
use crate::Member;

/// Maps a member onto a group of columns described by nested rules.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Component {
    /// The mapped member.
    pub member: Member,

    /// Nested rules, resolved against the component type's own definition.
    pub rules: Vec<Rule>,

    /// Whether component columns appear in inserts. Always rendered.
    pub insert: bool,

    /// Whether component columns appear in updates. Always rendered.
    pub update: bool,
}

impl Component {
    pub(crate) fn new(member: Member) -> Component {
        Component {
            member,
            rules: vec![],
            insert: true,
            update: true,
        }
    }

    /// Sets whether component columns appear in inserts.
    pub fn insert(&mut self, insert: bool) -> &mut Self {
        self.insert = insert;
        self
    }

    /// Sets whether component columns appear in updates.
    pub fn update(&mut self, update: bool) -> &mut Self {
        self.update = update;
        self
    }
}
