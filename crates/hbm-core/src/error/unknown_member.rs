use super::Error;

/// Error when a mapping call names a member the entity does not declare,
/// or one whose declared type cannot supply what the call needs.
#[derive(Debug)]
pub(super) struct UnknownMemberError {
    entity: Box<str>,
    member: Box<str>,
    kind: UnknownMemberKind,
}

#[derive(Debug)]
enum UnknownMemberKind {
    /// No member with this name is declared.
    NotDeclared,
    /// The member exists but does not reference a mapped class.
    NotAReference,
    /// The member exists but is not a collection of a mapped class.
    NotACollection,
}

impl std::error::Error for UnknownMemberError {}

impl core::fmt::Display for UnknownMemberError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.kind {
            UnknownMemberKind::NotDeclared => {
                write!(f, "unknown member `{}` on `{}`", self.member, self.entity)
            }
            UnknownMemberKind::NotAReference => write!(
                f,
                "member `{}` of `{}` does not reference a mapped class",
                self.member, self.entity
            ),
            UnknownMemberKind::NotACollection => write!(
                f,
                "member `{}` of `{}` is not a collection of a mapped class",
                self.member, self.entity
            ),
        }
    }
}

impl Error {
    /// Creates an error for a member name the entity does not declare.
    pub fn unknown_member(entity: impl Into<String>, member: impl Into<String>) -> Error {
        Error::unknown_member_kind(entity, member, UnknownMemberKind::NotDeclared)
    }

    /// Creates an error for a member whose declared type is not a reference
    /// to a mapped class.
    pub fn member_not_a_reference(entity: impl Into<String>, member: impl Into<String>) -> Error {
        Error::unknown_member_kind(entity, member, UnknownMemberKind::NotAReference)
    }

    /// Creates an error for a member whose declared type is not a collection
    /// of a mapped class.
    pub fn member_not_a_collection(entity: impl Into<String>, member: impl Into<String>) -> Error {
        Error::unknown_member_kind(entity, member, UnknownMemberKind::NotACollection)
    }

    fn unknown_member_kind(
        entity: impl Into<String>,
        member: impl Into<String>,
        kind: UnknownMemberKind,
    ) -> Error {
        Error::from(super::ErrorKind::UnknownMember(UnknownMemberError {
            entity: entity.into().into(),
            member: member.into().into(),
            kind,
        }))
    }

    /// Returns `true` if this error reports a failed member resolution.
    pub fn is_unknown_member(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownMember(_))
    }
}
