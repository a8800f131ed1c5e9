use super::Error;
use crate::ValueTy;

/// Error when a member's value type has no storage type mapping and no
/// custom type descriptor applies.
#[derive(Debug)]
pub(super) struct UnresolvableTypeError {
    entity: Box<str>,
    member: Box<str>,
    ty: Box<str>,
}

impl std::error::Error for UnresolvableTypeError {}

impl core::fmt::Display for UnresolvableTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no storage type mapping for `{}` (member `{}` of `{}`)",
            self.ty, self.member, self.entity
        )
    }
}

impl Error {
    /// Creates an unresolvable type error.
    pub fn unresolvable_type(
        entity: impl Into<String>,
        member: impl Into<String>,
        ty: &ValueTy,
    ) -> Error {
        Error::from(super::ErrorKind::UnresolvableType(UnresolvableTypeError {
            entity: entity.into().into(),
            member: member.into().into(),
            ty: ty.to_string().into(),
        }))
    }

    /// Returns `true` if this error reports a type without a storage mapping.
    pub fn is_unresolvable_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnresolvableType(_))
    }
}
