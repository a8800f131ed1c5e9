use super::Error;

/// Error when compiling a mapping that declares no id rule.
#[derive(Debug)]
pub(super) struct MissingIdentityError {
    entity: Box<str>,
}

impl std::error::Error for MissingIdentityError {}

impl core::fmt::Display for MissingIdentityError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing identity: mapping for `{}` declares no id rule",
            self.entity
        )
    }
}

impl Error {
    /// Creates a missing identity error.
    pub fn missing_identity(entity: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingIdentity(MissingIdentityError {
            entity: entity.into().into(),
        }))
    }

    /// Returns `true` if this error reports a mapping without an id rule.
    pub fn is_missing_identity(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingIdentity(_))
    }
}
