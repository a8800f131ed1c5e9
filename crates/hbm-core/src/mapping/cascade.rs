/// Cascade style for an association, rendered only when explicitly set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cascade {
    All,
    None,
    SaveUpdate,
    Delete,
}

impl Cascade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cascade::All => "all",
            Cascade::None => "none",
            Cascade::SaveUpdate => "save-update",
            Cascade::Delete => "delete",
        }
    }
}
