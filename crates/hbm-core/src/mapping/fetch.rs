/// Fetch strategy for an association, rendered only when explicitly set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fetch {
    Join,
    Select,
}

impl Fetch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fetch::Join => "join",
            Fetch::Select => "select",
        }
    }
}
