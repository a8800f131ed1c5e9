use super::Rule;

/// Spans the mapped class across a secondary table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Join {
    /// Secondary table name, passed through verbatim.
    pub table: String,

    /// Rules for members stored in the secondary table.
    pub rules: Vec<Rule>,
}

impl Join {
    pub(crate) fn new(table: impl Into<String>) -> Join {
        Join {
            table: table.into(),
            rules: vec![],
        }
    }
}
