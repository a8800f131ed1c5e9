use super::Generator;
use crate::{naming, Member};

/// Identity rule: maps the primary-key member and its generator strategy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdMapping {
    /// The identity member.
    pub member: Member,

    /// Explicit column override; the member name when unset.
    pub column: Option<String>,

    /// Generator strategy; `identity` when unset.
    pub generator: Option<Generator>,
}

impl IdMapping {
    pub(crate) fn new(member: Member) -> IdMapping {
        IdMapping {
            member,
            column: None,
            generator: None,
        }
    }

    /// Resolved column name.
    pub fn column_name(&self) -> String {
        match &self.column {
            Some(column) => column.clone(),
            None => naming::default_column_name(&self.member.name),
        }
    }

    /// Resolved generator class literal.
    pub fn generator_class(&self) -> &'static str {
        self.generator.unwrap_or_default().as_str()
    }

    /// Overrides the column name.
    pub fn column(&mut self, column: impl Into<String>) -> &mut Self {
        self.column = Some(column.into());
        self
    }

    /// Selects the generator strategy.
    pub fn generated_by(&mut self, generator: Generator) -> &mut Self {
        self.generator = Some(generator);
        self
    }
}
