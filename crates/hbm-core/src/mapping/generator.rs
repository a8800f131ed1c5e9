/// Identity generator strategy, rendered as the `class` attribute of the
/// nested `generator` element.
///
/// Only parameterless strategies are modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Generator {
    #[default]
    Identity,
    Native,
    Assigned,
    Increment,
    Guid,
    GuidComb,
}

impl Generator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Generator::Identity => "identity",
            Generator::Native => "native",
            Generator::Assigned => "assigned",
            Generator::Increment => "increment",
            Generator::Guid => "guid",
            Generator::GuidComb => "guid.comb",
        }
    }
}
