use super::{Collection, Component, ManyToOne, OneToOne, Property};

/// One mapping declaration inside a class, component, subclass, or join
/// scope.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rule {
    Property(Property),
    ManyToOne(ManyToOne),
    OneToOne(OneToOne),
    Collection(Collection),
    Component(Component),
}

impl Rule {
    pub fn is_property(&self) -> bool {
        matches!(self, Self::Property(..))
    }

    pub fn as_property(&self) -> Option<&Property> {
        match self {
            Self::Property(property) => Some(property),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_property_mut(&mut self) -> &mut Property {
        match self {
            Self::Property(property) => property,
            _ => panic!("expected property rule, but was {self:?}"),
        }
    }

    pub fn is_many_to_one(&self) -> bool {
        matches!(self, Self::ManyToOne(..))
    }

    pub fn as_many_to_one(&self) -> Option<&ManyToOne> {
        match self {
            Self::ManyToOne(many_to_one) => Some(many_to_one),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_many_to_one_mut(&mut self) -> &mut ManyToOne {
        match self {
            Self::ManyToOne(many_to_one) => many_to_one,
            _ => panic!("expected many-to-one rule, but was {self:?}"),
        }
    }

    pub fn is_one_to_one(&self) -> bool {
        matches!(self, Self::OneToOne(..))
    }

    pub fn as_one_to_one(&self) -> Option<&OneToOne> {
        match self {
            Self::OneToOne(one_to_one) => Some(one_to_one),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_one_to_one_mut(&mut self) -> &mut OneToOne {
        match self {
            Self::OneToOne(one_to_one) => one_to_one,
            _ => panic!("expected one-to-one rule, but was {self:?}"),
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, Self::Collection(..))
    }

    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            Self::Collection(collection) => Some(collection),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_collection_mut(&mut self) -> &mut Collection {
        match self {
            Self::Collection(collection) => collection,
            _ => panic!("expected collection rule, but was {self:?}"),
        }
    }

    pub fn is_component(&self) -> bool {
        matches!(self, Self::Component(..))
    }

    pub fn as_component(&self) -> Option<&Component> {
        match self {
            Self::Component(component) => Some(component),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_component_mut(&mut self) -> &mut Component {
        match self {
            Self::Component(component) => component,
            _ => panic!("expected component rule, but was {self:?}"),
        }
    }
}
