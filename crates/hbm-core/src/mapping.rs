mod cascade;
pub use cascade::Cascade;

mod class;
pub use class::ClassMapping;

mod collection;
pub use collection::{AssociationKind, Collection, CollectionRepr};

mod component;
pub use component::Component;

mod discriminator;
pub use discriminator::Discriminator;

mod fetch;
pub use fetch::Fetch;

mod generator;
pub use generator::Generator;

mod id;
pub use id::IdMapping;

mod join;
pub use join::Join;

mod many_to_one;
pub use many_to_one::{ForeignKey, ManyToOne};

mod one_to_one;
pub use one_to_one::OneToOne;

mod property;
pub use property::{CustomType, Property};

mod rule;
pub use rule::Rule;

mod subclass;
pub use subclass::Subclass;
