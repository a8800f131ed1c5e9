mod builder;
pub use builder::{ClassMap, Discriminating, RuleSet};

mod entity;
pub use entity::{EntityDef, Member};

mod error;
pub use error::Error;

mod ident;
pub use ident::TypeIdent;

pub mod mapping;
pub use mapping::ClassMapping;

pub mod naming;

mod ty;
pub use ty::{TypeMap, ValueTy};

/// A Result type alias that uses this crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
