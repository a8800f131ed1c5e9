pub mod compiler;
pub use compiler::Compiler;

pub mod doc;
pub use doc::{Document, Element};

mod writer;
