/// Language module - structured value tree and SCSS declaration emission
pub mod values;
pub mod writer;

pub use values::Value;
pub use writer::{build_declarations, value_to_literal};
