//! Source scanning: import extraction, specifier resolution and
//! root-module classification.

pub mod imports;
pub mod resolver;
pub mod root_module;

pub use imports::{extract_imports, is_relative};
pub use resolver::SpecifierResolver;
pub use root_module::root_module;
