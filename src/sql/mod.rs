//! Safe SQL builder: identifiers from record descriptors only, values as parameters.

mod builder;
pub use builder::*;
