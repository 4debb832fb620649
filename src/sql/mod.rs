//! Safe SQL builder: identifiers from code and validated config only, values as parameters.

mod builder;
pub mod tables;
pub use builder::*;
pub use tables::*;
