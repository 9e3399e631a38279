//! CLI command handlers

mod check;
mod value;
mod vocab;

pub use check::*;
pub use value::*;
pub use vocab::*;
