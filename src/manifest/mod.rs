//! Manifest decoding: values, record schemas and document parsing

mod parser;
mod schema;
mod value;

pub use parser::*;
pub use schema::*;
pub use value::*;
