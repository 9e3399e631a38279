//! Check settings: which validator runs on which manifest path

mod defaults;
mod overrides;

pub use defaults::*;
pub use overrides::*;
