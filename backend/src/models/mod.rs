pub mod launch;
pub mod selection;

pub use launch::*;
pub use selection::*;
