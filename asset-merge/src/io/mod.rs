//! Reading input files and writing merge results

mod export;
mod loader;

pub use export::*;
pub use loader::*;
