mod file;
mod ids;
mod memory;

pub use file::*;
pub use ids::*;
pub use memory::*;
