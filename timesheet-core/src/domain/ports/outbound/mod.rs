mod entry_store;
mod id_generator;

pub use entry_store::*;
pub use id_generator::*;
