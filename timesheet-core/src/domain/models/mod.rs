mod category;
mod edit;
mod entry;
mod format;
mod ids;

pub use category::*;
pub use edit::*;
pub use entry::*;
pub use format::{format_date, format_time, parse_date, parse_time};
pub use ids::*;
