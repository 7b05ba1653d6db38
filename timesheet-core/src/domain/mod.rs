mod error;
pub mod defaults;
pub mod filter;
pub mod models;
pub mod ordering;
pub mod ports;
pub mod services;
pub mod timesheet;
pub mod validation;

pub use error::*;
