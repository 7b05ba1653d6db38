//! Timesheet domain: entries, overlap validation and the dirty/retry save
//! protocol, plus the storage adapters the binary wires together.

pub mod adapters;
pub mod domain;

pub use domain::{
    filter::{filter_by, DisplayFilter, EntryFilter},
    models::{
        format_date, format_time, parse_date, parse_time, Category, CategoryFilter, EditError,
        Entry, EntryField, EntryId, EntryRecord, FieldEdit,
    },
    ports::{
        inbound::TimesheetService,
        outbound::{EntryStore, IdGenerator},
    },
    services::TimesheetServiceImpl,
    timesheet::{Effect, Event, Timesheet},
    validation::{check, Rejection},
    StoreError, TimesheetError,
};
