use std::{fmt, str::FromStr};

use thiserror::Error;
use time::{Date, Time};

use super::{format, Category};

/// The editable fields of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    Date,
    Start,
    End,
    Category,
    Description,
}

impl EntryField {
    pub const ALL: [EntryField; 5] = [
        EntryField::Date,
        EntryField::Start,
        EntryField::End,
        EntryField::Category,
        EntryField::Description,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EntryField::Date => "date",
            EntryField::Start => "start",
            EntryField::End => "end",
            EntryField::Category => "category",
            EntryField::Description => "description",
        }
    }

    pub fn next(self) -> Self {
        match self {
            EntryField::Date => EntryField::Start,
            EntryField::Start => EntryField::End,
            EntryField::End => EntryField::Category,
            EntryField::Category => EntryField::Description,
            EntryField::Description => EntryField::Date,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            EntryField::Date => EntryField::Description,
            EntryField::Start => EntryField::Date,
            EntryField::End => EntryField::Start,
            EntryField::Category => EntryField::End,
            EntryField::Description => EntryField::Category,
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntryField {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntryField::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EditError::UnknownField(s.to_string()))
    }
}

/// A single field change, carrying the typed new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Date(Date),
    Start(Time),
    End(Time),
    Category(Category),
    Description(String),
}

impl FieldEdit {
    /// Build an edit from the raw text a UI reported for `field`.
    pub fn parse(field: EntryField, raw: &str) -> Result<Self, EditError> {
        match field {
            EntryField::Date => format::parse_date(raw)
                .map(FieldEdit::Date)
                .ok_or_else(|| EditError::InvalidDate(raw.to_string())),
            EntryField::Start => format::parse_time(raw)
                .map(FieldEdit::Start)
                .ok_or_else(|| EditError::InvalidTime(raw.to_string())),
            EntryField::End => format::parse_time(raw)
                .map(FieldEdit::End)
                .ok_or_else(|| EditError::InvalidTime(raw.to_string())),
            EntryField::Category => Category::from_str(raw.trim())
                .map(FieldEdit::Category)
                .map_err(|_| EditError::InvalidCategory(raw.to_string())),
            EntryField::Description => Ok(FieldEdit::Description(raw.to_string())),
        }
    }

    /// Same as [`FieldEdit::parse`] with the field given by name.
    pub fn parse_named(field: &str, raw: &str) -> Result<Self, EditError> {
        Self::parse(field.parse()?, raw)
    }

    pub fn field(&self) -> EntryField {
        match self {
            FieldEdit::Date(_) => EntryField::Date,
            FieldEdit::Start(_) => EntryField::Start,
            FieldEdit::End(_) => EntryField::End,
            FieldEdit::Category(_) => EntryField::Category,
            FieldEdit::Description(_) => EntryField::Description,
        }
    }

    /// Whether the edit changes interval data, and so other entries' validity.
    pub fn touches_interval(&self) -> bool {
        matches!(
            self,
            FieldEdit::Date(_) | FieldEdit::Start(_) | FieldEdit::End(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid category {0:?}, expected Development, Support, Meeting or Other")]
    InvalidCategory(String),
}
