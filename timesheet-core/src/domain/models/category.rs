use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// What kind of work an entry records.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    #[default]
    Development,
    Support,
    Meeting,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Development,
        Category::Support,
        Category::Meeting,
        Category::Other,
    ];
}

/// Category filter as offered by the UI: either every category or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    Any,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }

    /// Cycle Any -> Development -> Support -> Meeting -> Other -> Any.
    pub fn next(self) -> Self {
        match self {
            CategoryFilter::Any => CategoryFilter::Only(Category::ALL[0]),
            CategoryFilter::Only(current) => {
                let idx = Category::ALL
                    .iter()
                    .position(|c| *c == current)
                    .unwrap_or_default();
                match Category::ALL.get(idx + 1) {
                    Some(next) => CategoryFilter::Only(*next),
                    None => CategoryFilter::Any,
                }
            }
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::Any => write!(f, "Any"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("any") {
            return Ok(CategoryFilter::Any);
        }
        Category::from_str(s.trim()).map(CategoryFilter::Only)
    }
}
