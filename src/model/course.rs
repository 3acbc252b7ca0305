//! Course value type.
//!
//! A `Course` is an immutable record of one course offering: its name, the
//! date it was published and its difficulty level. Equality is field
//! equality; there is no identity beyond the fields.

use crate::error::CatalogError;
use crate::model::Level;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// The day/month/year format used by the course files, e.g. `3/12/2019`.
const DATE_FORMAT: &str = "%d/%m/%Y";

/// A single course offering.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Course {
    name: String,
    published: NaiveDate,
    level: Level,
}

impl Course {
    pub fn new(name: impl Into<String>, published: NaiveDate, level: Level) -> Self {
        Self {
            name: name.into(),
            published,
            level,
        }
    }

    /// Builds a `Course` from raw text fields.
    ///
    /// The date must be in `dd/mm/yyyy` form and the level must name a known
    /// difficulty (case-insensitive). Surrounding whitespace is ignored.
    pub fn parse(name: &str, date: &str, level: &str) -> Result<Self, CatalogError> {
        let date = date.trim();
        let published = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| CatalogError::InvalidDate(date.to_string()))?;
        let level = level.parse()?;
        Ok(Self::new(name.trim(), published, level))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn published(&self) -> NaiveDate {
        self.published
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Display for Course {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : {} : {}",
            self.name,
            self.published.format(DATE_FORMAT),
            self.level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let course = Course::parse("sql essential training", "3/12/2019", "principiante").unwrap();
        assert_eq!(course.name(), "sql essential training");
        assert_eq!(course.published(), NaiveDate::from_ymd_opt(2019, 12, 3).unwrap());
        assert_eq!(course.level(), Level::Beginner);
    }

    #[test]
    fn test_parse_trims_fields() {
        let course = Course::parse("  rust fundamentals  ", " 9/11/2021 ", " intermediate ").unwrap();
        assert_eq!(course.name(), "rust fundamentals");
        assert_eq!(course.published(), NaiveDate::from_ymd_opt(2021, 11, 9).unwrap());
    }

    #[test]
    fn test_parse_invalid_date() {
        let err = Course::parse("x", "31/13/2019", "beginner").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidDate(_)));
    }

    #[test]
    fn test_parse_non_numeric_date() {
        let err = Course::parse("x", "yesterday", "beginner").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidDate(bad) if bad == "yesterday"));
    }

    #[test]
    fn test_parse_invalid_level() {
        let err = Course::parse("x", "1/1/2020", "guru").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidLevel(_)));
    }

    #[test]
    fn test_display() {
        let course = Course::new(
            "seo essentials",
            NaiveDate::from_ymd_opt(2020, 3, 18).unwrap(),
            Level::Beginner,
        );
        assert_eq!(course.to_string(), "seo essentials : 18/03/2020 : BEGINNER");
    }
}
