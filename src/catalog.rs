//! The course catalog.
//!
//! A `Catalog` associates categories (the keys) with the list of courses
//! filed under each category. Keys are always stored in uppercase and
//! enumerate in ascending alphabetical order; within a category, courses keep
//! the order in which they were added.

use crate::error::CatalogError;
use crate::model::{Course, Level};
use crate::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

/// The header line of the textual report.
const REPORT_HEADER: &str = "Online courses offered by the platform\n\n";

/// The separator printed after each category in the report.
const REPORT_SEPARATOR: &str = "---------------------------------------\n";

/// An in-memory course catalog grouped by category.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Catalog {
    courses: BTreeMap<String, Vec<Course>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `course` under `category`.
    ///
    /// The category is matched case-insensitively: the key is uppercased
    /// before use. If the category already exists the course is appended to
    /// the end of its list, otherwise a new entry is created.
    pub fn add_course(&mut self, category: &str, course: Course) {
        self.courses
            .entry(category.to_uppercase())
            .or_default()
            .push(course);
    }

    /// Returns the number of courses in `category`, or `None` if the
    /// category is not in the catalog.
    pub fn count(&self, category: &str) -> Option<usize> {
        self.courses.get(&category.to_uppercase()).map(Vec::len)
    }

    /// Returns the number of courses in `category`, or `-1` if the category
    /// is not in the catalog.
    ///
    /// The `-1` sentinel is kept for compatibility with the historical
    /// interface; prefer [`Catalog::count`] in new code.
    pub fn total_courses_in(&self, category: &str) -> i64 {
        match self.count(category) {
            Some(n) => n as i64,
            None => -1,
        }
    }

    /// Returns every category key, in ascending alphabetical order.
    ///
    /// The returned collection is freshly allocated and stays valid across
    /// later mutations of the catalog.
    pub fn categories(&self) -> Vec<String> {
        self.courses.keys().cloned().collect()
    }

    /// Returns copies of the courses filed under `category`, in insertion
    /// order. Empty if the category is not in the catalog.
    pub fn courses_in(&self, category: &str) -> Vec<Course> {
        self.courses
            .get(&category.to_uppercase())
            .cloned()
            .unwrap_or_default()
    }

    /// Total number of courses across every category.
    pub fn len(&self) -> usize {
        self.courses.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every course of the given `level` from `category` and returns
    /// the removed names in alphabetical order.
    ///
    /// The surviving courses keep their relative order. Fails with
    /// [`CatalogError::CategoryNotFound`] when the category does not exist,
    /// in which case the catalog is untouched.
    pub fn delete_courses_of(&mut self, category: &str, level: Level) -> Result<BTreeSet<String>> {
        let key = category.to_uppercase();
        let courses = self
            .courses
            .get_mut(&key)
            .ok_or(CatalogError::CategoryNotFound(key))?;

        let mut removed = BTreeSet::new();
        courses.retain(|course| {
            if course.level() == level {
                removed.insert(course.name().to_string());
                false
            } else {
                true
            }
        });
        Ok(removed)
    }

    /// Returns the name of the earliest-published course in the catalog, or
    /// an empty string when the catalog has no courses.
    ///
    /// Among courses sharing the earliest date, the first one encountered in
    /// (category-ascending, insertion) order wins.
    pub fn oldest_course(&self) -> String {
        let mut oldest_name = String::new();
        let mut oldest_date = NaiveDate::MAX;
        for courses in self.courses.values() {
            for course in courses {
                if course.published() < oldest_date {
                    oldest_date = course.published();
                    oldest_name = course.name().to_string();
                }
            }
        }
        oldest_name
    }

    /// Renders the whole catalog as one text block: a header, then each
    /// category in key order with its courses, each followed by a separator
    /// line. Accumulates into a single buffer since catalogs can hold many
    /// courses.
    pub fn report(&self) -> String {
        let mut out = String::from(REPORT_HEADER);
        for (category, courses) in &self.courses {
            out.push_str(category);
            out.push('\n');
            for course in courses {
                let _ = writeln!(out, "  {course}");
            }
            out.push_str(REPORT_SEPARATOR);
        }
        out
    }
}
