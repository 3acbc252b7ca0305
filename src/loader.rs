//! Loads course records from colon-delimited text into a [`Catalog`].
//!
//! Each line of the input holds one course:
//!
//! ```text
//! category : name : dd/mm/yyyy : level
//! ```
//!
//! Whitespace around every field is trimmed before use.

use crate::catalog::Catalog;
use crate::model::Course;
use crate::Result;
use anyhow::Context;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::io;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// One raw line of a course file, before any field is interpreted.
#[derive(Debug, Deserialize)]
struct RawCourse {
    category: String,
    name: String,
    date: String,
    level: String,
}

/// Opens the course input: the file at `path`, or stdin when no path is
/// given.
pub fn open(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    Ok(match path {
        None => Box::new(BufReader::new(io::stdin())),
        Some(path) => {
            let f = std::fs::File::open(path)
                .with_context(|| format!("unable to open course file {}", path.display()))?;
            Box::new(BufReader::new(f))
        }
    })
}

/// Reads every course record from `reader` into a fresh catalog.
///
/// Fails on the first malformed record; a partially read catalog is never
/// returned.
pub fn load(reader: impl Read) -> Result<Catalog> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b':')
        .has_headers(false)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut catalog = Catalog::new();
    for (ix, result) in rdr.deserialize().enumerate() {
        let record: RawCourse =
            result.with_context(|| format!("malformed course record at line {}", ix + 1))?;
        let course = Course::parse(&record.name, &record.date, &record.level)
            .with_context(|| format!("invalid course record at line {}", ix + 1))?;
        catalog.add_course(&record.category, course);
    }

    debug!(
        "loaded {} courses in {} categories",
        catalog.len(),
        catalog.categories().len()
    );
    Ok(catalog)
}

/// Convenience: [`open`] followed by [`load`].
pub fn load_path(path: Option<&Path>) -> Result<Catalog> {
    load(open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Level;
    use chrono::NaiveDate;
    use std::io::Write as _;

    #[test]
    fn test_load_round_trip() {
        let input = "bases de datos: sql essential training: 3/12/2019 : principiante\n";
        let catalog = load(input.as_bytes()).unwrap();

        assert_eq!(catalog.total_courses_in("bases de datos"), 1);
        let courses = catalog.courses_in("BASES DE DATOS");
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].name(), "sql essential training");
        assert_eq!(courses[0].level(), Level::Beginner);
        assert_eq!(
            courses[0].published(),
            NaiveDate::from_ymd_opt(2019, 12, 3).unwrap()
        );
    }

    #[test]
    fn test_load_groups_by_category_in_insertion_order() {
        let input = "\
            cms: drupal site building: 12/10/2019: intermedio\n\
            bases de datos: mongodb essential: 15/6/2020: avanzado\n\
            cms: wordpress from scratch: 7/4/2018: beginner\n";
        let catalog = load(input.as_bytes()).unwrap();

        assert_eq!(catalog.categories(), vec!["BASES DE DATOS", "CMS"]);
        let cms: Vec<String> = catalog
            .courses_in("cms")
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(cms, ["drupal site building", "wordpress from scratch"]);
    }

    #[test]
    fn test_load_empty_input() {
        let catalog = load("".as_bytes()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_bad_date_fails() {
        let input = "cms: wordpress from scratch: 2018-04-07: beginner\n";
        let err = load(input.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_load_bad_level_fails() {
        let input = "cms: wordpress from scratch: 7/4/2018: ninja\n";
        assert!(load(input.as_bytes()).is_err());
    }

    #[test]
    fn test_load_path_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "programacion: rust fundamentals: 9/11/2021: intermediate").unwrap();
        file.flush().unwrap();

        let catalog = load_path(Some(file.path())).unwrap();
        assert_eq!(catalog.total_courses_in("PROGRAMACION"), 1);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = load_path(Some(Path::new("/no/such/file.txt"))).unwrap_err();
        assert!(err.to_string().contains("unable to open course file"));
    }
}
