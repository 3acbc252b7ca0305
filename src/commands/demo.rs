//! Demo command handler.
//!
//! Reproduces the original demonstration flow of the course platform: print
//! the report, print the oldest course, delete two scripted (category, level)
//! pairs showing the removed names, then print the report again.

use crate::args::Common;
use crate::commands::Out;
use crate::loader;
use crate::model::Level;
use crate::Result;
use std::fmt::Write as _;

/// The (category, level) pairs the demonstration deletes. The input file
/// must contain both categories.
const DELETIONS: [(&str, Level); 2] = [
    ("bases de datos", Level::Advanced),
    ("cms", Level::Intermediate),
];

pub fn demo(common: &Common) -> Result<Out<()>> {
    let mut catalog = loader::load_path(common.file())?;

    let mut out = String::new();
    out.push_str(&catalog.report());
    let _ = writeln!(out, "Oldest course: {}\n", catalog.oldest_course());
    out.push_str("------------------\n");

    for (category, level) in DELETIONS {
        let _ = writeln!(
            out,
            "Deleting courses of {} at level {}",
            category.to_uppercase(),
            level
        );
        let removed: Vec<String> = catalog.delete_courses_of(category, level)?.into_iter().collect();
        let _ = writeln!(out, "Deleted = [{}]\n", removed.join(", "));
    }

    out.push_str("------------------\n\n");
    out.push_str("After deleting ....\n");
    out.push_str(&catalog.report());
    Ok(Out::new_message(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_common;

    const INPUT: &str = "\
        bases de datos: sql essential training: 3/12/2019: principiante\n\
        bases de datos: postgresql advanced queries: 1/9/2020: avanzado\n\
        cms: drupal site building: 12/10/2019: intermedio\n\
        cms: wordpress from scratch: 7/4/2018: beginner\n";

    #[test]
    fn test_demo_flow() {
        let (common, _file) = test_common(INPUT);
        let out = demo(&common).unwrap();
        let message = out.message();

        assert_eq!(message.matches("Online courses offered by the platform").count(), 2);
        assert!(message.contains("Oldest course: wordpress from scratch"));
        assert!(message.contains("Deleting courses of BASES DE DATOS at level ADVANCED"));
        assert!(message.contains("Deleted = [postgresql advanced queries]"));
        assert!(message.contains("Deleted = [drupal site building]"));
        assert!(message.contains("After deleting ...."));

        // The deleted courses are gone from the second report.
        let after = message.rfind("After deleting").unwrap();
        assert!(!message[after..].contains("postgresql advanced queries"));
        assert!(message[after..].contains("sql essential training"));
    }

    #[test]
    fn test_demo_requires_the_scripted_categories() {
        let (common, _file) = test_common("programacion: rust fundamentals: 9/11/2021: advanced\n");
        assert!(demo(&common).is_err());
    }
}
