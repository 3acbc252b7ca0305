//! Query command handlers: counting, listing categories and finding the
//! oldest course.

use crate::args::{Common, CountArgs};
use crate::commands::Out;
use crate::loader;
use crate::Result;

/// Prints the name of the earliest-published course in the catalog.
pub fn oldest(common: &Common) -> Result<Out<String>> {
    let catalog = loader::load_path(common.file())?;
    let name = catalog.oldest_course();
    let message = if name.is_empty() {
        "The catalog has no courses".to_string()
    } else {
        format!("Oldest course: {name}")
    };
    Ok(Out::new(message, name))
}

/// Prints the number of courses in a category.
///
/// An absent category is reported with the historical `-1` sentinel.
pub fn count(common: &Common, args: CountArgs) -> Result<Out<i64>> {
    let catalog = loader::load_path(common.file())?;
    let key = args.category().to_uppercase();
    let total = catalog.total_courses_in(args.category());
    let message = match total {
        -1 => format!("{key}: -1 (no such category)"),
        1 => format!("{key}: 1 course"),
        n => format!("{key}: {n} courses"),
    };
    Ok(Out::new(message, total))
}

/// Prints every category key, one per line, in ascending order.
pub fn categories(common: &Common) -> Result<Out<Vec<String>>> {
    let catalog = loader::load_path(common.file())?;
    let categories = catalog.categories();
    let message = if categories.is_empty() {
        "The catalog has no categories".to_string()
    } else {
        categories.join("\n")
    };
    Ok(Out::new(message, categories))
}
