//! Delete command handler.

use crate::args::{Common, DeleteArgs};
use crate::commands::Out;
use crate::loader;
use crate::Result;

/// Deletes every course of the given category and level, reporting the
/// removed names in alphabetical order.
///
/// The category must exist in the catalog. The deletion happens in the
/// loaded, in-memory catalog only; the course file is never rewritten.
pub fn delete(common: &Common, args: DeleteArgs) -> Result<Out<Vec<String>>> {
    let mut catalog = loader::load_path(common.file())?;
    let removed: Vec<String> = catalog
        .delete_courses_of(args.category(), args.level())?
        .into_iter()
        .collect();

    let count = removed.len();
    let message = format!(
        "Deleted {} {} course{} from {}: [{}]",
        count,
        args.level(),
        if count == 1 { "" } else { "s" },
        args.category().to_uppercase(),
        removed.join(", ")
    );
    Ok(Out::new(message, removed))
}
