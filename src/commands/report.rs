//! Report command handler.

use crate::args::Common;
use crate::commands::Out;
use crate::loader;
use crate::Result;

/// Loads the catalog and renders the full textual report.
pub fn report(common: &Common) -> Result<Out<()>> {
    let catalog = loader::load_path(common.file())?;
    Ok(Out::new_message(catalog.report()))
}
