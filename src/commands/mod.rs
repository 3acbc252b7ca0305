//! Command handlers for the courses CLI.
//!
//! Every subcommand loads the catalog from the common input source, runs one
//! or more catalog operations, and returns an [`Out`].

mod delete;
mod demo;
mod query;
mod report;

use serde::Serialize;
use std::fmt::Debug;
use tracing::debug;

pub use delete::delete;
pub use demo::demo;
pub use query::{categories, count, oldest};
pub use report::report;

/// Writes `input` to a temp file and builds a `Common` pointing at it. The
/// file must be kept alive for the duration of the test.
#[cfg(test)]
pub(crate) fn test_common(input: &str) -> (crate::args::Common, tempfile::NamedTempFile) {
    use std::io::Write as _;
    use tracing_subscriber::filter::LevelFilter;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(input.as_bytes()).unwrap();
    file.flush().unwrap();
    let common = crate::args::Common::new(LevelFilter::INFO, Some(file.path().to_path_buf()));
    (common, file)
}

/// The output type for a command. This allows the command to return a
/// consistent message and, optionally, structured data.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of the
    /// command execution.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T, S> From<S> for Out<T>
where
    T: Debug + Clone + Serialize,
    S: Into<String>,
{
    fn from(value: S) -> Self {
        Out::new_message(value)
    }
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Print the message to stdout and the structured data (if it exists) as
    /// JSON to `debug!`.
    pub fn print(&self) {
        println!("{}", self.message);
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                debug!("Command output:\n\n{json}\n\n");
            }
        }
    }
}
