//! Types that represent the core data model, such as `Course` and `Level`.
mod course;
mod level;

pub use course::Course;
pub use level::Level;
