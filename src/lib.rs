pub mod args;
pub mod catalog;
pub mod commands;
mod error;
pub mod loader;
pub mod model;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use error::Result;
