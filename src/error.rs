//! Error types for the course catalog.
//!
//! Catalog and parsing failures are typed so that callers can match on them;
//! everything else flows through `anyhow`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, anyhow::Error>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The text did not match any known difficulty level.
    #[error("invalid difficulty level '{0}'")]
    InvalidLevel(String),

    /// The text was not a valid day/month/year date.
    #[error("invalid publication date '{0}', expected dd/mm/yyyy")]
    InvalidDate(String),

    /// A deletion was requested for a category that is not in the catalog.
    #[error("category '{0}' not found in the catalog")]
    CategoryNotFound(String),
}
