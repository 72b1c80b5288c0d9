use thiserror::Error;

/// Errors that can occur while loading the catalog, configuration or session storage
///
/// Advisory outcomes of a search (too few ingredients, no matching recipes) are
/// not errors; see [`crate::session::SearchOutcome`].
#[derive(Error, Debug)]
pub enum FinderError {
    /// Failed to read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog or persisted session data is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two catalog entries share the same id
    #[error("Duplicate recipe id in catalog: {0}")]
    DuplicateRecipeId(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// A recipe id did not resolve to a catalog entry
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),
}
