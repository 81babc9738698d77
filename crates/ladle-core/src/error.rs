//! Error types for the recipe library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all recipe operations.
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Recipe not found for the given ID
    #[error("Recipe with ID {id} not found")]
    RecipeNotFound { id: u64 },
    /// A recipe with the same name already exists
    #[error("A recipe named '{name}' already exists")]
    RecipeExists { name: String },
    /// Ingredient position outside the recipe's ingredient list
    #[error("Ingredient index {index} is out of range (list has {len} entries)")]
    IngredientIndex { index: usize, len: usize },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl RecipeError {
    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }
}

/// Result type alias for recipe operations
pub type Result<T> = std::result::Result<T, RecipeError>;
