//! Core library for the ladle recipe manager.
//!
//! This crate provides the domain models, database layer, and display
//! formatting for managing recipes. Console interaction lives in the CLI
//! crate; nothing here reads or writes the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use ladle_core::{Database, Ingredient};
//!
//! # fn example() -> ladle_core::Result<()> {
//! let mut db = Database::new("recipes.db")?;
//!
//! let garlic = Ingredient {
//!     name: "garlic".to_string(),
//!     amount: "3".to_string(),
//!     units: "cloves".to_string(),
//!     prep: "minced".to_string(),
//!     optional: false,
//! };
//! let recipe = db.create_recipe("garlic bread", &[garlic])?;
//! println!("Created recipe {}", recipe.id);
//!
//! // Free-text lookup: numeric ID first, exact name as fallback
//! let found = db.resolve_recipe("garlic bread")?;
//! assert!(found.is_some());
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use db::Database;
pub use display::{IngredientRow, IngredientTable, RecipeDetails, RecipeList};
pub use error::{RecipeError, Result};
pub use models::{
    decode_ingredients, encode_ingredients, FieldUpdate, Ingredient, Recipe, RecipeField,
};
