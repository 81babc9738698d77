//! Data models for recipes and their ingredient lists.
//!
//! A [`Recipe`] is one database row. Its ingredient list is stored as a JSON
//! array of objects and decoded into a `Vec<Ingredient>` on read; every edit
//! re-encodes the whole list. The JSON key names are part of the stored
//! format and are pinned with serde renames, so decode, mutate, encode
//! cycles round-trip exactly.

use std::fmt;

use jiff::{civil::Time, Timestamp};
use serde::{Deserialize, Serialize};

use crate::error::{RecipeError, Result};

/// One line item of a recipe's ingredient list.
///
/// Ingredients have no identity of their own. They are addressed by position
/// within the parent recipe's list, which is only stable for the duration of
/// a single editing session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    /// Name of the ingredient
    #[serde(rename = "ingredient_name")]
    pub name: String,

    /// Amount as entered by the user (free text, e.g. "3" or "1/2")
    #[serde(rename = "ingredient_amount")]
    pub amount: String,

    /// Unit of measurement (free text, e.g. "tsp" or "cloves")
    #[serde(rename = "ingredient_units")]
    pub units: String,

    /// Required preparation, such as "minced" or "skinned"
    pub prep: String,

    /// Whether the ingredient can be left out
    pub optional: bool,
}

/// A named dish record with timing, instructions, and an ordered
/// ingredient list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Unique identifier for the recipe
    pub id: u64,

    /// Name of the recipe (unique)
    pub name: String,

    /// Timestamp when the recipe was created (UTC)
    pub created_at: Timestamp,

    /// Ordered ingredient list, decoded from storage
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    /// Optional preparation time
    pub prep_time: Option<Time>,

    /// Optional cooking time
    pub cook_time: Option<Time>,

    /// Optional free-text cooking instructions
    pub instructions: Option<String>,
}

impl Recipe {
    /// Returns the ingredient at the given zero-based position.
    pub fn ingredient(&self, index: usize) -> Result<&Ingredient> {
        self.ingredients
            .get(index)
            .ok_or(RecipeError::IngredientIndex {
                index,
                len: self.ingredients.len(),
            })
    }

    /// Removes and returns the ingredient at the given zero-based position.
    ///
    /// Subsequent ingredients shift down by one. An out-of-range index
    /// leaves the list unchanged.
    pub fn remove_ingredient(&mut self, index: usize) -> Result<Ingredient> {
        if index >= self.ingredients.len() {
            return Err(RecipeError::IngredientIndex {
                index,
                len: self.ingredients.len(),
            });
        }
        Ok(self.ingredients.remove(index))
    }

    /// Renders the current value of a field for the old-vs-new prompt shown
    /// before a confirmed update. Unset fields render as "None".
    pub fn field_text(&self, field: RecipeField) -> Result<String> {
        let text = match field {
            RecipeField::Name => self.name.clone(),
            RecipeField::Ingredients => encode_ingredients(&self.ingredients)?,
            RecipeField::PrepTime => option_text(self.prep_time.as_ref()),
            RecipeField::CookTime => option_text(self.cook_time.as_ref()),
            RecipeField::Instructions => option_text(self.instructions.as_ref()),
        };
        Ok(text)
    }
}

fn option_text<T: fmt::Display>(value: Option<&T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "None".to_string(),
    }
}

/// The closed set of updatable recipe fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeField {
    Name,
    Ingredients,
    PrepTime,
    CookTime,
    Instructions,
}

impl RecipeField {
    /// Human-readable field name used in prompts and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeField::Name => "name",
            RecipeField::Ingredients => "ingredient list",
            RecipeField::PrepTime => "prep time",
            RecipeField::CookTime => "cook time",
            RecipeField::Instructions => "instructions",
        }
    }
}

impl fmt::Display for RecipeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single-field overwrite, carrying the new value for one field.
///
/// Updates are last-writer-wins: whatever value is carried here replaces the
/// stored one with no check against the current persisted state.
#[derive(Debug, Clone)]
pub enum FieldUpdate {
    Name(String),
    Ingredients(Vec<Ingredient>),
    PrepTime(Time),
    CookTime(Time),
    Instructions(String),
}

impl FieldUpdate {
    /// The field this update targets.
    pub fn field(&self) -> RecipeField {
        match self {
            FieldUpdate::Name(_) => RecipeField::Name,
            FieldUpdate::Ingredients(_) => RecipeField::Ingredients,
            FieldUpdate::PrepTime(_) => RecipeField::PrepTime,
            FieldUpdate::CookTime(_) => RecipeField::CookTime,
            FieldUpdate::Instructions(_) => RecipeField::Instructions,
        }
    }

    /// Renders the new value for the old-vs-new confirmation prompt.
    pub fn value_text(&self) -> Result<String> {
        let text = match self {
            FieldUpdate::Name(name) => name.clone(),
            FieldUpdate::Ingredients(list) => encode_ingredients(list)?,
            FieldUpdate::PrepTime(time) | FieldUpdate::CookTime(time) => time.to_string(),
            FieldUpdate::Instructions(instructions) => instructions.clone(),
        };
        Ok(text)
    }
}

/// Decodes a stored ingredient-list blob into an ordered list.
pub fn decode_ingredients(raw: &str) -> Result<Vec<Ingredient>> {
    Ok(serde_json::from_str(raw)?)
}

/// Encodes an ingredient list back into its stored JSON form.
pub fn encode_ingredients(list: &[Ingredient]) -> Result<String> {
    Ok(serde_json::to_string(list)?)
}
