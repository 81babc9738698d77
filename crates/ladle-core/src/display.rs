//! Display wrapper types for formatting recipes on the console.
//!
//! Presentation stays out of the domain models: wrapper types borrow the
//! data and implement [`std::fmt::Display`], so the same recipe can be shown
//! as a one-line listing entry, an ingredient table, or a full detail view
//! depending on context.
//!
//! ```rust
//! use ladle_core::display::IngredientTable;
//! use ladle_core::models::Ingredient;
//!
//! let list = vec![Ingredient {
//!     name: "garlic".to_string(),
//!     amount: "3".to_string(),
//!     units: "cloves".to_string(),
//!     prep: "minced".to_string(),
//!     optional: false,
//! }];
//! let table = IngredientTable::new(&list);
//! assert!(format!("{}", table).contains("garlic"));
//! ```

use std::fmt;

use crate::models::{Ingredient, Recipe};

const IDX_WIDTH: usize = 7;
const NAME_WIDTH: usize = 40;
const AMOUNT_WIDTH: usize = 10;
const UNIT_WIDTH: usize = 10;
const PREP_WIDTH: usize = 30;
const OPT_WIDTH: usize = 10;

// Six columns plus seven pipe separators.
const TABLE_WIDTH: usize =
    IDX_WIDTH + NAME_WIDTH + AMOUNT_WIDTH + UNIT_WIDTH + PREP_WIDTH + OPT_WIDTH + 7;

/// Formats an ingredient list as a fixed-width table.
///
/// Rows are numbered from 1; the displayed index is the position users type
/// when deleting or modifying an ingredient.
pub struct IngredientTable<'a> {
    ingredients: &'a [Ingredient],
}

impl<'a> IngredientTable<'a> {
    /// Create a new IngredientTable wrapper.
    pub fn new(ingredients: &'a [Ingredient]) -> Self {
        Self { ingredients }
    }
}

impl fmt::Display for IngredientTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "|{:^IDX_WIDTH$}|{:^NAME_WIDTH$}|{:^AMOUNT_WIDTH$}|{:^UNIT_WIDTH$}|{:^PREP_WIDTH$}|{:^OPT_WIDTH$}|",
            "Index", "Ingredient", "Amount", "Unit", "Prep", "Optional",
        )?;
        writeln!(f, "{}", "=".repeat(TABLE_WIDTH))?;

        for (position, ingredient) in self.ingredients.iter().enumerate() {
            writeln!(f, "{}", IngredientRow::new(ingredient, position + 1))?;
        }

        Ok(())
    }
}

/// Formats one ingredient as a single table row with its displayed index.
pub struct IngredientRow<'a> {
    ingredient: &'a Ingredient,
    position: usize,
}

impl<'a> IngredientRow<'a> {
    /// Create a new IngredientRow wrapper. `position` is 1-based.
    pub fn new(ingredient: &'a Ingredient, position: usize) -> Self {
        Self {
            ingredient,
            position,
        }
    }
}

impl fmt::Display for IngredientRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let idx_width = IDX_WIDTH - 1;
        let optional = if self.ingredient.optional { "y" } else { "n" };
        write!(
            f,
            "|{:>idx_width$} |{:^NAME_WIDTH$}|{:^AMOUNT_WIDTH$}|{:^UNIT_WIDTH$}|{:^PREP_WIDTH$}|{:^OPT_WIDTH$}|",
            self.position,
            self.ingredient.name,
            self.ingredient.amount,
            self.ingredient.units,
            self.ingredient.prep,
            optional,
        )
    }
}

/// Formats a collection of recipes as an ` id - name` listing.
pub struct RecipeList<'a> {
    recipes: &'a [Recipe],
}

impl<'a> RecipeList<'a> {
    /// Create a new RecipeList wrapper.
    pub fn new(recipes: &'a [Recipe]) -> Self {
        Self { recipes }
    }
}

impl fmt::Display for RecipeList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.recipes.is_empty() {
            writeln!(f, "No recipes found.")?;
            return Ok(());
        }

        writeln!(f, " id - name")?;
        for recipe in self.recipes {
            writeln!(f, "{:>3} - {}", recipe.id, recipe.name)?;
        }

        Ok(())
    }
}

/// Formats a whole recipe: header fields, ingredient table, instructions.
pub struct RecipeDetails<'a> {
    recipe: &'a Recipe,
}

impl<'a> RecipeDetails<'a> {
    /// Create a new RecipeDetails wrapper.
    pub fn new(recipe: &'a Recipe) -> Self {
        Self { recipe }
    }
}

impl fmt::Display for RecipeDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe: {}", self.recipe.name)?;
        writeln!(f, "Prep Time: {}", optional_field(&self.recipe.prep_time))?;
        writeln!(f, "Cook Time: {}", optional_field(&self.recipe.cook_time))?;
        writeln!(f)?;
        writeln!(f, "Ingredients:")?;
        write!(f, "{}", IngredientTable::new(&self.recipe.ingredients))?;
        writeln!(f)?;
        writeln!(
            f,
            "Instructions: {}",
            self.recipe.instructions.as_deref().unwrap_or("None")
        )?;

        Ok(())
    }
}

fn optional_field<T: fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "None".to_string(),
    }
}
