//! Database operations for recipes.

use std::path::{Path, PathBuf};

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::{
    error::{RecipeError, Result},
    models::{decode_ingredients, encode_ingredients, FieldUpdate, Ingredient, Recipe},
};

/// Database connection and operations handler.
///
/// Owns a single connection. Callers construct one `Database` for the
/// process lifetime and pass it by reference to every operation; there is no
/// shared global handle.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    ///
    /// Parent directories of the database file are created if missing.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| RecipeError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let connection = Connection::open(path)
            .map_err(|e| RecipeError::database_error("Failed to open database connection", e))?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens the database at the default XDG location.
    pub fn open_default() -> Result<Self> {
        Self::new(Self::default_path()?)
    }

    /// Returns the default database path following the XDG Base Directory
    /// specification: `$XDG_DATA_HOME/ladle/ladle.db`.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("ladle")
            .place_data_file("ladle.db")
            .map_err(|e| RecipeError::XdgDirectory(e.to_string()))
    }

    /// Initializes the database schema using the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .map_err(|e| RecipeError::database_error("Failed to initialize database schema", e))?;

        Ok(())
    }

    /// Creates a new recipe with the given name and ingredient list.
    ///
    /// Recipe names are unique; creating a second recipe with an existing
    /// name fails with [`RecipeError::RecipeExists`].
    pub fn create_recipe(&mut self, name: &str, ingredients: &[Ingredient]) -> Result<Recipe> {
        let now = Timestamp::now();
        let encoded = encode_ingredients(ingredients)?;

        self.connection
            .execute(
                "INSERT INTO recipes (name, created_at, ingredient_list) VALUES (?1, ?2, ?3)",
                params![name, now.to_string(), &encoded],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    RecipeError::RecipeExists {
                        name: name.to_string(),
                    }
                }
                other => RecipeError::database_error("Failed to insert recipe", other),
            })?;

        let id = self.connection.last_insert_rowid() as u64;

        Ok(Recipe {
            id,
            name: name.to_string(),
            created_at: now,
            ingredients: ingredients.to_vec(),
            prep_time: None,
            cook_time: None,
            instructions: None,
        })
    }

    /// Retrieves a recipe by its ID.
    pub fn get_recipe(&self, id: u64) -> Result<Option<Recipe>> {
        let mut stmt = self
            .connection
            .prepare(
                "SELECT id, name, created_at, ingredient_list, prep_time, cook_time, instructions
                 FROM recipes WHERE id = ?1",
            )
            .map_err(|e| RecipeError::database_error("Failed to prepare query", e))?;

        let recipe = stmt
            .query_row(params![id as i64], map_recipe_row)
            .optional()
            .map_err(|e| RecipeError::database_error("Failed to query recipe", e))?;

        Ok(recipe)
    }

    /// Retrieves a recipe by its exact name.
    pub fn get_recipe_by_name(&self, name: &str) -> Result<Option<Recipe>> {
        let mut stmt = self
            .connection
            .prepare(
                "SELECT id, name, created_at, ingredient_list, prep_time, cook_time, instructions
                 FROM recipes WHERE name = ?1",
            )
            .map_err(|e| RecipeError::database_error("Failed to prepare query", e))?;

        let recipe = stmt
            .query_row(params![name], map_recipe_row)
            .optional()
            .map_err(|e| RecipeError::database_error("Failed to query recipe", e))?;

        Ok(recipe)
    }

    /// Resolves free-text input to a recipe.
    ///
    /// Numeric input is first tried as a recipe ID, then the raw text is
    /// tried as an exact name match. Returns `None` when neither matches.
    pub fn resolve_recipe(&self, input: &str) -> Result<Option<Recipe>> {
        let input = input.trim();

        if let Ok(id) = input.parse::<u64>() {
            if let Some(recipe) = self.get_recipe(id)? {
                return Ok(Some(recipe));
            }
        }

        self.get_recipe_by_name(input)
    }

    /// Lists all recipes in creation order.
    ///
    /// When `ingredient_filter` is given, only recipes whose stored
    /// ingredient list contains the text are returned.
    pub fn list_recipes(&self, ingredient_filter: Option<&str>) -> Result<Vec<Recipe>> {
        let mut query = String::from(
            "SELECT id, name, created_at, ingredient_list, prep_time, cook_time, instructions
             FROM recipes",
        );

        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
        if let Some(filter) = ingredient_filter {
            query.push_str(" WHERE ingredient_list LIKE ?");
            params_vec.push(Box::new(format!("%{filter}%")));
        }
        query.push_str(" ORDER BY id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| RecipeError::database_error("Failed to prepare query", e))?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let recipes = stmt
            .query_map(&params_refs[..], map_recipe_row)
            .map_err(|e| RecipeError::database_error("Failed to query recipes", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| RecipeError::database_error("Failed to fetch recipes", e))?;

        Ok(recipes)
    }

    /// Overwrites a single field of a recipe.
    ///
    /// The write is unconditional: the carried value replaces the stored one
    /// with no check against the current persisted state.
    pub fn update_field(&mut self, id: u64, update: &FieldUpdate) -> Result<()> {
        let rows_affected = match update {
            FieldUpdate::Name(name) => self
                .connection
                .execute(
                    "UPDATE recipes SET name = ?1 WHERE id = ?2",
                    params![name, id as i64],
                )
                .map_err(|e| match e {
                    rusqlite::Error::SqliteFailure(err, _)
                        if err.code == rusqlite::ErrorCode::ConstraintViolation =>
                    {
                        RecipeError::RecipeExists { name: name.clone() }
                    }
                    other => RecipeError::database_error("Failed to update recipe name", other),
                })?,
            FieldUpdate::Ingredients(list) => {
                let encoded = encode_ingredients(list)?;
                self.connection
                    .execute(
                        "UPDATE recipes SET ingredient_list = ?1 WHERE id = ?2",
                        params![&encoded, id as i64],
                    )
                    .map_err(|e| {
                        RecipeError::database_error("Failed to update ingredient list", e)
                    })?
            }
            FieldUpdate::PrepTime(time) => self
                .connection
                .execute(
                    "UPDATE recipes SET prep_time = ?1 WHERE id = ?2",
                    params![time.to_string(), id as i64],
                )
                .map_err(|e| RecipeError::database_error("Failed to update prep time", e))?,
            FieldUpdate::CookTime(time) => self
                .connection
                .execute(
                    "UPDATE recipes SET cook_time = ?1 WHERE id = ?2",
                    params![time.to_string(), id as i64],
                )
                .map_err(|e| RecipeError::database_error("Failed to update cook time", e))?,
            FieldUpdate::Instructions(instructions) => self
                .connection
                .execute(
                    "UPDATE recipes SET instructions = ?1 WHERE id = ?2",
                    params![instructions, id as i64],
                )
                .map_err(|e| RecipeError::database_error("Failed to update instructions", e))?,
        };

        if rows_affected == 0 {
            return Err(RecipeError::RecipeNotFound { id });
        }

        Ok(())
    }

    /// Permanently deletes a recipe. This operation cannot be undone.
    pub fn delete_recipe(&mut self, id: u64) -> Result<()> {
        let rows_affected = self
            .connection
            .execute("DELETE FROM recipes WHERE id = ?1", params![id as i64])
            .map_err(|e| RecipeError::database_error("Failed to delete recipe", e))?;

        if rows_affected == 0 {
            return Err(RecipeError::RecipeNotFound { id });
        }

        Ok(())
    }
}

/// Maps one `recipes` row to a [`Recipe`], decoding the ingredient blob and
/// parsing stored timestamps and times.
fn map_recipe_row(row: &Row<'_>) -> rusqlite::Result<Recipe> {
    let created_at = row
        .get::<_, String>(2)?
        .parse::<Timestamp>()
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
        })?;

    let ingredient_blob: String = row.get(3)?;
    let ingredients = decode_ingredients(&ingredient_blob).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let prep_time = parse_time_column(row, 4)?;
    let cook_time = parse_time_column(row, 5)?;

    Ok(Recipe {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        created_at,
        ingredients,
        prep_time,
        cook_time,
        instructions: row.get(6)?,
    })
}

fn parse_time_column(row: &Row<'_>, index: usize) -> rusqlite::Result<Option<jiff::civil::Time>> {
    let raw: Option<String> = row.get(index)?;
    raw.map(|s| {
        s.parse::<jiff::civil::Time>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                index,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
    })
    .transpose()
}
