//! Main menu actions: listing, searching, viewing, creating, and deleting
//! recipes.

use anyhow::Result;
use ladle_core::{
    display::{IngredientTable, RecipeDetails, RecipeList},
    Ingredient, Recipe, RecipeError,
};

use crate::{console::Session, menu::Menu, modify};

/// Builds the top-level menu.
pub fn main_menu() -> Menu<()> {
    Menu::new()
        .entry("Show recipe names", show_recipe_names)
        .entry("Search for recipes by ingredient", search_recipes)
        .entry("Show ingredients with details", show_ingredients)
        .entry("Show whole recipe", show_whole_recipe)
        .entry("Add new recipe", add_recipe)
        .entry("Modify recipe", modify::modify_recipe)
        .entry("Delete recipe", delete_recipe)
}

/// Prompts for a recipe id or name until one resolves.
///
/// There is no cancellation path: on a miss the current listing is shown as
/// a hint and the prompt repeats.
pub fn select_recipe(session: &mut Session<'_>) -> Result<Recipe> {
    loop {
        let input = session.prompt("\n\nWhich recipe? Enter recipe id or recipe name:  ")?;
        if let Some(recipe) = session.db.resolve_recipe(&input)? {
            return Ok(recipe);
        }

        let recipes = session.db.list_recipes(None)?;
        session.show(&RecipeList::new(&recipes))?;
        session.say("This recipe does not exist. Try again.")?;
    }
}

/// Prompts for the details of one new ingredient.
pub fn prompt_ingredient(session: &mut Session<'_>) -> Result<Ingredient> {
    let name = session.prompt("Enter name of ingredient:  ")?;
    let units = session.prompt(&format!(
        "Enter unit of measurement for {name} (e.g. tsp or cup):  "
    ))?;
    let amount = session.prompt(&format!("Enter number of {units} for {name}:  "))?;
    let prep = session.prompt(&format!(
        "Enter any required prep for {name} such as skinned or minced:  "
    ))?;
    let optional = session.confirm(&format!("Is {name} optional?"), false)?;

    Ok(Ingredient {
        name,
        amount,
        units,
        prep,
        optional,
    })
}

fn show_recipe_names(session: &mut Session<'_>, _ctx: &mut ()) -> Result<()> {
    let recipes = session.db.list_recipes(None)?;
    session.show(&RecipeList::new(&recipes))
}

fn search_recipes(session: &mut Session<'_>, _ctx: &mut ()) -> Result<()> {
    let query = session.prompt("Search ingredients:  ")?;
    let recipes = session.db.list_recipes(Some(&query))?;
    session.show(&RecipeList::new(&recipes))
}

fn show_ingredients(session: &mut Session<'_>, _ctx: &mut ()) -> Result<()> {
    let recipe = select_recipe(session)?;
    session.show(&IngredientTable::new(&recipe.ingredients))
}

fn show_whole_recipe(session: &mut Session<'_>, _ctx: &mut ()) -> Result<()> {
    let recipe = select_recipe(session)?;
    session.show(&RecipeDetails::new(&recipe))
}

fn add_recipe(session: &mut Session<'_>, _ctx: &mut ()) -> Result<()> {
    let name = session.prompt("Enter the recipe name: ")?;

    let mut ingredients = Vec::new();
    while session.confirm("Add an ingredient?", false)? {
        ingredients.push(prompt_ingredient(session)?);
    }

    if !session.confirm(&format!("Save {name} recipe?"), true)? {
        return Ok(());
    }

    match session.db.create_recipe(&name, &ingredients) {
        Ok(recipe) => session.say(&format!("Saved {} with id {}", recipe.name, recipe.id)),
        Err(RecipeError::RecipeExists { name }) => {
            session.say(&format!("A recipe named '{name}' already exists."))
        }
        Err(e) => Err(e.into()),
    }
}

fn delete_recipe(session: &mut Session<'_>, _ctx: &mut ()) -> Result<()> {
    let recipe = select_recipe(session)?;
    if session.confirm(&format!("Delete {}?", recipe.name), false)? {
        session.db.delete_recipe(recipe.id)?;
        session.say("Recipe deleted.")?;
    }
    Ok(())
}
