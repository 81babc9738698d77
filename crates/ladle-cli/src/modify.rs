//! Nested editing menus: recipe fields, the ingredient list, and single
//! ingredients.
//!
//! Every write funnels through [`confirm_and_apply`]: the old and new values
//! are displayed and the overwrite only happens on an explicit yes. The
//! ingredient editors never mutate their context in place; they build a
//! modified copy of the list so the old-vs-new prompt reflects the persisted
//! state, and rely on the menu after-hooks to re-fetch the recipe once the
//! write lands.

use anyhow::{anyhow, Result};
use jiff::civil::Time;
use ladle_core::{
    display::{IngredientTable, RecipeDetails},
    FieldUpdate, Ingredient, Recipe, RecipeError,
};

use crate::{
    actions::{prompt_ingredient, select_recipe},
    console::Session,
    menu::Menu,
};

/// Main-menu entry point: pick a recipe, then edit it field by field.
pub fn modify_recipe(session: &mut Session<'_>, _ctx: &mut ()) -> Result<()> {
    let recipe = select_recipe(session)?;

    Menu::new()
        .entry("Update name", update_name)
        .entry("Modify ingredients", modify_ingredients)
        .entry("Update prep time", update_prep_time)
        .entry("Update cook time", update_cook_time)
        .entry("Update instructions", update_instructions)
        .before(show_recipe)
        .after(refresh_recipe)
        .run(session, recipe)?;

    Ok(())
}

fn show_recipe(session: &mut Session<'_>, recipe: &Recipe) -> Result<()> {
    session.show(&RecipeDetails::new(recipe))
}

fn show_ingredient_table(session: &mut Session<'_>, recipe: &Recipe) -> Result<()> {
    session.show(&IngredientTable::new(&recipe.ingredients))
}

/// Re-fetches the recipe so the next menu iteration shows saved changes.
fn refresh_recipe(session: &mut Session<'_>, recipe: Recipe) -> Result<Recipe> {
    session
        .db
        .get_recipe(recipe.id)?
        .ok_or_else(|| anyhow!("Recipe {} no longer exists", recipe.id))
}

/// Shows the old and new values, asks for confirmation, and applies the
/// overwrite. Declining leaves the record unchanged.
fn confirm_and_apply(session: &mut Session<'_>, recipe: &Recipe, update: FieldUpdate) -> Result<()> {
    let field = update.field();
    let old_value = recipe.field_text(field)?;
    let new_value = update.value_text()?;

    if !session.confirm(
        &format!("Change {field} from {old_value} to {new_value}?"),
        false,
    )? {
        session.say(&format!("{} not updated", recipe.name))?;
        return Ok(());
    }

    match session.db.update_field(recipe.id, &update) {
        Ok(()) => session.say(&format!("{} updated successfully", recipe.name)),
        Err(RecipeError::RecipeExists { name }) => {
            session.say(&format!("A recipe named '{name}' already exists. Not updated."))
        }
        Err(e) => Err(e.into()),
    }
}

fn update_name(session: &mut Session<'_>, recipe: &mut Recipe) -> Result<()> {
    let new_name = session.prompt("\n\nEnter the new name:  ")?;
    confirm_and_apply(session, recipe, FieldUpdate::Name(new_name))
}

fn update_prep_time(session: &mut Session<'_>, recipe: &mut Recipe) -> Result<()> {
    match prompt_time(session, "prep time")? {
        Some(time) => confirm_and_apply(session, recipe, FieldUpdate::PrepTime(time)),
        None => Ok(()),
    }
}

fn update_cook_time(session: &mut Session<'_>, recipe: &mut Recipe) -> Result<()> {
    match prompt_time(session, "cook time")? {
        Some(time) => confirm_and_apply(session, recipe, FieldUpdate::CookTime(time)),
        None => Ok(()),
    }
}

fn update_instructions(session: &mut Session<'_>, recipe: &mut Recipe) -> Result<()> {
    let instructions = session.prompt("\n\nEnter the new instructions:  ")?;
    confirm_and_apply(session, recipe, FieldUpdate::Instructions(instructions))
}

/// Prompts for a time of day; a value that does not parse is reported and
/// the update is abandoned.
fn prompt_time(session: &mut Session<'_>, label: &str) -> Result<Option<Time>> {
    let raw = session.prompt(&format!("\n\nEnter the new {label} (HH:MM):  "))?;
    match raw.parse::<Time>() {
        Ok(time) => Ok(Some(time)),
        Err(e) => {
            session.say(&format!("Not a valid time: {e}"))?;
            Ok(None)
        }
    }
}

fn modify_ingredients(session: &mut Session<'_>, recipe: &mut Recipe) -> Result<()> {
    let updated = Menu::new()
        .entry("Add ingredient", add_ingredient)
        .entry("Delete ingredient", delete_ingredient)
        .entry("Modify ingredient", modify_ingredient)
        .before(show_ingredient_table)
        .after(refresh_recipe)
        .run(session, recipe.clone())?;

    *recipe = updated;
    Ok(())
}

fn add_ingredient(session: &mut Session<'_>, recipe: &mut Recipe) -> Result<()> {
    let new_ingredient = prompt_ingredient(session)?;
    if !session.confirm(&format!("Add {}?", new_ingredient.name), true)? {
        return Ok(());
    }

    let mut list = recipe.ingredients.clone();
    list.push(new_ingredient);
    session
        .db
        .update_field(recipe.id, &FieldUpdate::Ingredients(list))?;
    Ok(())
}

fn delete_ingredient(session: &mut Session<'_>, recipe: &mut Recipe) -> Result<()> {
    let Some(index) = prompt_index(session, "delete")? else {
        return Ok(());
    };

    let mut working = recipe.clone();
    let removed = match working.remove_ingredient(index) {
        Ok(ingredient) => ingredient,
        Err(e) => {
            session.say(&e.to_string())?;
            return Ok(());
        }
    };

    if session.confirm(&format!("Delete {}?", removed.name), false)? {
        session
            .db
            .update_field(recipe.id, &FieldUpdate::Ingredients(working.ingredients))?;
    }
    Ok(())
}

fn modify_ingredient(session: &mut Session<'_>, recipe: &mut Recipe) -> Result<()> {
    let Some(index) = prompt_index(session, "modify")? else {
        return Ok(());
    };
    if let Err(e) = recipe.ingredient(index) {
        session.say(&e.to_string())?;
        return Ok(());
    }

    Menu::new()
        .entry("Change name", edit_name)
        .entry("Change amount and unit", edit_amount)
        .entry("Change prep", edit_prep)
        .entry("Change optional flag", edit_optional)
        .before(show_edit_table)
        .after(refresh_edit)
        .run(
            session,
            IngredientEdit {
                recipe: recipe.clone(),
                index,
            },
        )?;

    Ok(())
}

/// Prompts for a 1-based table index and converts it to a list position.
/// Non-numeric input and zero are reported; both abort the operation.
fn prompt_index(session: &mut Session<'_>, verb: &str) -> Result<Option<usize>> {
    let raw = session.prompt(&format!(
        "What is the index of the ingredient to {verb}?:  "
    ))?;

    let Ok(position) = raw.parse::<usize>() else {
        session.say("Need to enter a number!")?;
        return Ok(None);
    };
    let Some(index) = position.checked_sub(1) else {
        session.say("Ingredient indexes start at 1.")?;
        return Ok(None);
    };

    Ok(Some(index))
}

/// Context for the single-ingredient editor: the parent recipe and the
/// position being edited. The position stays valid across iterations
/// because these edits never change the list length.
struct IngredientEdit {
    recipe: Recipe,
    index: usize,
}

impl IngredientEdit {
    fn name(&self) -> Result<String> {
        Ok(self.recipe.ingredient(self.index)?.name.clone())
    }

    /// Returns a copy of the list with one field rewritten at the edited
    /// position.
    fn updated_list<F>(&self, apply: F) -> Vec<Ingredient>
    where
        F: FnOnce(&mut Ingredient),
    {
        let mut list = self.recipe.ingredients.clone();
        if let Some(slot) = list.get_mut(self.index) {
            apply(slot);
        }
        list
    }
}

fn show_edit_table(session: &mut Session<'_>, edit: &IngredientEdit) -> Result<()> {
    session.show(&IngredientTable::new(&edit.recipe.ingredients))
}

fn refresh_edit(session: &mut Session<'_>, edit: IngredientEdit) -> Result<IngredientEdit> {
    let recipe = refresh_recipe(session, edit.recipe)?;
    Ok(IngredientEdit {
        recipe,
        index: edit.index,
    })
}

fn edit_name(session: &mut Session<'_>, edit: &mut IngredientEdit) -> Result<()> {
    let new_name = session.prompt(&format!("Enter new name for {}:  ", edit.name()?))?;
    let list = edit.updated_list(|slot| slot.name = new_name);
    confirm_and_apply(session, &edit.recipe, FieldUpdate::Ingredients(list))
}

fn edit_amount(session: &mut Session<'_>, edit: &mut IngredientEdit) -> Result<()> {
    let name = edit.name()?;
    let new_amount = session.prompt(&format!("Enter new amount for {name}:  "))?;
    let new_units = session.prompt(&format!("Enter new units for {name}:  "))?;
    let list = edit.updated_list(|slot| {
        slot.amount = new_amount;
        slot.units = new_units;
    });
    confirm_and_apply(session, &edit.recipe, FieldUpdate::Ingredients(list))
}

fn edit_prep(session: &mut Session<'_>, edit: &mut IngredientEdit) -> Result<()> {
    let new_prep = session.prompt(&format!("Enter new prep for {}:  ", edit.name()?))?;
    let list = edit.updated_list(|slot| slot.prep = new_prep);
    confirm_and_apply(session, &edit.recipe, FieldUpdate::Ingredients(list))
}

fn edit_optional(session: &mut Session<'_>, edit: &mut IngredientEdit) -> Result<()> {
    let optional = session.confirm(&format!("Is {} optional?", edit.name()?), false)?;
    let list = edit.updated_list(|slot| slot.optional = optional);
    confirm_and_apply(session, &edit.recipe, FieldUpdate::Ingredients(list))
}
