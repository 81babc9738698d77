use assert_cmd::Command;
use ladle_core::{Database, Ingredient};
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command pointed at a test database
fn ladle_cmd(db_path: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("ladle").expect("Failed to find ladle binary");
    cmd.args(["--database-file", db_path.to_str().expect("utf8 path")]);
    cmd
}

fn garlic() -> Ingredient {
    Ingredient {
        name: "garlic".to_string(),
        amount: "3".to_string(),
        units: "cloves".to_string(),
        prep: "minced".to_string(),
        optional: false,
    }
}

/// Seeds a recipe directly through the core library before driving the
/// binary against the same database file.
fn seed_recipe(db_path: &std::path::Path, name: &str, ingredients: &[Ingredient]) {
    let mut db = Database::new(db_path).expect("Failed to open seed database");
    db.create_recipe(name, ingredients)
        .expect("Failed to seed recipe");
}

#[test]
fn test_quit_immediately() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    ladle_cmd(&db_path)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Show recipe names"))
        .stdout(predicate::str::contains("q) Quit this menu."));
}

#[test]
fn test_add_recipe_then_list() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    // Add "garlic bread" with one ingredient, then list recipe names.
    let script = "5\n\
                  garlic bread\n\
                  y\n\
                  garlic\n\
                  cloves\n\
                  3\n\
                  minced\n\
                  n\n\
                  n\n\
                  y\n\
                  1\n\
                  q\n";

    ladle_cmd(&db_path)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved garlic bread with id 1"))
        .stdout(predicate::str::contains("1 - garlic bread"));
}

#[test]
fn test_show_whole_recipe() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_recipe(&db_path, "garlic bread", &[garlic()]);

    ladle_cmd(&db_path)
        .write_stdin("4\ngarlic bread\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe: garlic bread"))
        .stdout(predicate::str::contains("Prep Time: None"))
        .stdout(predicate::str::contains("garlic"))
        .stdout(predicate::str::contains("minced"));
}

#[test]
fn test_lookup_reprompts_until_match() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_recipe(&db_path, "garlic bread", &[garlic()]);

    // A miss shows the listing as a hint and asks again.
    ladle_cmd(&db_path)
        .write_stdin("4\nno such dish\ngarlic bread\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("This recipe does not exist. Try again."))
        .stdout(predicate::str::contains("Recipe: garlic bread"));
}

#[test]
fn test_declined_rename_leaves_record_unchanged() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_recipe(&db_path, "toast", &[]);

    // Modify recipe -> update name -> decline the confirmation.
    ladle_cmd(&db_path)
        .write_stdin("6\ntoast\n1\nburnt toast\nn\nq\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Change name from toast to burnt toast?"))
        .stdout(predicate::str::contains("toast not updated"));

    let db = Database::new(&db_path).expect("Failed to reopen database");
    assert!(db
        .get_recipe_by_name("toast")
        .expect("Failed to query")
        .is_some());
    assert!(db
        .get_recipe_by_name("burnt toast")
        .expect("Failed to query")
        .is_none());
}

#[test]
fn test_confirmed_rename_is_persisted() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_recipe(&db_path, "toast", &[]);

    ladle_cmd(&db_path)
        .write_stdin("6\ntoast\n1\ncheese toast\ny\nq\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("toast updated successfully"));

    let db = Database::new(&db_path).expect("Failed to reopen database");
    assert!(db
        .get_recipe_by_name("cheese toast")
        .expect("Failed to query")
        .is_some());
}

#[test]
fn test_delete_ingredient_bad_index_leaves_list() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_recipe(&db_path, "garlic bread", &[garlic()]);

    // Modify recipe -> modify ingredients -> delete with a non-numeric
    // index, then an out-of-range one. Neither touches the list.
    ladle_cmd(&db_path)
        .write_stdin("6\ngarlic bread\n2\n2\nabc\n2\n9\nq\nq\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Need to enter a number!"))
        .stdout(predicate::str::contains("out of range"));

    let db = Database::new(&db_path).expect("Failed to reopen database");
    let recipe = db
        .get_recipe_by_name("garlic bread")
        .expect("Failed to query")
        .expect("Recipe should exist");
    assert_eq!(recipe.ingredients.len(), 1);
}

#[test]
fn test_delete_recipe_flow() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_recipe(&db_path, "toast", &[]);

    ladle_cmd(&db_path)
        .write_stdin("7\ntoast\ny\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe deleted."));

    let db = Database::new(&db_path).expect("Failed to reopen database");
    assert!(db
        .get_recipe_by_name("toast")
        .expect("Failed to query")
        .is_none());
}

#[test]
fn test_search_by_ingredient() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_recipe(&db_path, "garlic bread", &[garlic()]);
    seed_recipe(&db_path, "plain toast", &[]);

    ladle_cmd(&db_path)
        .write_stdin("2\ngarlic\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("garlic bread"))
        .stdout(predicate::str::contains("plain toast").not());
}
