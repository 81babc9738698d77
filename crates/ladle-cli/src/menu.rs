//! Reusable numbered-menu prompt loop.
//!
//! A [`Menu`] is an ordered list of labelled actions. Running it presents
//! the options numbered from 1 plus a literal `q` quit option, reads one
//! line of input, and dispatches. The same runner drives every nesting
//! level, from the main menu down to single-ingredient editing.
//!
//! Menus carry a context value of type `C` that is handed to every action.
//! The optional `before` hook runs with the context ahead of each prompt
//! (e.g. re-displaying the recipe being edited), and the optional `after`
//! hook consumes the context after a handled selection and re-derives it
//! (e.g. re-fetching the recipe from storage), so nested editors always
//! reflect just-saved changes.
//!
//! Quit semantics: `q` exits exactly one menu level. Unrecognized input is
//! ignored and the menu redisplays; there is no retry bound.

use std::fmt::Write as _;

use anyhow::Result;
use log::debug;

use crate::console::Session;

/// An action invoked by a menu selection.
pub type Action<C> = fn(&mut Session<'_>, &mut C) -> Result<()>;

/// Hook run with the context before each prompt.
pub type BeforeHook<C> = fn(&mut Session<'_>, &C) -> Result<()>;

/// Hook that re-derives the context after a handled selection.
pub type AfterHook<C> = fn(&mut Session<'_>, C) -> Result<C>;

struct MenuEntry<C> {
    label: &'static str,
    action: Action<C>,
}

/// An ordered prompt menu over a context of type `C`.
pub struct Menu<C> {
    entries: Vec<MenuEntry<C>>,
    before: Option<BeforeHook<C>>,
    after: Option<AfterHook<C>>,
}

impl<C> Menu<C> {
    /// Creates an empty menu.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            before: None,
            after: None,
        }
    }

    /// Appends an option with its display label.
    pub fn entry(mut self, label: &'static str, action: Action<C>) -> Self {
        self.entries.push(MenuEntry { label, action });
        self
    }

    /// Sets the hook run before each prompt.
    pub fn before(mut self, hook: BeforeHook<C>) -> Self {
        self.before = Some(hook);
        self
    }

    /// Sets the hook that re-derives the context after each selection.
    pub fn after(mut self, hook: AfterHook<C>) -> Self {
        self.after = Some(hook);
        self
    }

    /// Runs the prompt loop until `q`, returning the final context.
    pub fn run(&self, session: &mut Session<'_>, mut context: C) -> Result<C> {
        loop {
            if let Some(before) = self.before {
                before(session, &context)?;
            }
            session.say(&self.listing())?;

            let choice = session.prompt("\nAction: ")?.to_lowercase();
            if choice == "q" {
                break;
            }
            let Some(entry) = self.lookup(&choice) else {
                continue;
            };

            debug!("menu selection '{}' -> {}", choice, entry.label);
            (entry.action)(session, &mut context)?;

            if let Some(after) = self.after {
                context = after(session, context)?;
            }
        }

        Ok(context)
    }

    fn lookup(&self, choice: &str) -> Option<&MenuEntry<C>> {
        let number: usize = choice.parse().ok()?;
        self.entries.get(number.checked_sub(1)?)
    }

    fn listing(&self) -> String {
        let mut out = String::new();
        for (idx, entry) in self.entries.iter().enumerate() {
            let _ = writeln!(out, "{:>3}) {}", idx + 1, entry.label);
        }
        out.push_str("  q) Quit this menu.");
        out
    }
}

impl<C> Default for Menu<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use ladle_core::Database;
    use tempfile::NamedTempFile;

    use super::*;

    #[derive(Default, Debug, PartialEq)]
    struct Counts {
        first: u32,
        second: u32,
        refreshes: u32,
    }

    fn hit_first(_session: &mut Session<'_>, counts: &mut Counts) -> Result<()> {
        counts.first += 1;
        Ok(())
    }

    fn hit_second(_session: &mut Session<'_>, counts: &mut Counts) -> Result<()> {
        counts.second += 1;
        Ok(())
    }

    fn announce(session: &mut Session<'_>, _counts: &Counts) -> Result<()> {
        session.say("refreshing")
    }

    fn refresh(_session: &mut Session<'_>, mut counts: Counts) -> Result<Counts> {
        counts.refreshes += 1;
        Ok(counts)
    }

    fn run_menu(menu: &Menu<Counts>, script: &str) -> (Result<Counts>, String) {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        let db = Database::new(temp_file.path()).expect("Failed to create test database");

        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let mut session = Session::new(db, &mut input, &mut output);

        let result = menu.run(&mut session, Counts::default());
        (result, String::from_utf8(output).expect("utf8"))
    }

    fn two_option_menu() -> Menu<Counts> {
        Menu::new()
            .entry("First option", hit_first)
            .entry("Second option", hit_second)
    }

    #[test]
    fn test_selection_invokes_action_once_then_quits() {
        let (result, output) = run_menu(&two_option_menu(), "2\nq\n");

        let counts = result.expect("Menu run failed");
        assert_eq!(counts.first, 0);
        assert_eq!(counts.second, 1);
        assert!(output.contains("  1) First option"));
        assert!(output.contains("  2) Second option"));
        assert!(output.contains("  q) Quit this menu."));
    }

    #[test]
    fn test_unrecognized_input_is_ignored() {
        let (result, _output) = run_menu(&two_option_menu(), "9\nx\n\nq\n");

        let counts = result.expect("Menu run failed");
        assert_eq!(counts, Counts::default());
    }

    #[test]
    fn test_quit_is_case_insensitive() {
        let (result, _output) = run_menu(&two_option_menu(), "Q\n");

        assert!(result.is_ok());
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let (result, _output) = run_menu(&two_option_menu(), "1\n");

        assert!(result.is_err());
    }

    #[test]
    fn test_before_and_after_hooks() {
        let menu = two_option_menu().before(announce).after(refresh);

        let (result, output) = run_menu(&menu, "1\nq\n");

        let counts = result.expect("Menu run failed");
        assert_eq!(counts.first, 1);
        // After-hook runs once per handled selection
        assert_eq!(counts.refreshes, 1);
        // Before-hook runs ahead of every prompt, including the final one
        assert_eq!(output.matches("refreshing").count(), 2);
    }

    #[test]
    fn test_after_hook_skipped_for_unrecognized_input() {
        let menu = two_option_menu().after(refresh);

        let (result, _output) = run_menu(&menu, "7\nq\n");

        let counts = result.expect("Menu run failed");
        assert_eq!(counts.refreshes, 0);
    }
}
