//! Console session: line-oriented prompts over injected I/O handles.
//!
//! A [`Session`] bundles the open database with the input and output streams
//! every interactive flow reads and writes. The streams are trait objects so
//! tests can drive whole flows with scripted input and capture the output.

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use ladle_core::Database;

/// Shared state for one interactive session.
pub struct Session<'io> {
    /// The open recipe database; every operation goes through this handle.
    pub db: Database,
    input: &'io mut dyn BufRead,
    output: &'io mut dyn Write,
}

impl<'io> Session<'io> {
    /// Creates a session over the given database and I/O streams.
    pub fn new(
        db: Database,
        input: &'io mut dyn BufRead,
        output: &'io mut dyn Write,
    ) -> Self {
        Self { db, input, output }
    }

    /// Writes a prompt and reads one trimmed line of input.
    ///
    /// End of input is an error: an interactive loop cannot make progress
    /// once the console is closed.
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let bytes_read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if bytes_read == 0 {
            bail!("Unexpected end of input");
        }

        Ok(line.trim().to_string())
    }

    /// Asks a yes/no question.
    ///
    /// With `default_yes` the prompt shows `[Y/n]` and anything but `n`
    /// answers yes; otherwise it shows `[y/N]` and only `y` answers yes.
    pub fn confirm(&mut self, question: &str, default_yes: bool) -> Result<bool> {
        let choices = if default_yes { "[Y/n]" } else { "[y/N]" };
        let answer = self
            .prompt(&format!("{question} {choices}:  "))?
            .to_lowercase();

        Ok(if default_yes {
            answer != "n"
        } else {
            answer == "y"
        })
    }

    /// Writes one line of output.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").context("Failed to write output")?;
        Ok(())
    }

    /// Writes a displayable item followed by a newline.
    pub fn show<T: fmt::Display>(&mut self, item: &T) -> Result<()> {
        writeln!(self.output, "{item}").context("Failed to write output")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tempfile::NamedTempFile;

    use super::*;

    fn test_session<'io>(
        input: &'io mut Cursor<Vec<u8>>,
        output: &'io mut Vec<u8>,
    ) -> (NamedTempFile, Session<'io>) {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        let db = Database::new(temp_file.path()).expect("Failed to create test database");
        (temp_file, Session::new(db, input, output))
    }

    #[test]
    fn test_prompt_trims_input() {
        let mut input = Cursor::new(b"  garlic bread \n".to_vec());
        let mut output = Vec::new();
        let (_temp, mut session) = test_session(&mut input, &mut output);

        let answer = session.prompt("Name: ").expect("Failed to prompt");

        assert_eq!(answer, "garlic bread");
        assert!(String::from_utf8(output).expect("utf8").contains("Name: "));
    }

    #[test]
    fn test_prompt_fails_on_end_of_input() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        let (_temp, mut session) = test_session(&mut input, &mut output);

        assert!(session.prompt("Name: ").is_err());
    }

    #[test]
    fn test_confirm_default_yes() {
        let mut input = Cursor::new(b"\nn\nY\n".to_vec());
        let mut output = Vec::new();
        let (_temp, mut session) = test_session(&mut input, &mut output);

        assert!(session.confirm("Save?", true).expect("confirm"));
        assert!(!session.confirm("Save?", true).expect("confirm"));
        assert!(session.confirm("Save?", true).expect("confirm"));
        assert!(String::from_utf8(output).expect("utf8").contains("[Y/n]"));
    }

    #[test]
    fn test_confirm_default_no() {
        let mut input = Cursor::new(b"\ny\nmaybe\n".to_vec());
        let mut output = Vec::new();
        let (_temp, mut session) = test_session(&mut input, &mut output);

        assert!(!session.confirm("Delete?", false).expect("confirm"));
        assert!(session.confirm("Delete?", false).expect("confirm"));
        assert!(!session.confirm("Delete?", false).expect("confirm"));
        assert!(String::from_utf8(output).expect("utf8").contains("[y/N]"));
    }
}
