use std::io::BufRead;
use thiserror::Error;
use tracing::{debug, warn};

use crate::output::Console;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("input stream closed")]
    Closed,

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Ask the user to confirm the pending renames.
///
/// Only `y` (any case, surrounding whitespace ignored) confirms. A read
/// failure is reported and counts as a refusal.
pub fn confirm(dry_run: bool, input: &mut impl BufRead, console: &mut Console) -> bool {
    console.prompt(dry_run);

    let response = read_response(input);
    console.blank();

    match response {
        Ok(response) => {
            debug!(response = %response.trim(), "Confirmation response");
            response.trim().eq_ignore_ascii_case("y")
        }
        Err(e) => {
            warn!("Failed to read confirmation: {}", e);
            console.input_error(&e);
            false
        }
    }
}

/// Show the prompt but answer it without reading input (`--yes`)
pub fn auto_confirm(dry_run: bool, console: &mut Console) -> bool {
    console.prompt(dry_run);
    console.answer("y");
    console.blank();
    true
}

fn read_response(input: &mut impl BufRead) -> Result<String, InputError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Closed);
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::testing::buffered_console;
    use std::io::{self, Cursor, Read};

    fn answer(text: &str) -> bool {
        let (mut console, _buffer) = buffered_console();
        confirm(false, &mut Cursor::new(text.as_bytes()), &mut console)
    }

    #[test]
    fn test_accepts_y() {
        assert!(answer("y\n"));
        assert!(answer("Y\n"));
        assert!(answer("  y  \n"));
        assert!(answer("y"));
    }

    #[test]
    fn test_rejects_everything_else() {
        assert!(!answer("n\n"));
        assert!(!answer("\n"));
        assert!(!answer("yes\n"));
        assert!(!answer("N\n"));
        assert!(!answer("maybe\n"));
    }

    #[test]
    fn test_reads_only_one_line() {
        assert!(!answer("n\ny\n"));
    }

    #[test]
    fn test_closed_input_is_refusal() {
        let (mut console, buffer) = buffered_console();
        let confirmed = confirm(false, &mut Cursor::new(Vec::<u8>::new()), &mut console);

        assert!(!confirmed);
        assert!(buffer
            .contents()
            .ends_with("\nError reading input: input stream closed\n"));
    }

    #[test]
    fn test_read_error_is_refusal() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "broken pipe"))
            }
        }

        let (mut console, buffer) = buffered_console();
        let confirmed = confirm(false, &mut io::BufReader::new(Broken), &mut console);

        assert!(!confirmed);
        assert!(buffer.contents().contains("Error reading input: broken pipe"));
    }

    #[test]
    fn test_prompt_mentions_dry_run() {
        let (mut console, buffer) = buffered_console();
        confirm(true, &mut Cursor::new(b"y\n".to_vec()), &mut console);

        assert_eq!(
            buffer.contents(),
            "\nDRY RUN: No changes will be made.\nDo you want to rename these files? (y/N)\n\n"
        );
    }

    #[test]
    fn test_auto_confirm() {
        let (mut console, buffer) = buffered_console();
        assert!(auto_confirm(false, &mut console));
        assert_eq!(
            buffer.contents(),
            "\nDo you want to rename these files? (y/N)\ny\n\n"
        );
    }
}
