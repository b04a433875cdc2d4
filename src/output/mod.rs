//! Console output for the scan, prompt and rename phases.
//!
//! Every line written here is part of the tool's stable output: other
//! programs grep for these prefixes, so the uncoloured bytes must not change.
//! Diagnostics go through `tracing` on stderr instead.

use colored::Colorize;
use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Writer for user-facing output
pub struct Console {
    writer: Box<dyn Write>,
    /// When true, the leading tag of each line is colorized
    colors_enabled: bool,
}

/// Check if we should use colors in output
fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stdout().is_terminal()
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Console {
    /// Create a console writing to stdout
    pub fn stdout() -> Self {
        let colors_enabled = should_use_colors();
        if !colors_enabled {
            colored::control::set_override(false);
        }
        Self {
            writer: Box::new(io::stdout()),
            colors_enabled,
        }
    }

    /// Create a console with a custom writer and no colors
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            colors_enabled: false,
        }
    }

    fn tag(&self, tag: &str, paint: fn(&str) -> colored::ColoredString) -> String {
        if self.colors_enabled {
            paint(tag).to_string()
        } else {
            tag.to_string()
        }
    }

    /// Report a name that fails the character policy, at discovery time
    pub fn invalid_name(&mut self, old: &str, new: &str) {
        let tag = self.tag("[Invalid]", |s| s.yellow().bold());
        let _ = writeln!(self.writer, "{}  {}  ->  {}", tag, old, new);
    }

    /// Report an entry the walk could not access (skip-unreadable mode)
    pub fn access_error(&mut self, path: &Path, err: &dyn Display) {
        let tag = self.tag("Error accessing:", |s| s.red());
        let _ = writeln!(self.writer, "{} {} {}", tag, path.display(), err);
    }

    /// Ask whether the pending renames should go ahead
    pub fn prompt(&mut self, dry_run: bool) {
        let _ = writeln!(self.writer);
        if dry_run {
            let _ = writeln!(self.writer, "DRY RUN: No changes will be made.");
        }
        let _ = writeln!(self.writer, "Do you want to rename these files? (y/N)");
        let _ = self.writer.flush();
    }

    /// Echo an answer that was not typed by the user (`--yes`)
    pub fn answer(&mut self, answer: &str) {
        let _ = writeln!(self.writer, "{}", answer);
    }

    pub fn input_error(&mut self, err: &dyn Display) {
        let _ = writeln!(self.writer, "Error reading input: {}", err);
    }

    pub fn would_rename(&mut self, old: &Path, new: &Path) {
        let tag = self.tag("[DRY-RUN]", |s| s.cyan());
        let _ = writeln!(
            self.writer,
            "{} Would rename: {} {}",
            tag,
            old.display(),
            new.display()
        );
    }

    pub fn renamed(&mut self, old: &Path, new: &Path) {
        let tag = self.tag("Renamed:", |s| s.green());
        let _ = writeln!(self.writer, "{} {} {}", tag, old.display(), new.display());
    }

    pub fn rename_failed(&mut self, old: &Path, new: &Path, err: &dyn Display) {
        let tag = self.tag("Error renaming:", |s| s.red().bold());
        let _ = writeln!(
            self.writer,
            "{} {} {} {}",
            tag,
            old.display(),
            new.display(),
            err
        );
    }

    pub fn nothing_to_rename(&mut self) {
        let _ = writeln!(self.writer, "No invalid files found. Goodbye!");
    }

    pub fn declined(&mut self) {
        let _ = writeln!(self.writer, "No changes made.");
    }

    pub fn blank(&mut self) {
        let _ = writeln!(self.writer);
    }
}
