//! Output targets for rendered lines.

use std::io;

use console::Term;

/// Where rendered lines go.
pub trait Screen {
    /// Clear the visible screen.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the terminal cannot be written.
    fn clear(&mut self) -> io::Result<()>;

    /// Write one line followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the line cannot be written.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// The real terminal on stdout. Each line is written as soon as it is produced.
pub struct TermScreen {
    term: Term,
}

impl TermScreen {
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TermScreen {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Screen for TermScreen {
    fn clear(&mut self) -> io::Result<()> {
        self.term.clear_screen()
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.term.write_line(line)
    }
}

/// Collects output in memory for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryScreen {
    /// Lines written, in order.
    pub lines: Vec<String>,
    /// How many times `clear` was called.
    pub clears: usize,
    /// Lines written before the most recent clear.
    pub lines_before_clear: usize,
}

#[cfg(test)]
impl Screen for MemoryScreen {
    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        self.lines_before_clear = self.lines.len();
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
