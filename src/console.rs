//! Line-oriented console used by the dispatch loop.
//!
//! The [`Console`] trait separates the assistant from stdin/stdout so a
//! session can be driven from an in-memory script.

use std::io::{self, BufRead, Write};

/// Interactive text console.
pub trait Console {
    /// Show `prompt` and read one line.
    ///
    /// Returns `Ok(None)` at end of input. The line terminator is stripped,
    /// everything else is returned verbatim.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Print one line of output.
    fn write_line(&mut self, text: &str) -> io::Result<()>;
}

/// [`Console`] over any buffered reader and writer.
pub struct IoConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the console, returning the writer (useful to inspect output).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl IoConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
