use phone_book_assistant::Console;
use std::collections::VecDeque;
use std::io;

/// Console mock that replays scripted input lines.
///
/// Records every prompt shown and every line written so tests can verify
/// the exact conversation.
#[allow(dead_code)]
#[derive(Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
    fail_writes: bool,
}

#[allow(dead_code)]
impl ScriptedConsole {
    /// Create a console that will answer with `lines`, in order.
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|line| line.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Make every `write_line` call fail with a broken pipe.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Prompts shown so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines written so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Number of scripted lines that were never read.
    pub fn unread(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "console closed"));
        }
        self.output.push(text.to_string());
        Ok(())
    }
}
