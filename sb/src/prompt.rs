//! Interactive input collection

use colored::Colorize;
use eyre::{Result, eyre};
use rustyline::DefaultEditor;
use rustyline::config::{Behavior, Config};
use rustyline::error::ReadlineError;

use crate::PLACEHOLDER;

/// Line that ends a multi-line entry
pub const END_OF_BLOCK: &str = ".";

/// Request/response boundary between the workflows and whoever answers them.
///
/// `None` means the user backed out and the flow should stop without changes.
/// Answers are returned as typed; the workflows decide what an empty answer
/// means.
pub trait Prompter {
    /// Ask for the name of a new skill
    fn prompt_name(&mut self) -> Result<Option<String>>;

    /// Ask for a template, showing `current` when editing
    fn prompt_template(&mut self, current: Option<&str>) -> Result<Option<String>>;

    /// Ask for the text of one placeholder slot (1-based)
    fn prompt_content(&mut self, slot: usize, total: usize) -> Result<Option<String>>;

    /// Yes/no question, defaulting to no
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// Prompter on top of a readline editor, created on first prompt.
///
/// Prompts and headers go to the terminal (or stderr), never stdout, so the
/// rendered text printed by `fill` can be piped.
#[derive(Default)]
pub struct TerminalPrompter {
    editor: Option<DefaultEditor>,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    fn editor(&mut self) -> Result<&mut DefaultEditor> {
        if self.editor.is_none() {
            let config = Config::builder().behavior(Behavior::PreferTerm).build();
            let editor = DefaultEditor::with_config(config).map_err(|e| eyre!("Failed to initialize readline: {}", e))?;
            self.editor = Some(editor);
        }
        self.editor.as_mut().ok_or_else(|| eyre!("readline editor unavailable"))
    }

    /// Read one line. Ctrl+C and Ctrl+D both cancel.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor()?.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(eyre!("Readline error: {}", err)),
        }
    }

    /// Read lines until a lone `.` or EOF. Ctrl+C cancels the whole block.
    fn read_block(&mut self) -> Result<Option<String>> {
        let editor = self.editor()?;
        let mut lines = Vec::new();
        loop {
            match editor.readline("| ") {
                Ok(line) if line == END_OF_BLOCK => break,
                Ok(line) => lines.push(line),
                Err(ReadlineError::Eof) => break,
                Err(ReadlineError::Interrupted) => return Ok(None),
                Err(err) => return Err(eyre!("Readline error: {}", err)),
            }
        }
        Ok(Some(lines.join("\n")))
    }
}

impl Prompter for TerminalPrompter {
    fn prompt_name(&mut self) -> Result<Option<String>> {
        let name = self.read_line(&format!("{} ", "Skill name:".bright_cyan()))?;
        Ok(name)
    }

    fn prompt_template(&mut self, current: Option<&str>) -> Result<Option<String>> {
        if let Some(current) = current {
            eprintln!("{}", "Current template:".bright_cyan());
            for line in current.lines() {
                eprintln!("  {}", line.dimmed());
            }
        }
        eprintln!(
            "{} (use {} for replaceable content, end with a single '{}' line)",
            "Template:".bright_cyan(),
            PLACEHOLDER.red(),
            END_OF_BLOCK
        );
        self.read_block()
    }

    fn prompt_content(&mut self, slot: usize, total: usize) -> Result<Option<String>> {
        eprintln!("{} {}/{}", "Content".bright_cyan(), slot, total);
        self.read_block()
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        let answer = self.read_line(&format!("{} [y/N] ", message))?;
        Ok(matches!(
            answer.as_deref().map(|a| a.trim().to_lowercase()).as_deref(),
            Some("y") | Some("yes")
        ))
    }
}
