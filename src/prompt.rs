use log::debug;
use std::io::{BufRead, Write};

use crate::error::Result;

/// Outcome of a single question put to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAnswer {
    /// The user typed something other than the quit sentinel
    Value(String),
    /// The user pressed enter and the question had a default
    Default,
    /// The user typed `q`/`Q`, or input ended
    Quit,
}

impl PromptAnswer {
    /// Collapse into the effective text, or `None` on quit.
    pub fn resolve(self, default: &str) -> Option<String> {
        match self {
            PromptAnswer::Value(v) => Some(v),
            PromptAnswer::Default => Some(default.to_string()),
            PromptAnswer::Quit => None,
        }
    }
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print an informational line between questions.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Ask `question` until a usable answer arrives.
    /// Empty input loops when there is no default.
    pub fn ask(&mut self, question: &str, has_default: bool) -> Result<PromptAnswer> {
        loop {
            write!(self.output, "{} ", question)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("prompt: end of input on '{}'", question);
                return Ok(PromptAnswer::Quit);
            }

            let answer = line.trim_end_matches(['\r', '\n']);
            if answer.eq_ignore_ascii_case("q") {
                return Ok(PromptAnswer::Quit);
            }
            if !answer.is_empty() {
                return Ok(PromptAnswer::Value(answer.to_string()));
            }
            if has_default {
                return Ok(PromptAnswer::Default);
            }
        }
    }

    /// Yes/no question. `None` means the user quit.
    pub fn confirm(&mut self, question: &str, default_yes: bool) -> Result<Option<bool>> {
        let default = if default_yes { "y" } else { "n" };
        Ok(self
            .ask(question, true)?
            .resolve(default)
            .map(|answer| is_affirmative(&answer)))
    }
}

fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
