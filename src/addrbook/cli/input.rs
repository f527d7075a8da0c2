use addrbook::error::{BookError, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io;

/// One read from the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Input {
    Line(String),
    /// Ctrl-C at the prompt
    Interrupted,
    /// Ctrl-D or end of piped input
    Eof,
}

pub(super) trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Input>;
}

/// Interactive prompt with line editing and in-session history.
/// Falls back to plain line reads when stdin is not a terminal.
pub(super) struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub(super) fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(readline_error)?;
        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(err) => Err(readline_error(err)),
        }
    }
}

fn readline_error(err: ReadlineError) -> BookError {
    match err {
        ReadlineError::Io(e) => BookError::Io(e),
        other => BookError::Io(io::Error::other(other.to_string())),
    }
}

#[cfg(test)]
pub(super) mod scripted {
    use super::*;
    use std::collections::VecDeque;

    /// Replays a fixed sequence of reads, then reports end of input.
    pub(in crate::cli) struct ScriptedSource {
        reads: VecDeque<Input>,
    }

    impl ScriptedSource {
        pub(in crate::cli) fn lines(script: &str) -> Self {
            Self::new(script.lines().map(|l| Input::Line(l.to_string())).collect())
        }

        pub(in crate::cli) fn new(reads: Vec<Input>) -> Self {
            Self {
                reads: reads.into(),
            }
        }
    }

    impl LineSource for ScriptedSource {
        fn read_line(&mut self, _prompt: &str) -> Result<Input> {
            Ok(self.reads.pop_front().unwrap_or(Input::Eof))
        }
    }
}
