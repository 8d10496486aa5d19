use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::select::COLUMN_PLACEHOLDER;

// ---------------------------------------------------------------------------
// Prompt / response vocabulary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A message box: results or an error the user has to acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// What the user is being asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    /// Pick a CSV file.
    OpenFile,
    /// Pick the column holding names.
    Column { choices: Vec<String> },
    /// Exclude winners of earlier draws?
    Exclusion,
    /// How many names to draw, at most `max`.
    Count { max: usize },
    Notice(Notice),
    /// Draw again from the same file?
    DrawAgain,
}

/// The user's answer to a [`Prompt`].
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    File(PathBuf),
    /// `None` while the placeholder is still selected.
    Column(Option<String>),
    Confirm(bool),
    Text(String),
    Acknowledged,
}

/// A blocking dialog provider.
///
/// `request` returns `None` when the user cancels or closes the dialog.
pub trait Prompter {
    fn request(&mut self, prompt: &Prompt) -> Option<Response>;
}

// ---------------------------------------------------------------------------
// Terminal prompter
// ---------------------------------------------------------------------------

/// Line-oriented prompts over any reader / writer pair.
///
/// End of input cancels whatever is being asked.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsolePrompter { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn yes_no(&mut self, question: &str) -> io::Result<Option<bool>> {
        loop {
            let Some(answer) = self.ask(&format!("{question} [y/n]: "))? else {
                return Ok(None);
            };
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }

    fn try_request(&mut self, prompt: &Prompt) -> io::Result<Option<Response>> {
        match prompt {
            Prompt::OpenFile => {
                let path = self.ask("CSV file (empty to cancel): ")?;
                Ok(path
                    .filter(|p| !p.is_empty())
                    .map(|p| Response::File(PathBuf::from(p))))
            }
            Prompt::Column { choices } => {
                writeln!(self.output, "Select the column that holds the names:")?;
                writeln!(self.output, "  0) {COLUMN_PLACEHOLDER}")?;
                for (i, c) in choices.iter().enumerate() {
                    writeln!(self.output, "  {}) {c}", i + 1)?;
                }
                let Some(answer) = self.ask("Column (q to quit): ")? else {
                    return Ok(None);
                };
                if answer.eq_ignore_ascii_case("q") {
                    return Ok(None);
                }
                let picked = match answer.parse::<usize>() {
                    Ok(n) if n >= 1 => choices.get(n - 1).cloned(),
                    Ok(_) => None,
                    Err(_) => choices.iter().find(|c| **c == answer).cloned(),
                };
                Ok(Some(Response::Column(picked)))
            }
            Prompt::Exclusion => Ok(self
                .yes_no("Exclude winners of previous draws?")?
                .map(Response::Confirm)),
            Prompt::Count { max } => {
                let answer =
                    self.ask(&format!("How many names? (max {max}, empty to cancel): "))?;
                Ok(answer.filter(|a| !a.is_empty()).map(Response::Text))
            }
            Prompt::Notice(notice) => {
                let tag = match notice.level {
                    NoticeLevel::Info => "",
                    NoticeLevel::Error => "error: ",
                };
                writeln!(self.output, "\n{tag}{}\n{}\n", notice.title, notice.message)?;
                Ok(Some(Response::Acknowledged))
            }
            Prompt::DrawAgain => Ok(self
                .yes_no("Draw again from this file?")?
                .map(Response::Confirm)),
        }
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn request(&mut self, prompt: &Prompt) -> Option<Response> {
        match self.try_request(prompt) {
            Ok(response) => response,
            Err(e) => {
                log::error!("Console prompt failed: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn prompter(input: &str) -> ConsolePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn columns() -> Prompt {
        Prompt::Column {
            choices: vec!["Name".into(), "Team".into()],
        }
    }

    #[test]
    fn column_by_number_or_name() {
        let mut p = prompter("2\nName\n0\nzzz\nq\n");
        assert_eq!(p.request(&columns()), Some(Response::Column(Some("Team".into()))));
        assert_eq!(p.request(&columns()), Some(Response::Column(Some("Name".into()))));
        assert_eq!(p.request(&columns()), Some(Response::Column(None)));
        assert_eq!(p.request(&columns()), Some(Response::Column(None)));
        assert_eq!(p.request(&columns()), None);

        let out = String::from_utf8(p.into_output()).expect("utf8");
        assert!(out.contains(COLUMN_PLACEHOLDER));
        assert!(out.contains("2) Team"));
    }

    #[test]
    fn yes_no_repeats_until_answered() {
        let mut p = prompter("maybe\nY\n");
        assert_eq!(p.request(&Prompt::Exclusion), Some(Response::Confirm(true)));
        let out = String::from_utf8(p.into_output()).expect("utf8");
        assert!(out.contains("Please answer y or n."));
    }

    #[test]
    fn end_of_input_cancels() {
        let mut p = prompter("");
        assert_eq!(p.request(&Prompt::OpenFile), None);
        assert_eq!(p.request(&Prompt::Exclusion), None);
        assert_eq!(p.request(&Prompt::Count { max: 3 }), None);
    }

    #[test]
    fn count_and_file_are_passed_through() {
        let mut p = prompter("names.csv\n two \n\n");
        assert_eq!(
            p.request(&Prompt::OpenFile),
            Some(Response::File(PathBuf::from("names.csv")))
        );
        assert_eq!(
            p.request(&Prompt::Count { max: 3 }),
            Some(Response::Text("two".into()))
        );
        assert_eq!(p.request(&Prompt::Count { max: 3 }), None);
    }

    #[test]
    fn notices_are_printed() {
        let mut p = prompter("");
        let notice = Notice::error("No name columns", "Nothing to draw from.");
        assert_eq!(p.request(&Prompt::Notice(notice)), Some(Response::Acknowledged));
        let out = String::from_utf8(p.into_output()).expect("utf8");
        assert!(out.contains("error: No name columns"));
    }
}
