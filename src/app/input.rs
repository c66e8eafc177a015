use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::app::{App, Message, Model};

const MENU: &str = "\n--- Text Editor ---\n\
1. Insert Character\n\
2. Delete Character\n\
3. Undo\n\
4. Redo\n\
5. Display Text\n\
6. Save to File\n\
7. Exit\n";

/// Whitespace-separated token reader over a line-oriented stream.
///
/// Several answers may be typed on one line; they are consumed in order.
pub(super) struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub(super) const fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// The next token, or `None` at end of input.
    pub(super) fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .context("Failed to read input")?;
            if read == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(ToOwned::to_owned));
        }
    }
}

impl App {
    /// Show the menu, collect a choice and its arguments, and turn them into
    /// a [`Message`]. Returns `None` when input runs out.
    pub(super) fn read_message<R: BufRead>(
        &self,
        model: &Model,
        tokens: &mut TokenReader<R>,
        out: &mut impl Write,
    ) -> Result<Option<Message>> {
        if !model.quiet {
            write!(out, "{MENU}")?;
        }
        let Some(choice) = prompt(tokens, out, "Enter your choice: ")? else {
            return Ok(None);
        };

        let msg = match choice.parse::<i64>() {
            Ok(1) => {
                let Some(position) = prompt(tokens, out, "Enter position to insert (0-based): ")?
                else {
                    return Ok(None);
                };
                let Some(ch) = prompt(tokens, out, "Enter character to insert: ")? else {
                    return Ok(None);
                };
                match (parse_position(&position), parse_char(&ch)) {
                    (Ok(position), Ok(ch)) => Message::Insert { position, ch },
                    (Err(reason), _) | (_, Err(reason)) => Message::InvalidInput(reason),
                }
            }
            Ok(2) => {
                let Some(position) = prompt(tokens, out, "Enter position to delete (0-based): ")?
                else {
                    return Ok(None);
                };
                match parse_position(&position) {
                    Ok(position) => Message::Delete { position },
                    Err(reason) => Message::InvalidInput(reason),
                }
            }
            Ok(3) => Message::Undo,
            Ok(4) => Message::Redo,
            Ok(5) => Message::Display,
            Ok(6) => {
                let Some(name) = prompt(tokens, out, "Enter filename to save: ")? else {
                    return Ok(None);
                };
                Message::Save(PathBuf::from(name))
            }
            Ok(7) => Message::Exit,
            _ => Message::InvalidChoice(choice),
        };
        Ok(Some(msg))
    }
}

fn prompt<R: BufRead>(
    tokens: &mut TokenReader<R>,
    out: &mut impl Write,
    text: &str,
) -> Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush().context("Failed to flush output")?;
    tokens.next_token()
}

pub(super) fn parse_position(token: &str) -> Result<i64, String> {
    token
        .parse::<i64>()
        .map_err(|_| format!("'{token}' is not a position"))
}

/// A character argument must be exactly one ASCII character.
pub(super) fn parse_char(token: &str) -> Result<u8, String> {
    match token.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("'{token}' is not a single ASCII character")),
    }
}
