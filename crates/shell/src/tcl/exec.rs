// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Builds a pipeline from the arguments of a Tcl `exec` command.

use super::DialectError;
use crate::ast::{Pipeline, Redirect, RedirectOp, SimpleCommand};

/// Redirection words understood by `exec`, longest prefix first.
const EXEC_REDIRECTS: &[(&str, RedirectOp, Option<u32>)] = &[
    ("2>>", RedirectOp::Append, Some(2)),
    ("2>", RedirectOp::Out, Some(2)),
    (">&", RedirectOp::Both, None),
    (">>", RedirectOp::Append, None),
    (">", RedirectOp::Out, None),
    ("<", RedirectOp::In, None),
];

pub struct ExecBuilder {
    words: std::vec::IntoIter<String>,
}

impl ExecBuilder {
    pub fn new(words: Vec<String>) -> Self {
        Self { words: words.into_iter() }
    }

    /// Split the words on `|` / `|&` into commands with their redirections.
    pub fn parse_pipeline(mut self) -> Result<Pipeline, DialectError> {
        let mut commands = Vec::new();
        let mut current = SimpleCommand::default();

        while let Some(word) = self.words.next() {
            match word.as_str() {
                "|" | "|&" => {
                    if current.args.is_empty() {
                        return Err(DialectError::EmptyCommand);
                    }
                    if word == "|&" {
                        current.redirects.push(Redirect::new(RedirectOp::DupOut, Some(2), "1"));
                    }
                    commands.push(std::mem::take(&mut current));
                }
                "&" => return Err(DialectError::Background),
                "2>@1" => {
                    current.redirects.push(Redirect::new(RedirectOp::DupOut, Some(2), "1"));
                }
                _ => match self.redirect(&word)? {
                    Some(redirect) => current.redirects.push(redirect),
                    None => current.args.push(word),
                },
            }
        }

        if current.args.is_empty() {
            return Err(DialectError::EmptyCommand);
        }
        commands.push(current);
        Ok(Pipeline::new(commands).pipe_fail(true))
    }

    /// Recognize a redirection word, pulling a separate target if needed.
    fn redirect(&mut self, word: &str) -> Result<Option<Redirect>, DialectError> {
        // Channel forms (`>@ stdout`) and `<<` here-values have no file to open.
        if word.starts_with("<<") || word.starts_with("<@") || is_channel_redirect(word) {
            return Err(DialectError::UnsupportedRedirect { word: word.to_string() });
        }
        if word.starts_with(">>&") {
            return Err(DialectError::UnsupportedRedirect { word: word.to_string() });
        }

        let Some(&(prefix, op, fd)) = EXEC_REDIRECTS.iter().find(|(p, ..)| word.starts_with(p))
        else {
            return Ok(None);
        };

        let target = match &word[prefix.len()..] {
            "" => self
                .words
                .next()
                .ok_or_else(|| DialectError::MissingTarget { op: prefix.to_string() })?,
            attached => attached.to_string(),
        };
        Ok(Some(Redirect::new(op, fd, target)))
    }
}

fn is_channel_redirect(word: &str) -> bool {
    let rest = word.strip_prefix('2').unwrap_or(word);
    let Some(rest) = rest.strip_prefix('>') else {
        return false;
    };
    let rest = rest.strip_prefix('>').unwrap_or(rest);
    let rest = rest.strip_prefix('&').unwrap_or(rest);
    rest.starts_with('@')
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
