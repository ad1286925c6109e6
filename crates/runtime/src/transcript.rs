//! Recorded match scripts.
//!
//! A transcript is the full expected output of a match with every decision
//! inlined as an `INPUT: <token>` line, exactly as [`ScriptedView`] records
//! it. Replaying the decisions and comparing the captured output line by line
//! checks a whole match.

use std::path::Path;

use thiserror::Error;

use crate::api::{INPUT_PREFIX, Result, RuntimeError, ScriptedView};

/// Placeholder shown when the produced output runs past the script.
pub const END_OF_SCRIPT: &str = "[EndOfFile]";

/// First point where produced output departs from a transcript.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("line {line}: expected \"{expected}\", got \"{actual}\"")]
pub struct TranscriptMismatch {
    /// 1-based line number.
    pub line: usize,
    pub expected: String,
    pub actual: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Trailing blank lines are dropped.
    pub fn parse(text: &str) -> Self {
        let mut lines: Vec<String> = text
            .lines()
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        Self { lines }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            RuntimeError::Content(format!("failed to read transcript {}: {}", path.display(), e))
        })?;
        Ok(Self::parse(&text))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Decision tokens, in order.
    pub fn inputs(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter_map(|line| line.strip_prefix(INPUT_PREFIX))
    }

    /// A view that replays this transcript's decisions.
    pub fn view(&self) -> ScriptedView {
        ScriptedView::new(self.inputs())
    }

    /// Compares produced output against the script.
    pub fn compare(&self, produced: &[String]) -> std::result::Result<(), TranscriptMismatch> {
        let length = self.lines.len().max(produced.len());
        for index in 0..length {
            let expected = self.lines.get(index).map_or(END_OF_SCRIPT, String::as_str);
            let actual = produced.get(index).map_or(END_OF_SCRIPT, String::as_str);
            if expected != actual {
                return Err(TranscriptMismatch {
                    line: index + 1,
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                });
            }
        }
        Ok(())
    }
}
