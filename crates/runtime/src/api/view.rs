//! Line-oriented abstraction for the match surface.
//!
//! Runtime users plug in [`BattleView`] implementations so a match can run
//! against a terminal, a recorded script, or a test fixture.
use std::collections::VecDeque;

use super::errors::{Result, RuntimeError};

/// Prefix that marks a decision line inside a transcript.
pub const INPUT_PREFIX: &str = "INPUT: ";

/// Sink for presentation lines and source of player decisions.
///
/// Different implementations can handle:
/// - Interactive play (stdin/stdout)
/// - Scripted decisions replayed from a transcript
/// - Testing fixtures that capture every line
pub trait BattleView {
    /// Emits one presentation line.
    fn write_line(&mut self, line: &str);

    /// Reads the next decision token.
    ///
    /// # Errors
    /// [`RuntimeError::FeedExhausted`] once no more input is available.
    fn read_line(&mut self) -> Result<String>;
}

/// View fed from a fixed list of decisions that records everything it shows.
///
/// Every decision read is echoed into the output as `INPUT: <token>`, so the
/// captured output has the same shape as a recorded transcript.
#[derive(Clone, Debug, Default)]
pub struct ScriptedView {
    inputs: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedView {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Builds a view whose decisions are the `INPUT:` lines of `transcript`.
    pub fn from_transcript(transcript: &str) -> Self {
        Self::new(
            transcript
                .lines()
                .filter_map(|line| line.strip_prefix(INPUT_PREFIX)),
        )
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn into_output(self) -> Vec<String> {
        self.output
    }

    /// Decisions not consumed yet.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl BattleView for ScriptedView {
    fn write_line(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn read_line(&mut self) -> Result<String> {
        let input = self.inputs.pop_front().ok_or(RuntimeError::FeedExhausted)?;
        self.output.push(format!("{INPUT_PREFIX}{input}"));
        Ok(input)
    }
}
