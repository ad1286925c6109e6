//! Terminal view.
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use battle_runtime::{BattleView, INPUT_PREFIX, Result, RuntimeError};
use tracing::warn;

/// Prints match lines and reads one decision token per input line.
pub struct ConsoleView<R, W> {
    input: R,
    output: W,
}

impl ConsoleView<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> BattleView for ConsoleView<R, W> {
    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.output, "{line}") {
            warn!(error = %e, "failed to write output line");
        }
    }

    /// Shows the input prompt and reads a line; end of input exhausts the feed.
    fn read_line(&mut self) -> Result<String> {
        write!(self.output, "{INPUT_PREFIX}")
            .and_then(|()| self.output.flush())
            .map_err(|e| RuntimeError::Input(e.to_string()))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| RuntimeError::Input(e.to_string()))?;
        if read == 0 {
            return Err(RuntimeError::FeedExhausted);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn prompts_and_strips_line_endings() {
        let mut view = ConsoleView::new(Cursor::new("2\r\n"), Vec::new());
        view.write_line("1: Atacar");

        assert_eq!(view.read_line().unwrap(), "2");
        assert!(matches!(view.read_line(), Err(RuntimeError::FeedExhausted)));

        let written = String::from_utf8(view.into_output()).unwrap();
        assert_eq!(written, "1: Atacar\nINPUT: INPUT: ");
    }
}
