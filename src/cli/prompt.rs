use crate::cli::output;
use crate::corrector::{AmbiguousToken, Resolver};
use crate::error::{CorrectError, Result};
use std::io::{self, BufRead, Write};

/// Asks the user on a line-oriented console to pick a candidate.
///
/// Re-prompts on anything that is not a number in range, without limit.
/// End of input is an error rather than an endless loop.
pub struct ConsoleResolver<R, W> {
    input: R,
    output: W,
    colored: bool,
}

impl<R: BufRead, W: Write> ConsoleResolver<R, W> {
    pub fn new(input: R, output: W, colored: bool) -> Self {
        Self {
            input,
            output,
            colored,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_choice(&mut self, word: &str, count: usize) -> Result<usize> {
        let mut line = String::new();

        loop {
            output::print_choice_prompt(&mut self.output, word, count, self.colored)
                .map_err(CorrectError::Console)?;

            line.clear();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    writeln!(self.output).map_err(CorrectError::Console)?;
                    return Err(CorrectError::InputClosed(word.to_string()));
                }
                Ok(_) => {}
                // Undecodable bytes are consumed; treat them like any bad entry
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    output::print_invalid_input(&mut self.output, self.colored)
                        .map_err(CorrectError::Console)?;
                    continue;
                }
                Err(e) => return Err(CorrectError::Console(e)),
            }

            let printed = match line.trim().parse::<i64>() {
                Ok(choice) if choice >= 1 && choice as u64 <= count as u64 => {
                    return Ok(choice as usize - 1);
                }
                Ok(_) => output::print_invalid_choice(&mut self.output, self.colored),
                Err(_) => output::print_invalid_input(&mut self.output, self.colored),
            };
            printed.map_err(CorrectError::Console)?;
        }
    }
}

impl<R: BufRead, W: Write> Resolver for ConsoleResolver<R, W> {
    fn resolve(&mut self, token: &AmbiguousToken) -> Result<usize> {
        output::print_candidates(&mut self.output, &token.word, &token.candidates, self.colored)
            .map_err(CorrectError::Console)?;

        self.read_choice(&token.word, token.candidates.len())
    }

    fn no_suggestions(&mut self, word: &str) -> Result<()> {
        output::print_no_suggestions(&mut self.output, word, self.colored)
            .map_err(CorrectError::Console)
    }
}
