use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::core::{Coordinate, Grid, ShotError, ShotRecord};
use crate::ui;

use super::TargetSource;

/// Reasons typed input is not a coordinate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Anything other than exactly two tokens.
    #[error("Enter exactly two numbers, row then column (got {0})")]
    WrongArity(usize),
    #[error("'{0}' is not a number")]
    NotANumber(String),
    /// Rows and columns start at 1.
    #[error("Rows and columns are numbered from 1")]
    Zero,
}

/// Parse `"row col"` (1-based) into an internal coordinate. Bounds are left
/// to the grid.
pub fn parse_coord(input: &str) -> Result<Coordinate, InputError> {
    let parts: Vec<&str> = input.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    if parts.len() != 2 {
        return Err(InputError::WrongArity(parts.len()));
    }
    let row: usize = parts[0]
        .parse()
        .map_err(|_| InputError::NotANumber(parts[0].to_string()))?;
    let col: usize = parts[1]
        .parse()
        .map_err(|_| InputError::NotANumber(parts[1].to_string()))?;
    Coordinate::from_one_based(row, col).ok_or(InputError::Zero)
}

/// Reads targets typed by a person. Generic over the streams so it can be
/// driven from tests.
pub struct StdinTargets<R, W> {
    input: R,
    output: W,
    buf: String,
}

impl StdinTargets<io::StdinLock<'static>, io::Stdout> {
    /// Read from the process's stdin, write prompts to stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdinTargets<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt until a well-formed coordinate is typed. `None` on end of input
    /// or a broken stream.
    fn read_coord(&mut self, size: usize) -> Option<Coordinate> {
        loop {
            if write!(self.output, "Your shot (row col, 1-{}): ", size)
                .and_then(|_| self.output.flush())
                .is_err()
            {
                return None;
            }
            self.buf.clear();
            match self.input.read_line(&mut self.buf) {
                Ok(0) | Err(_) => {
                    log::debug!("input closed while waiting for a target");
                    return None;
                }
                Ok(_) => {}
            }
            match parse_coord(self.buf.trim()) {
                Ok(coord) => return Some(coord),
                Err(e) => {
                    let _ = writeln!(self.output, "{}", e);
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> TargetSource for StdinTargets<R, W> {
    fn next_target(&mut self, target: &Grid) -> Option<Coordinate> {
        self.read_coord(target.size())
    }

    fn rejected(&mut self, error: &ShotError) {
        let _ = writeln!(self.output, "{}", ui::rejection_message(error));
    }

    fn outcome(&mut self, shot: ShotRecord) {
        let _ = writeln!(self.output, "{}", ui::outcome_message(shot.outcome));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_based_pairs() {
        assert_eq!(parse_coord("1 1"), Ok(Coordinate::new(0, 0)));
        assert_eq!(parse_coord(" 3,6 "), Ok(Coordinate::new(2, 5)));
        assert_eq!(parse_coord("3"), Err(InputError::WrongArity(1)));
        assert_eq!(parse_coord("a 2"), Err(InputError::NotANumber("a".into())));
        assert_eq!(parse_coord("0 2"), Err(InputError::Zero));
    }

    #[test]
    fn input_errors_are_std_errors() {
        let err: Box<dyn std::error::Error> = Box::new(InputError::WrongArity(3));
        assert_eq!(
            err.to_string(),
            "Enter exactly two numbers, row then column (got 3)"
        );
    }

    #[test]
    fn reprompts_on_bad_input_and_stops_at_eof() {
        let input = io::Cursor::new("nope\n2 3\n");
        let mut targets = StdinTargets::new(input, Vec::new());
        let grid = Grid::new(6, true);
        assert_eq!(targets.next_target(&grid), Some(Coordinate::new(1, 2)));
        assert_eq!(targets.next_target(&grid), None);
        let out = String::from_utf8(targets.into_output()).unwrap();
        assert!(out.contains("Enter exactly two numbers"));
    }
}
