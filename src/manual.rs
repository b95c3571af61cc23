//! Human player reading moves as text.
//!
//! Players type `row,column` with 1-indexed numbers (`2,3`) or `exit`.
//! Malformed lines never reach the engine: the player is told and asked
//! again.

use std::io::{self, BufRead, BufReader, Cursor, Read, Stdin, Stdout, Write};

use thiserror::Error;

use crate::board::{Board, Color, Coord};
use crate::constants::{EXIT_COMMAND, INPUT_HINT};
use crate::policy::{Decision, MovePolicy, PolicyError};
use crate::rules::IllegalMove;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedInput {
    Move(Coord),
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected two numbers separated by a comma")]
    Format,
    #[error("rows and columns are numbered from 1")]
    ZeroIndex,
}

/// Parse `row,column` (1-indexed) into a 0-indexed coordinate.
pub fn parse_input(line: &str) -> Result<ParsedInput, InputError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case(EXIT_COMMAND) {
        return Ok(ParsedInput::Exit);
    }

    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    let [row, col] = parts.as_slice() else {
        return Err(InputError::Format);
    };
    let row: usize = row.parse().map_err(|_| InputError::Format)?;
    let col: usize = col.parse().map_err(|_| InputError::Format)?;
    if row == 0 || col == 0 {
        return Err(InputError::ZeroIndex);
    }
    Ok(ParsedInput::Move(Coord::new(row - 1, col - 1)))
}

/// Source of input lines for a manual player.
///
/// Stdin is locked only for the duration of one `read_line`, so any number
/// of manual players can share the terminal.
pub trait LineInput {
    /// Append one line to `buf`; `Ok(0)` means input is closed.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineInput for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineInput for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<R: Read> LineInput for BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Reads moves from `input`, writes prompts and the board to `output`.
pub struct ManualPolicy<R, W> {
    input: R,
    output: W,
    show_hint: bool,
}

impl ManualPolicy<Stdin, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: LineInput, W: Write> ManualPolicy<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            show_hint: true,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_decision(&mut self) -> Result<Decision, PolicyError> {
        loop {
            if self.show_hint {
                writeln!(self.output, "{INPUT_HINT}")?;
                self.show_hint = false;
            }
            write!(self.output, "Input: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // Input closed; treat like `exit`.
                return Ok(Decision::Quit);
            }

            match parse_input(&line) {
                Ok(ParsedInput::Move(at)) => return Ok(Decision::Place(at)),
                Ok(ParsedInput::Exit) => return Ok(Decision::Quit),
                Err(e) => {
                    writeln!(self.output, "Invalid input: {e}.")?;
                    self.show_hint = true;
                }
            }
        }
    }
}

impl<R: LineInput, W: Write> MovePolicy for ManualPolicy<R, W> {
    fn name(&self) -> &'static str {
        "manual"
    }

    fn select(
        &mut self,
        board: &Board,
        color: Color,
        previous_dead: &[Coord],
    ) -> Result<Decision, PolicyError> {
        write!(self.output, "{board}")?;
        if !previous_dead.is_empty() {
            writeln!(self.output, "{} stone(s) captured last turn.", previous_dead.len())?;
        }
        writeln!(
            self.output,
            "Turn for {color} ({}). Please make a move.",
            color.symbol()
        )?;
        self.read_decision()
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn reject(&mut self, _at: Coord, reason: &IllegalMove) -> Result<(), PolicyError> {
        writeln!(self.output, "{reason}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("2,3"), Ok(ParsedInput::Move(Coord::new(1, 2))));
        assert_eq!(
            parse_input("  1 , 1 \n"),
            Ok(ParsedInput::Move(Coord::new(0, 0)))
        );
        assert_eq!(parse_input("EXIT"), Ok(ParsedInput::Exit));
        assert_eq!(parse_input("2;3"), Err(InputError::Format));
        assert_eq!(parse_input("a,b"), Err(InputError::Format));
        assert_eq!(parse_input("1,2,3"), Err(InputError::Format));
        assert_eq!(parse_input("-1,2"), Err(InputError::Format));
        assert_eq!(parse_input("0,2"), Err(InputError::ZeroIndex));
    }

    #[test]
    fn test_manual_reprompts_on_malformed_input() {
        let input = Cursor::new("nonsense\n3,4\n");
        let mut policy = ManualPolicy::new(input, Vec::new());
        let decision = policy.select(&Board::new(5), Color::Black, &[]).unwrap();
        assert_eq!(decision, Decision::Place(Coord::new(2, 3)));

        let out = String::from_utf8(policy.into_output()).unwrap();
        assert!(out.contains("Turn for black (X)"));
        assert!(out.contains("Invalid input"));
        assert_eq!(out.matches(INPUT_HINT).count(), 2);
    }

    #[test]
    fn test_manual_exit_and_eof_quit() {
        let mut policy = ManualPolicy::new(Cursor::new("exit\n"), io::sink());
        assert_eq!(
            policy.select(&Board::new(3), Color::White, &[]).unwrap(),
            Decision::Quit
        );

        let mut policy = ManualPolicy::new(Cursor::new(""), io::sink());
        assert_eq!(
            policy.select(&Board::new(3), Color::White, &[]).unwrap(),
            Decision::Quit
        );
    }

    #[test]
    fn test_manual_reads_from_buffered_reader() {
        let input = BufReader::new("exit\n".as_bytes());
        let mut policy = ManualPolicy::new(input, io::sink());
        assert_eq!(
            policy.select(&Board::new(3), Color::Black, &[]).unwrap(),
            Decision::Quit
        );
    }

    #[test]
    fn test_stdio_players_do_not_hold_stdin() {
        let _black = ManualPolicy::stdio();
        let _white = ManualPolicy::stdio();
        // A lock taken here would block if either player still held one.
        drop(io::stdin().lock());
    }

    #[test]
    fn test_manual_reports_rejection() {
        let mut policy = ManualPolicy::new(Cursor::new(""), Vec::new());
        let at = Coord::new(0, 0);
        policy.reject(at, &IllegalMove::Occupied { at }).unwrap();
        let out = String::from_utf8(policy.into_output()).unwrap();
        assert!(out.contains("already occupied"));
    }
}
