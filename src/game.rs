//! Match controller.
//!
//! A [`Match`] owns the live board and alternates between the two players,
//! Black first. Each accepted placement removes the opponent's dead groups;
//! the mover's own group can never be dead because suicide is rejected
//! before the placement is committed.
//!
//! A match ends when
//! - both players pass in a row (a player with no legal placement passes),
//! - a player resigns, or
//! - the turn limit is reached.
//!
//! Apart from resignation the winner is whoever has more stones on the board.

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

use crate::board::{Board, Color, Coord};
use crate::config::MatchConfig;
use crate::constants::PASSES_TO_END;
use crate::policy::{Decision, MovePolicy, PolicyError};
use crate::rules::{IllegalMove, play};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Color),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(color) => write!(f, "{color} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    ConsecutivePasses,
    Resignation,
    MoveLimit,
}

/// Final state of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub outcome: Outcome,
    pub reason: EndReason,
    /// Turns taken (placements and passes).
    pub moves: usize,
    pub board: Board,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    ToMove(Color),
    Finished(MatchResult),
}

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("{color} cannot play at {at}")]
    Illegal {
        color: Color,
        at: Coord,
        #[source]
        reason: IllegalMove,
    },
    /// Automated players only return legal moves; this is a bug in the player.
    #[error("{policy} player ({color}) proposed an illegal move at {at}")]
    IllegalAutomatedMove {
        policy: &'static str,
        color: Color,
        at: Coord,
        #[source]
        reason: IllegalMove,
    },
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error("match cancelled by the player")]
    Cancelled,
    #[error("match is already finished")]
    Finished,
}

/// Winner by stone count.
pub fn tally(board: &Board) -> Outcome {
    match board.count(Color::Black).cmp(&board.count(Color::White)) {
        Ordering::Greater => Outcome::Winner(Color::Black),
        Ordering::Less => Outcome::Winner(Color::White),
        Ordering::Equal => Outcome::Draw,
    }
}

pub struct Match {
    board: Board,
    status: Status,
    /// Stones removed by the previous turn.
    previous_dead: Vec<Coord>,
    consecutive_passes: usize,
    moves: usize,
    max_moves: usize,
}

impl Match {
    /// Empty `size` x `size` board, Black to move.
    pub fn new(size: usize, max_moves: usize) -> Self {
        Self::with_board(Board::new(size), Color::Black, max_moves)
    }

    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(config.size, config.move_cap())
    }

    /// Continue from an arbitrary position.
    pub fn with_board(board: Board, to_move: Color, max_moves: usize) -> Self {
        Self {
            board,
            status: Status::ToMove(to_move),
            previous_dead: Vec::new(),
            consecutive_passes: 0,
            moves: 0,
            max_moves,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Color to move, `None` once finished.
    pub fn to_move(&self) -> Option<Color> {
        match self.status {
            Status::ToMove(color) => Some(color),
            Status::Finished(_) => None,
        }
    }

    pub fn previous_dead(&self) -> &[Coord] {
        &self.previous_dead
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    fn active(&self) -> Result<Color, MatchError> {
        self.to_move().ok_or(MatchError::Finished)
    }

    /// Place a stone for the side to move.
    ///
    /// Returns the captured stones. An illegal placement changes nothing.
    pub fn place(&mut self, at: Coord) -> Result<Vec<Coord>, MatchError> {
        let color = self.active()?;
        self.commit(color, at)
            .map_err(|reason| MatchError::Illegal { color, at, reason })
    }

    fn commit(&mut self, color: Color, at: Coord) -> Result<Vec<Coord>, IllegalMove> {
        let captured = play(&mut self.board, at, color)?;
        tracing::debug!(
            turn = self.moves + 1,
            %color,
            %at,
            captured = captured.len(),
            "stone placed"
        );
        self.previous_dead = captured.clone();
        self.consecutive_passes = 0;
        self.advance(color);
        Ok(captured)
    }

    /// The side to move passes.
    pub fn pass(&mut self) -> Result<(), MatchError> {
        let color = self.active()?;
        tracing::debug!(turn = self.moves + 1, %color, "pass");
        self.previous_dead.clear();
        self.consecutive_passes += 1;
        self.advance(color);
        Ok(())
    }

    /// The side to move resigns; the opponent wins.
    pub fn resign(&mut self) -> Result<(), MatchError> {
        let color = self.active()?;
        self.finish(Outcome::Winner(color.opponent()), EndReason::Resignation);
        Ok(())
    }

    fn advance(&mut self, mover: Color) {
        self.moves += 1;
        if self.consecutive_passes >= PASSES_TO_END {
            self.finish(tally(&self.board), EndReason::ConsecutivePasses);
        } else if self.moves >= self.max_moves {
            self.finish(tally(&self.board), EndReason::MoveLimit);
        } else {
            self.status = Status::ToMove(mover.opponent());
        }
    }

    fn finish(&mut self, outcome: Outcome, reason: EndReason) {
        tracing::info!(%outcome, ?reason, moves = self.moves, "match finished");
        self.status = Status::Finished(MatchResult {
            outcome,
            reason,
            moves: self.moves,
            board: self.board.clone(),
        });
    }

    /// Play one turn for the side to move using `policy`.
    ///
    /// An interactive policy is asked again after an illegal proposal; an
    /// automated one fails the match.
    pub fn step(&mut self, policy: &mut dyn MovePolicy) -> Result<&Status, MatchError> {
        let color = self.active()?;
        loop {
            match policy.select(&self.board, color, &self.previous_dead)? {
                Decision::Place(at) => match self.commit(color, at) {
                    Ok(_) => break,
                    Err(reason) if policy.is_interactive() => {
                        tracing::warn!(%color, %at, %reason, "rejected move, asking again");
                        policy.reject(at, &reason)?;
                    }
                    Err(reason) => {
                        return Err(MatchError::IllegalAutomatedMove {
                            policy: policy.name(),
                            color,
                            at,
                            reason,
                        });
                    }
                },
                Decision::NoLegalMove => {
                    self.pass()?;
                    break;
                }
                Decision::Resign => {
                    self.resign()?;
                    break;
                }
                Decision::Quit => return Err(MatchError::Cancelled),
            }
        }
        Ok(&self.status)
    }

    /// Play until the match finishes.
    pub fn run<'a>(
        mut self,
        black: &'a mut dyn MovePolicy,
        white: &'a mut dyn MovePolicy,
    ) -> Result<MatchResult, MatchError> {
        loop {
            let color = match self.status {
                Status::Finished(result) => return Ok(result),
                Status::ToMove(color) => color,
            };
            let policy: &mut dyn MovePolicy = match color {
                Color::Black => &mut *black,
                Color::White => &mut *white,
            };
            self.step(policy)?;
        }
    }
}
