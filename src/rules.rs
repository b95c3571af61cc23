//! Placement legality.
//!
//! A placement is checked on a scratch copy of the board: place the stone,
//! remove the opponent's dead groups, then ask whether the new stone's group
//! still has a liberty. Captures come first, so a move into a point with no
//! liberties is legal when it kills an opposing group.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::board::{Board, Color, Coord};
use crate::capture::resolve;
use crate::connectivity::{has_liberty, neighbors};

/// Why a placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("Invalid placement: {at} is outside the {size}x{size} board")]
    OutOfBounds { at: Coord, size: usize },
    #[error("Invalid placement: {at} is already occupied")]
    Occupied { at: Coord },
    #[error("Invalid placement: no liberty at {at}")]
    Suicide { at: Coord },
}

/// The board after a hypothetical placement.
#[derive(Debug, Clone)]
pub struct Placement {
    pub board: Board,
    /// Opponent stones removed by the placement.
    pub captured: BTreeSet<Coord>,
}

/// Play `color` at `at` on a copy of `board` and resolve captures.
pub fn simulate(board: &Board, at: Coord, color: Color) -> Result<Placement, IllegalMove> {
    if !board.contains(at) {
        return Err(IllegalMove::OutOfBounds {
            at,
            size: board.size(),
        });
    }
    if board.get(at).is_some() {
        return Err(IllegalMove::Occupied { at });
    }

    let mut scratch = board.clone();
    scratch.set(at, Some(color));
    let captured = resolve(&mut scratch, color.opponent());

    // A point without neighbors (1x1 board) cannot be surrounded. Such a
    // stone still counts as dead for `find_dead`, which is never asked
    // about the mover's own color.
    let isolated = neighbors(&scratch, at).is_empty();
    if !isolated && !has_liberty(&scratch, at) {
        return Err(IllegalMove::Suicide { at });
    }
    Ok(Placement {
        board: scratch,
        captured,
    })
}

/// Legality verdict for `color` playing at `at`.
pub fn is_legal(board: &Board, at: Coord, color: Color) -> Result<(), IllegalMove> {
    simulate(board, at, color).map(|_| ())
}

/// Validate and commit a placement, returning the captured stones.
///
/// On error the board is left untouched.
pub fn play(board: &mut Board, at: Coord, color: Color) -> Result<Vec<Coord>, IllegalMove> {
    let Placement {
        board: next,
        captured,
    } = simulate(board, at, color)?;
    *board = next;
    Ok(captured.into_iter().collect())
}

/// Every legal placement for `color`, row-major.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Coord> {
    board
        .coords()
        .filter(|&at| is_legal(board, at, color).is_ok())
        .collect()
}
