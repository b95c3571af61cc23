//! Neighbors, groups and liberties.
//!
//! Groups are never cached: the board changes every turn, so each query
//! flood-fills from scratch. The fill uses an explicit stack and a visited
//! table, bounding a query to O(N²) work.

use std::collections::BTreeSet;

use crate::board::{Board, Coord};

/// The up-to-four orthogonal neighbors of `at` that lie on the board.
///
/// Order: North, South, West, East. An off-board `at` has none.
pub fn neighbors(board: &Board, at: Coord) -> Vec<Coord> {
    let s = board.size();
    if !board.contains(at) {
        return Vec::new();
    }
    let mut v = Vec::with_capacity(4);
    if at.row > 0 {
        v.push(Coord::new(at.row - 1, at.col));
    }
    if at.row + 1 < s {
        v.push(Coord::new(at.row + 1, at.col));
    }
    if at.col > 0 {
        v.push(Coord::new(at.row, at.col - 1));
    }
    if at.col + 1 < s {
        v.push(Coord::new(at.row, at.col + 1));
    }
    v
}

/// Neighbors holding the same cell value as `at`.
///
/// On an empty point this returns the adjacent empty points, which is what
/// [`group`] needs to flood an empty region; callers outside this module
/// normally ask about stones.
pub fn neighbor_allies(board: &Board, at: Coord) -> Vec<Coord> {
    let cell = board.get(at);
    neighbors(board, at)
        .into_iter()
        .filter(|&n| board.get(n) == cell)
        .collect()
}

/// The maximal connected set of points sharing the cell value at `at`.
///
/// Contains `at` itself when `at` is on the board; an off-board `at` yields
/// an empty set.
pub fn group(board: &Board, at: Coord) -> BTreeSet<Coord> {
    let mut members = BTreeSet::new();
    if !board.contains(at) {
        return members;
    }
    let mut stack = vec![at];
    let mut visited = vec![false; board.size() * board.size()];

    while let Some(pt) = stack.pop() {
        let i = pt.row * board.size() + pt.col;
        if visited[i] {
            continue;
        }
        visited[i] = true;
        members.insert(pt);
        for ally in neighbor_allies(board, pt) {
            if !visited[ally.row * board.size() + ally.col] {
                stack.push(ally);
            }
        }
    }
    members
}

/// Distinct empty points adjacent to the group containing `at`.
pub fn liberties(board: &Board, at: Coord) -> BTreeSet<Coord> {
    group_liberties(board, &group(board, at))
}

/// Distinct empty points adjacent to any member of `members`.
pub(crate) fn group_liberties(board: &Board, members: &BTreeSet<Coord>) -> BTreeSet<Coord> {
    members
        .iter()
        .flat_map(|&m| neighbors(board, m))
        .filter(|&n| board.get(n).is_none())
        .collect()
}

/// Whether the group containing `at` touches at least one empty point.
///
/// This is the sole definition of "alive". An empty or off-board `at` is
/// trivially alive.
///
/// The only point with no neighbors at all is the single point of a 1x1
/// board; a stone there has no liberty and reports `false`, even though
/// [`crate::rules::is_legal`] allows placing it.
pub fn has_liberty(board: &Board, at: Coord) -> bool {
    if board.get(at).is_none() {
        return true;
    }
    group(board, at)
        .iter()
        .any(|&m| neighbors(board, m).into_iter().any(|n| board.get(n).is_none()))
}
