//! Dead group detection and removal.
//!
//! Deaths are always decided on the full pre-removal board and only then
//! removed. Removing progressively could hand a liberty to a group that was
//! already dead on the snapshot.

use std::collections::BTreeSet;

use crate::board::{Board, Color, Coord};
use crate::connectivity::{group, group_liberties};

/// Every stone of `color` that belongs to a group without liberties.
///
/// Each group is flood-filled once; stones already seen as part of an
/// earlier group are skipped.
///
/// A stone on a 1x1 board has no liberty and is reported here. Placing it is
/// still legal (see [`crate::rules::simulate`]); the stone survives because
/// a turn only ever resolves the opponent of the player who moved.
pub fn find_dead(board: &Board, color: Color) -> BTreeSet<Coord> {
    let mut dead = BTreeSet::new();
    let mut seen = BTreeSet::new();

    for at in board.coords() {
        if board.get(at) != Some(color) || seen.contains(&at) {
            continue;
        }
        let members = group(board, at);
        if group_liberties(board, &members).is_empty() {
            dead.extend(members.iter().copied());
        }
        seen.extend(members);
    }
    dead
}

/// Clear every listed point. Returns how many points were cleared.
pub fn remove<'a>(board: &mut Board, coords: impl IntoIterator<Item = &'a Coord>) -> usize {
    let mut removed = 0;
    for &at in coords {
        board.set(at, None);
        removed += 1;
    }
    removed
}

/// Find and remove the dead groups of `color` in one atomic pass.
pub fn resolve(board: &mut Board, color: Color) -> BTreeSet<Coord> {
    let dead = find_dead(board, color);
    if !dead.is_empty() {
        remove(board, &dead);
        tracing::debug!(%color, captured = dead.len(), "removed dead stones");
    }
    dead
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectivity::has_liberty;

    fn board(diagram: &str) -> Board {
        diagram.parse().unwrap()
    }

    /// Per-stone scan without memoization.
    fn naive_dead(board: &Board, color: Color) -> BTreeSet<Coord> {
        board
            .coords()
            .filter(|&c| board.get(c) == Some(color) && !has_liberty(board, c))
            .collect()
    }

    #[test]
    fn test_find_dead_single_stone() {
        let b = board(
            ".O.
             OXO
             .O.",
        );
        assert_eq!(
            find_dead(&b, Color::Black),
            BTreeSet::from([Coord::new(1, 1)])
        );
        assert!(find_dead(&b, Color::White).is_empty());
    }

    #[test]
    fn test_find_dead_multiple_groups() {
        let b = board(
            "XO.XO
             O..OX
             .....
             OO...
             XXO..",
        );
        let dead = find_dead(&b, Color::Black);
        assert_eq!(
            dead,
            BTreeSet::from([
                Coord::new(0, 0),
                Coord::new(4, 0),
                Coord::new(4, 1),
            ])
        );
        assert_eq!(dead, naive_dead(&b, Color::Black));
    }

    #[test]
    fn test_memoized_matches_naive_scan() {
        let b = board(
            "XXOO.
             XOXO.
             OOXXO
             .OXO.
             ..O..",
        );
        for color in [Color::Black, Color::White] {
            assert_eq!(find_dead(&b, color), naive_dead(&b, color));
        }
    }

    #[test]
    fn test_remove_empty_is_noop() {
        let mut b = board("X.\n.O");
        let before = b.clone();
        assert_eq!(remove(&mut b, &BTreeSet::<Coord>::new()), 0);
        assert_eq!(b, before);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut b = board(
            "XO.
             O..
             ...",
        );
        let first = resolve(&mut b, Color::Black);
        assert_eq!(first, BTreeSet::from([Coord::new(0, 0)]));
        assert!(b.is_empty_at(Coord::new(0, 0)));
        assert!(find_dead(&b, Color::Black).is_empty());
        assert!(resolve(&mut b, Color::Black).is_empty());
    }

    #[test]
    fn test_resolve_decides_on_snapshot() {
        // Two separate dead groups, one scan.
        let mut b = board(
            "XOXO
             OOOO
             ....
             ....",
        );
        let dead = resolve(&mut b, Color::Black);
        assert_eq!(dead, BTreeSet::from([Coord::new(0, 0), Coord::new(0, 2)]));
        assert_eq!(b.count(Color::Black), 0);
        assert_eq!(b.count(Color::White), 6);
    }
}
