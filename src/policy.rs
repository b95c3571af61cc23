//! Move-selection policies.
//!
//! Every player implements [`MovePolicy`]. The set of players is closed and
//! named by [`PolicyKind`], which is what the command line selects.
//!
//! Automated policies only ever return legal coordinates; the match treats
//! anything else from them as a bug. Randomness comes from an explicit
//! [`fastrand::Rng`] so a seeded match replays identically.

use std::fmt;
use std::io;
use std::str::FromStr;

use thiserror::Error;

use crate::board::{Board, Color, Coord};
use crate::config::ConfigError;
use crate::manual::ManualPolicy;
use crate::rules::{IllegalMove, legal_moves, simulate};

/// What a policy wants to do this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Place a stone.
    Place(Coord),
    /// There is no legal placement for this color.
    NoLegalMove,
    /// Give up the match.
    Resign,
    /// Leave the program (manual `exit`).
    Quit,
}

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("failed to exchange input with the player")]
    Io(#[from] io::Error),
}

/// A player.
pub trait MovePolicy {
    /// Identifier as accepted on the command line.
    fn name(&self) -> &'static str;

    /// Choose a move for `color`.
    ///
    /// `previous_dead` holds the stones removed by the previous turn.
    fn select(
        &mut self,
        board: &Board,
        color: Color,
        previous_dead: &[Coord],
    ) -> Result<Decision, PolicyError>;

    /// Interactive players may propose illegal moves and get asked again.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Told when the match refuses a proposed placement.
    fn reject(&mut self, _at: Coord, _reason: &IllegalMove) -> Result<(), PolicyError> {
        Ok(())
    }
}

/// Picks uniformly among all legal placements.
pub struct RandomPolicy {
    rng: fastrand::Rng,
}

impl RandomPolicy {
    pub fn new(rng: fastrand::Rng) -> Self {
        Self { rng }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(fastrand::Rng::with_seed(seed))
    }
}

impl MovePolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select(
        &mut self,
        board: &Board,
        color: Color,
        _previous_dead: &[Coord],
    ) -> Result<Decision, PolicyError> {
        let candidates = legal_moves(board, color);
        if candidates.is_empty() {
            return Ok(Decision::NoLegalMove);
        }
        let pick = candidates[self.rng.usize(..candidates.len())];
        Ok(Decision::Place(pick))
    }
}

/// Picks the placement that captures the most opponent stones, breaking ties
/// uniformly at random.
pub struct GreedyPolicy {
    rng: fastrand::Rng,
}

impl GreedyPolicy {
    pub fn new(rng: fastrand::Rng) -> Self {
        Self { rng }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(fastrand::Rng::with_seed(seed))
    }

    /// Legal placements paired with how many stones each captures.
    pub fn evaluate(board: &Board, color: Color) -> Vec<(Coord, usize)> {
        board
            .coords()
            .filter_map(|at| {
                simulate(board, at, color)
                    .ok()
                    .map(|placement| (at, placement.captured.len()))
            })
            .collect()
    }
}

impl MovePolicy for GreedyPolicy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn select(
        &mut self,
        board: &Board,
        color: Color,
        _previous_dead: &[Coord],
    ) -> Result<Decision, PolicyError> {
        let scored = Self::evaluate(board, color);
        let Some(best) = scored.iter().map(|&(_, n)| n).max() else {
            return Ok(Decision::NoLegalMove);
        };
        let top: Vec<Coord> = scored
            .into_iter()
            .filter(|&(_, n)| n == best)
            .map(|(at, _)| at)
            .collect();
        let pick = top[self.rng.usize(..top.len())];
        tracing::trace!(%color, %pick, captures = best, "greedy choice");
        Ok(Decision::Place(pick))
    }
}

/// Slot for a home-grown strategy. Until one is written it resigns at once.
#[derive(Default)]
pub struct CustomPolicy;

impl MovePolicy for CustomPolicy {
    fn name(&self) -> &'static str {
        "my"
    }

    fn select(
        &mut self,
        _board: &Board,
        color: Color,
        _previous_dead: &[Coord],
    ) -> Result<Decision, PolicyError> {
        tracing::warn!(%color, "custom policy has no strategy, resigning");
        Ok(Decision::Resign)
    }
}

/// Player identifiers accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Manual,
    Random,
    Greedy,
    Custom,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Manual,
        PolicyKind::Random,
        PolicyKind::Greedy,
        PolicyKind::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Manual => "manual",
            PolicyKind::Random => "random",
            PolicyKind::Greedy => "greedy",
            PolicyKind::Custom => "my",
        }
    }

    /// Construct the player. Manual players talk to stdin/stdout.
    pub fn build(self, rng: fastrand::Rng) -> Box<dyn MovePolicy> {
        match self {
            PolicyKind::Manual => Box::new(ManualPolicy::stdio()),
            PolicyKind::Random => Box::new(RandomPolicy::new(rng)),
            PolicyKind::Greedy => Box::new(GreedyPolicy::new(rng)),
            PolicyKind::Custom => Box::new(CustomPolicy),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| ConfigError::UnknownPolicy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(diagram: &str) -> Board {
        diagram.parse().unwrap()
    }

    #[test]
    fn test_random_returns_legal_move() {
        let b = board(
            ".O.
             O..
             ...",
        );
        let mut policy = RandomPolicy::with_seed(7);
        for _ in 0..20 {
            match policy.select(&b, Color::Black, &[]).unwrap() {
                Decision::Place(at) => {
                    assert_ne!(at, Coord::new(0, 0));
                    assert!(crate::rules::is_legal(&b, at, Color::Black).is_ok());
                }
                other => panic!("unexpected decision {other:?}"),
            }
        }
    }

    #[test]
    fn test_random_without_legal_moves() {
        let b = board(
            ".O
             O.",
        );
        let mut policy = RandomPolicy::with_seed(1);
        assert_eq!(
            policy.select(&b, Color::Black, &[]).unwrap(),
            Decision::NoLegalMove
        );
    }

    #[test]
    fn test_random_is_deterministic_under_seed() {
        let b = Board::new(5);
        let picks = |seed| {
            let mut policy = RandomPolicy::with_seed(seed);
            (0..5)
                .map(|_| policy.select(&b, Color::White, &[]).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(42), picks(42));
    }

    #[test]
    fn test_greedy_prefers_capture() {
        let b = board(
            ".X...
             XOX..
             .....
             .....
             .....",
        );
        let mut policy = GreedyPolicy::with_seed(3);
        for _ in 0..10 {
            assert_eq!(
                policy.select(&b, Color::Black, &[]).unwrap(),
                Decision::Place(Coord::new(2, 1))
            );
        }
    }

    #[test]
    fn test_greedy_prefers_larger_capture() {
        let b = board(
            ".XOXOOX
             ...XOO.
             ....XX.
             .......
             .......
             .......
             .......",
        );
        let scored = GreedyPolicy::evaluate(&b, Color::Black);
        let best = scored.iter().max_by_key(|&&(_, n)| n).unwrap();
        assert_eq!(best.1, 4);

        let mut policy = GreedyPolicy::with_seed(11);
        assert_eq!(
            policy.select(&b, Color::Black, &[]).unwrap(),
            Decision::Place(Coord::new(1, 6))
        );
    }

    #[test]
    fn test_greedy_ties_stay_among_maximizers() {
        let b = Board::new(3);
        let mut policy = GreedyPolicy::with_seed(5);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            if let Decision::Place(at) = policy.select(&b, Color::Black, &[]).unwrap() {
                seen.insert(at);
            }
        }
        // No capture is possible on an empty board, so every point ties.
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_custom_resigns() {
        let mut policy = CustomPolicy;
        assert_eq!(
            policy.select(&Board::new(3), Color::Black, &[]).unwrap(),
            Decision::Resign
        );
    }

    #[test]
    fn test_policy_kind_parse() {
        assert_eq!("Random".parse::<PolicyKind>().unwrap(), PolicyKind::Random);
        assert_eq!("my".parse::<PolicyKind>().unwrap(), PolicyKind::Custom);
        assert_eq!("GREEDY".parse::<PolicyKind>().unwrap(), PolicyKind::Greedy);
        assert!(matches!(
            "alphago".parse::<PolicyKind>(),
            Err(ConfigError::UnknownPolicy(s)) if s == "alphago"
        ));
    }

    #[test]
    fn test_two_manual_players_share_stdin() {
        // Both sides human: building the second player must not block on
        // the first one's hold of stdin.
        let mut rng = fastrand::Rng::with_seed(1);
        let black = PolicyKind::Manual.build(rng.fork());
        let white = PolicyKind::Manual.build(rng.fork());
        for policy in [&black, &white] {
            assert_eq!(policy.name(), "manual");
            assert!(policy.is_interactive());
        }
    }
}
