//! go-arena: a Go rules engine and a referee for automated matches.
//!
//! The engine keeps the board, decides which placements are legal, and
//! removes captured groups. A [`game::Match`] alternates two
//! [`policy::MovePolicy`] players until the game ends.
//!
//! ## Modules
//!
//! - [`constants`] - Defaults and board symbols
//! - [`board`] - Board, colors and coordinates
//! - [`connectivity`] - Neighbors, groups and liberties
//! - [`capture`] - Dead group detection and removal
//! - [`rules`] - Placement legality (bounds, occupancy, suicide)
//! - [`policy`] - Random, greedy and custom players
//! - [`manual`] - Human player reading `row,column` input
//! - [`game`] - Match controller
//! - [`series`] - Repeated matches and win percentages
//! - [`config`] - Match configuration
//!
//! ## Example
//!
//! ```
//! use go_arena::board::{Color, Coord};
//! use go_arena::game::Match;
//! use go_arena::policy::{GreedyPolicy, RandomPolicy};
//!
//! let mut game = Match::new(5, 75);
//! game.place(Coord::new(2, 2)).unwrap();
//! assert_eq!(game.to_move(), Some(Color::White));
//!
//! let mut black = RandomPolicy::with_seed(1);
//! let mut white = GreedyPolicy::with_seed(2);
//! let result = game.run(&mut black, &mut white).unwrap();
//! println!("{} after {} moves\n{}", result.outcome, result.moves, result.board);
//! ```

pub mod board;
pub mod capture;
pub mod config;
pub mod connectivity;
pub mod constants;
pub mod game;
pub mod manual;
pub mod policy;
pub mod rules;
pub mod series;
