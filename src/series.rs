//! Repeated matches between the same two players.

use std::fmt;

use crate::board::Color;
use crate::config::MatchConfig;
use crate::game::{Match, MatchError, MatchResult, Outcome};
use crate::policy::MovePolicy;

/// Win counts over a series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesReport {
    pub games: usize,
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
}

impl SeriesReport {
    pub fn record(&mut self, result: &MatchResult) {
        self.games += 1;
        match result.outcome {
            Outcome::Winner(Color::Black) => self.black_wins += 1,
            Outcome::Winner(Color::White) => self.white_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Share of games won by `color`, in percent.
    pub fn win_rate(&self, color: Color) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let wins = match color {
            Color::Black => self.black_wins,
            Color::White => self.white_wins,
        };
        100.0 * wins as f64 / self.games as f64
    }

    /// Share of games lost by `color`, in percent. Draws are neither.
    pub fn loss_rate(&self, color: Color) -> f64 {
        self.win_rate(color.opponent())
    }
}

impl fmt::Display for SeriesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in [Color::Black, Color::White] {
            writeln!(
                f,
                "{} player ({}) | Wins:{:.1}% Loses:{:.1}%",
                if color == Color::Black { "Black" } else { "White" },
                color.symbol(),
                self.win_rate(color),
                self.loss_rate(color)
            )?;
        }
        Ok(())
    }
}

/// Play `config.times` matches on fresh boards, calling `on_result` after
/// each one.
pub fn run_series<'a>(
    config: &MatchConfig,
    black: &'a mut dyn MovePolicy,
    white: &'a mut dyn MovePolicy,
    mut on_result: impl FnMut(usize, &MatchResult),
) -> Result<SeriesReport, MatchError> {
    let mut report = SeriesReport::default();
    for game in 0..config.times {
        let result = Match::from_config(config).run(black, white)?;
        on_result(game, &result);
        report.record(&result);
    }
    tracing::info!(
        games = report.games,
        black_wins = report.black_wins,
        white_wins = report.white_wins,
        draws = report.draws,
        "series finished"
    );
    Ok(report)
}
