//! Board-level reading assembled from the fixed symbol notes.

use serde::{Deserialize, Serialize};

use tianji_bazi::Direction;

use crate::board::{CENTER_PALACE, QimenBoard};

/// A rendered reading of one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardAnalysis {
    /// Direction of the strongest outer palace.
    pub favored_direction: Direction,
    /// Score of that palace.
    pub favored_score: u8,
    /// One line per outer palace, in grid order.
    pub palace_readings: Vec<String>,
    /// Overall summary line.
    pub summary: String,
}

/// Produce the reading for a built board.
pub fn analyze(board: &QimenBoard) -> BoardAnalysis {
    let best = board.best_palace();

    let palace_readings = board
        .palaces
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != CENTER_PALACE)
        .map(|(_, p)| {
            let door = p
                .door
                .map(|d| format!("{} door: {}", d.name(), d.note()))
                .unwrap_or_default();
            format!(
                "{}: {} ({}); {}",
                p.direction.name(),
                p.star.glyph(),
                p.star.note(),
                door,
            )
        })
        .collect();

    let polarity = match board.ju.polarity {
        crate::ju::DunPolarity::Yang => "Yang",
        crate::ju::DunPolarity::Yin => "Yin",
    };
    let mut summary = format!(
        "{polarity} escape, configuration {}; the {} palace is strongest at {}.",
        board.ju.number,
        best.direction.name(),
        best.score,
    );
    if board.ju.fallback {
        summary.push_str(" (Configuration defaulted; treat this board as degraded.)");
    }

    BoardAnalysis {
        favored_direction: best.direction,
        favored_score: best.score,
        palace_readings,
        summary,
    }
}
