//! Nine-palace board assembly and scoring.
//!
//! Palaces sit in a 3x3 grid in row-major order with the center at
//! index 4. The hour branch selects the anchor palace; the governing
//! star and door seat there and the remaining symbols walk the outer
//! ring, clockwise for Yang escapes and counter-clockwise for Yin.

use serde::{Deserialize, Serialize};

use tianji_bazi::{Direction, PillarError, day_pillar, hour_pillar};
use tianji_calendar::SolarDate;

use crate::ju::{DunPolarity, Ju, determine_ju};
use crate::symbols::{
    ALL_DEITIES, ALL_DOORS, Auspice, QimenDeity, QimenDoor, QimenStar, ROTATING_STARS,
};

/// Compass direction of each grid cell, row-major with south at the top
/// (map convention): SE S SW / E C W / NE N NW.
const GRID_DIRECTIONS: [Direction; 9] = [
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::East,
    Direction::Center,
    Direction::West,
    Direction::NorthEast,
    Direction::North,
    Direction::NorthWest,
];

/// Grid index of the center palace.
pub const CENTER_PALACE: usize = 4;

/// The eight outer grid cells in clockwise walk order.
const RING: [usize; 8] = [0, 1, 2, 5, 8, 7, 6, 3];

/// Ring position of each outer grid cell (center unused).
const RING_POS: [usize; 9] = [0, 1, 2, 7, 0, 3, 6, 5, 4];

/// Anchor palace per hour branch: each branch seats in the grid cell of
/// its compass direction.
const BRANCH_PALACE: [usize; 12] = [7, 6, 6, 3, 0, 0, 1, 2, 2, 5, 8, 8];

/// Governing star per hour stem, as an index into [`ROTATING_STARS`].
const GOVERNING_STAR: [usize; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 0, 1];

/// Governing door per hour stem, as an index into
/// [`crate::symbols::ALL_DOORS`].
const GOVERNING_DOOR: [usize; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 0, 1];

/// One palace of a built board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QimenPalace {
    pub direction: Direction,
    pub star: QimenStar,
    /// `None` only for the center palace.
    pub door: Option<QimenDoor>,
    pub deity: QimenDeity,
    pub auspicious: bool,
    /// 0..=100.
    pub score: u8,
}

/// A fully placed and scored board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QimenBoard {
    pub ju: Ju,
    /// Row-major grid; index [`CENTER_PALACE`] is the center.
    pub palaces: [QimenPalace; 9],
}

fn auspice_points(a: Auspice, weight: i32) -> i32 {
    match a {
        Auspice::Auspicious => weight,
        Auspice::Neutral => 0,
        Auspice::Inauspicious => -weight,
    }
}

fn palace_score(
    star: QimenStar,
    door: Option<QimenDoor>,
    deity: QimenDeity,
    direction: Direction,
    facing: Direction,
) -> u8 {
    let mut score = 50i32;
    score += auspice_points(star.auspice(), 15);
    if let Some(door) = door {
        score += auspice_points(door.auspice(), 15);
    }
    score += auspice_points(deity.auspice(), 10);
    if direction == facing {
        score += 20;
    }
    score.clamp(0, 100) as u8
}

/// Build the board for a date, civil hour and the caller's facing
/// direction.
///
/// When the Ju lookup degrades (see [`determine_ju`]) the returned
/// board carries `ju.fallback = true`.
pub fn build_board(
    date: SolarDate,
    hour: i32,
    facing: Direction,
) -> Result<QimenBoard, PillarError> {
    let ju = determine_ju(date);
    let day = day_pillar(date)?;
    let hp = hour_pillar(day, hour)?;

    let anchor = BRANCH_PALACE[hp.branch.index() as usize];
    let anchor_pos = RING_POS[anchor];
    let star0 = GOVERNING_STAR[hp.stem.index() as usize];
    let door0 = GOVERNING_DOOR[hp.stem.index() as usize];

    // Walk the outer ring from the anchor, placing the cycles of
    // stars, doors and deities in fixed order.
    let mut stars = [QimenStar::Qin; 9];
    let mut doors = [None; 9];
    let mut deities = [QimenDeity::Chief; 9];
    for step in 0..8usize {
        let pos = match ju.polarity {
            DunPolarity::Yang => (anchor_pos + step) % 8,
            DunPolarity::Yin => (anchor_pos + 8 - step % 8) % 8,
        };
        let palace = RING[pos];
        stars[palace] = ROTATING_STARS[(star0 + step) % 8];
        doors[palace] = Some(ALL_DOORS[(door0 + step) % 8]);
        deities[palace] = ALL_DEITIES[step];
    }
    // The center palace keeps the fixed center star, no door, and the
    // presiding Chief.
    stars[CENTER_PALACE] = QimenStar::Qin;
    doors[CENTER_PALACE] = None;
    deities[CENTER_PALACE] = QimenDeity::Chief;

    let palaces = std::array::from_fn(|i| {
        let score = palace_score(stars[i], doors[i], deities[i], GRID_DIRECTIONS[i], facing);
        QimenPalace {
            direction: GRID_DIRECTIONS[i],
            star: stars[i],
            door: doors[i],
            deity: deities[i],
            auspicious: score >= 60,
            score,
        }
    });

    Ok(QimenBoard { ju, palaces })
}

impl QimenBoard {
    /// The palace in a given direction.
    pub fn palace(&self, direction: Direction) -> &QimenPalace {
        let i = GRID_DIRECTIONS
            .iter()
            .position(|&d| d == direction)
            .unwrap_or(CENTER_PALACE);
        &self.palaces[i]
    }

    /// The outer palace with the highest score (first in grid order on
    /// ties).
    pub fn best_palace(&self) -> &QimenPalace {
        let mut best = 0;
        for (i, p) in self.palaces.iter().enumerate() {
            if i != CENTER_PALACE && p.score > self.palaces[best].score {
                best = i;
            }
        }
        &self.palaces[best]
    }
}
