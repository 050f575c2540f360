//! Stem-branch pairs and the four-pillar record.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::stem_branch::{Branch, Stem};

/// One stem-branch pair labelling a year, month, day or two-hour slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Position in the sexagenary cycle (0 = JiaZi .. 59 = GuiHai), or
    /// `None` for the 60 stem-branch pairings of mismatched polarity that
    /// never occur in the cycle.
    pub fn sexagenary_index(self) -> Option<u8> {
        let s = i32::from(self.stem.index());
        let b = i32::from(self.branch.index());
        if s % 2 != b % 2 {
            return None;
        }
        Some((6 * s - 5 * b).rem_euclid(60) as u8)
    }

    /// Pillar for a sexagenary cycle position taken modulo 60.
    pub const fn from_sexagenary_index(index: u8) -> Self {
        let index = index % 60;
        Self {
            stem: Stem::from_index(index % 10),
            branch: Branch::from_index(index % 12),
        }
    }

    /// Combined pinyin name, e.g. "JiaZi".
    pub fn name(self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name())
    }

    /// Combined hanzi glyphs, e.g. "甲子".
    pub fn glyphs(self) -> String {
        format!("{}{}", self.stem.glyph(), self.branch.glyph())
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

/// The year, month, day and hour pillars of one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// The four pillars in year, month, day, hour order.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

impl Display for FourPillars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}
