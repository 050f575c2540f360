//! The nine stars, eight doors and eight deities, with their fixed
//! auspiciousness and interpretive notes.

use serde::{Deserialize, Serialize};

/// Fixed auspiciousness class of a board symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Auspice {
    Auspicious,
    Neutral,
    Inauspicious,
}

/// The nine stars. [`QimenStar::Qin`] is pinned to the center palace;
/// the other eight rotate around the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QimenStar {
    Peng,
    Ren,
    Chong,
    Fu,
    Ying,
    Rui,
    Zhu,
    Xin,
    Qin,
}

/// The eight rotating stars in ring order.
pub const ROTATING_STARS: [QimenStar; 8] = [
    QimenStar::Peng,
    QimenStar::Ren,
    QimenStar::Chong,
    QimenStar::Fu,
    QimenStar::Ying,
    QimenStar::Rui,
    QimenStar::Zhu,
    QimenStar::Xin,
];

impl QimenStar {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Peng => "Tianpeng",
            Self::Ren => "Tianren",
            Self::Chong => "Tianchong",
            Self::Fu => "Tianfu",
            Self::Ying => "Tianying",
            Self::Rui => "Tianrui",
            Self::Zhu => "Tianzhu",
            Self::Xin => "Tianxin",
            Self::Qin => "Tianqin",
        }
    }

    /// Hanzi glyphs.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Peng => "天蓬",
            Self::Ren => "天任",
            Self::Chong => "天冲",
            Self::Fu => "天辅",
            Self::Ying => "天英",
            Self::Rui => "天芮",
            Self::Zhu => "天柱",
            Self::Xin => "天心",
            Self::Qin => "天禽",
        }
    }

    /// Fixed auspiciousness of the star.
    pub const fn auspice(self) -> Auspice {
        match self {
            Self::Fu | Self::Xin | Self::Ren => Auspice::Auspicious,
            Self::Chong | Self::Ying | Self::Qin => Auspice::Neutral,
            Self::Peng | Self::Rui | Self::Zhu => Auspice::Inauspicious,
        }
    }

    /// One-line interpretive note.
    pub const fn note(self) -> &'static str {
        match self {
            Self::Peng => "bold ventures carry hidden risk",
            Self::Ren => "steady effort accumulates reward",
            Self::Chong => "sudden movement, act decisively",
            Self::Fu => "learning and counsel are favored",
            Self::Ying => "brilliance flares but does not last",
            Self::Rui => "ailments and friction surface",
            Self::Zhu => "words invite dispute, hold ground",
            Self::Xin => "healing and precision succeed",
            Self::Qin => "the center holds all in balance",
        }
    }
}

/// The eight doors in ring order. The center palace has no door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QimenDoor {
    Rest,
    Life,
    Harm,
    Block,
    Scenery,
    Death,
    Fright,
    Open,
}

/// The eight doors in ring order.
pub const ALL_DOORS: [QimenDoor; 8] = [
    QimenDoor::Rest,
    QimenDoor::Life,
    QimenDoor::Harm,
    QimenDoor::Block,
    QimenDoor::Scenery,
    QimenDoor::Death,
    QimenDoor::Fright,
    QimenDoor::Open,
];

impl QimenDoor {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rest => "Rest",
            Self::Life => "Life",
            Self::Harm => "Harm",
            Self::Block => "Block",
            Self::Scenery => "Scenery",
            Self::Death => "Death",
            Self::Fright => "Fright",
            Self::Open => "Open",
        }
    }

    /// Hanzi glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Rest => "休",
            Self::Life => "生",
            Self::Harm => "伤",
            Self::Block => "杜",
            Self::Scenery => "景",
            Self::Death => "死",
            Self::Fright => "惊",
            Self::Open => "开",
        }
    }

    /// Fixed auspiciousness of the door.
    pub const fn auspice(self) -> Auspice {
        match self {
            Self::Open | Self::Rest | Self::Life => Auspice::Auspicious,
            Self::Block | Self::Scenery => Auspice::Neutral,
            Self::Harm | Self::Death | Self::Fright => Auspice::Inauspicious,
        }
    }

    /// One-line interpretive note.
    pub const fn note(self) -> &'static str {
        match self {
            Self::Rest => "rest and negotiation go smoothly",
            Self::Life => "growth and gain flow here",
            Self::Harm => "contention wounds, avoid conflict",
            Self::Block => "obstruction, good only for hiding",
            Self::Scenery => "documents and visibility, mixed luck",
            Self::Death => "stagnation, unfit for new starts",
            Self::Fright => "alarms and lawsuits, stay cautious",
            Self::Open => "openings and audiences are granted",
        }
    }
}

/// The eight deities in walk order from the Chief.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QimenDeity {
    Chief,
    Snake,
    Moon,
    Harmony,
    Tiger,
    DarkWarrior,
    NineEarth,
    NineHeaven,
}

/// The eight deities in walk order.
pub const ALL_DEITIES: [QimenDeity; 8] = [
    QimenDeity::Chief,
    QimenDeity::Snake,
    QimenDeity::Moon,
    QimenDeity::Harmony,
    QimenDeity::Tiger,
    QimenDeity::DarkWarrior,
    QimenDeity::NineEarth,
    QimenDeity::NineHeaven,
];

impl QimenDeity {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chief => "Chief",
            Self::Snake => "Soaring Snake",
            Self::Moon => "Great Moon",
            Self::Harmony => "Six Harmony",
            Self::Tiger => "White Tiger",
            Self::DarkWarrior => "Dark Warrior",
            Self::NineEarth => "Nine Earth",
            Self::NineHeaven => "Nine Heaven",
        }
    }

    /// Hanzi glyphs.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Chief => "值符",
            Self::Snake => "腾蛇",
            Self::Moon => "太阴",
            Self::Harmony => "六合",
            Self::Tiger => "白虎",
            Self::DarkWarrior => "玄武",
            Self::NineEarth => "九地",
            Self::NineHeaven => "九天",
        }
    }

    /// Fixed auspiciousness of the deity.
    pub const fn auspice(self) -> Auspice {
        match self {
            Self::Chief | Self::Moon | Self::Harmony | Self::NineEarth | Self::NineHeaven => {
                Auspice::Auspicious
            }
            Self::Snake | Self::Tiger | Self::DarkWarrior => Auspice::Inauspicious,
        }
    }
}
