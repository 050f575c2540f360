//! Twelve-palace chart assembly.
//!
//! Palace positions are Earthly Branch indices. The Life Palace starts
//! at Yin (the first month's branch), advances one per lunar month and
//! retreats one per two-hour slot; the Body Palace advances for both.
//! Roles then run counter-clockwise from the Life Palace, so role `i`
//! sits `i` positions behind it.

use serde::{Deserialize, Serialize};

use tianji_bazi::{Branch, PillarError, Stem, hour_branch};
use tianji_calendar::LunarDate;

use crate::analysis::palace_note;
use crate::stars::{
    MainStar, MinorStar, StarRef, TIANFU_FAMILY, Transformation, ZIWEI_FAMILY,
};
use crate::transformations::transformations_for;

/// The twelve life-aspect roles, in rotation order from the Life Palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PalaceRole {
    Life,
    Siblings,
    Spouse,
    Children,
    Wealth,
    Health,
    Travel,
    Friends,
    Career,
    Property,
    Fortune,
    Parents,
}

/// All twelve roles in rotation order.
pub const ALL_ROLES: [PalaceRole; 12] = [
    PalaceRole::Life,
    PalaceRole::Siblings,
    PalaceRole::Spouse,
    PalaceRole::Children,
    PalaceRole::Wealth,
    PalaceRole::Health,
    PalaceRole::Travel,
    PalaceRole::Friends,
    PalaceRole::Career,
    PalaceRole::Property,
    PalaceRole::Fortune,
    PalaceRole::Parents,
];

impl PalaceRole {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "Life Palace",
            Self::Siblings => "Siblings Palace",
            Self::Spouse => "Spouse Palace",
            Self::Children => "Children Palace",
            Self::Wealth => "Wealth Palace",
            Self::Health => "Health Palace",
            Self::Travel => "Travel Palace",
            Self::Friends => "Friends Palace",
            Self::Career => "Career Palace",
            Self::Property => "Property Palace",
            Self::Fortune => "Fortune Palace",
            Self::Parents => "Parents Palace",
        }
    }

    /// Hanzi glyphs.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Life => "命宫",
            Self::Siblings => "兄弟",
            Self::Spouse => "夫妻",
            Self::Children => "子女",
            Self::Wealth => "财帛",
            Self::Health => "疾厄",
            Self::Travel => "迁移",
            Self::Friends => "交友",
            Self::Career => "官禄",
            Self::Property => "田宅",
            Self::Fortune => "福德",
            Self::Parents => "父母",
        }
    }
}

/// One palace of a built chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiweiPalace {
    pub role: PalaceRole,
    /// Underlying branch position of this palace.
    pub branch: Branch,
    pub main_stars: Vec<MainStar>,
    pub minor_stars: Vec<MinorStar>,
    pub transformations: Vec<Transformation>,
    /// Canned reading for (role, stars) with transformation tags.
    pub note: String,
}

/// A full twelve-palace chart.
///
/// `palaces[0]` is always the Life Palace; roles then follow in fixed
/// rotation order regardless of which branch the Life Palace occupies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiweiChart {
    /// Branch position of the Life Palace.
    pub life_palace: Branch,
    /// Branch position of the Body Palace.
    pub body_palace: Branch,
    /// Index into `palaces` of the role the Body Palace shares.
    pub body_palace_index: u8,
    pub palaces: [ZiweiPalace; 12],
}

/// Base palace of the anchor star per lunar month (month 1 first).
const ZIWEI_BASE: [u8; 12] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 1];

/// Lucun's branch per year stem.
const LUCUN: [u8; 10] = [2, 3, 5, 6, 5, 6, 8, 9, 11, 0];

/// Tiankui's branch per year stem.
const TIANKUI: [u8; 10] = [1, 0, 11, 11, 1, 0, 1, 6, 3, 3];

/// Tianyue's branch per year stem.
const TIANYUE: [u8; 10] = [7, 8, 9, 9, 7, 8, 7, 2, 5, 5];

/// Tianma's branch per year-branch triad (index = branch % 4).
const TIANMA: [u8; 4] = [2, 11, 8, 5];

/// Huagai's branch per year-branch triad.
const HUAGAI: [u8; 4] = [4, 1, 10, 7];

/// Xianchi's branch per year-branch triad.
const XIANCHI: [u8; 4] = [9, 6, 3, 0];

/// Guchen's branch per year branch (seasonal group).
const GUCHEN: [u8; 12] = [2, 2, 5, 5, 5, 8, 8, 8, 11, 11, 11, 2];

/// Guasu's branch per year branch (seasonal group).
const GUASU: [u8; 12] = [10, 10, 1, 1, 1, 4, 4, 4, 7, 7, 7, 10];

fn pos(i: i32) -> usize {
    i.rem_euclid(12) as usize
}

/// Life Palace branch index for a lunar month and hour-branch index.
pub fn life_palace(month: u8, hour_slot: u8) -> u8 {
    pos(i32::from(month) + 1 - i32::from(hour_slot)) as u8
}

/// Body Palace branch index for a lunar month and hour-branch index.
pub fn body_palace(month: u8, hour_slot: u8) -> u8 {
    pos(i32::from(month) + 1 + i32::from(hour_slot)) as u8
}

/// Anchor-star (Ziwei) branch index: month table plus one palace per
/// five days.
pub fn anchor_star_palace(month: u8, day: u8) -> u8 {
    let base = ZIWEI_BASE[(month - 1) as usize];
    pos(i32::from(base) + i32::from((day - 1) / 5)) as u8
}

/// Build the chart for a lunar birth date and civil hour 0..=23.
///
/// A leap birth month counts as its base month. The year stem and
/// branch are the lunar year's (no start-of-spring adjustment).
pub fn build_chart(lunar: LunarDate, hour: i32) -> Result<ZiweiChart, PillarError> {
    let lunar = LunarDate::new(lunar.year, lunar.month, lunar.is_leap_month, lunar.day)
        .map_err(PillarError::Calendar)?;
    let hour_slot = hour_branch(hour)?.index();

    let year_stem = Stem::from_index((lunar.year - 4).rem_euclid(10) as u8);
    let year_branch = Branch::from_index((lunar.year - 4).rem_euclid(12) as u8);
    let s = year_stem.index() as usize;
    let b = year_branch.index() as usize;
    let month = lunar.month;

    let life = life_palace(month, hour_slot);
    let body = body_palace(month, hour_slot);

    // Main stars: the Ziwei family fans out from the anchor palace, the
    // Tianfu family from its opposite.
    let mut mains: [Vec<MainStar>; 12] = Default::default();
    let ziwei = anchor_star_palace(month, lunar.day);
    for (star, offset) in ZIWEI_FAMILY {
        mains[pos(i32::from(ziwei) + i32::from(offset))].push(star);
    }
    let tianfu = pos(i32::from(ziwei) + 6) as u8;
    for (star, offset) in TIANFU_FAMILY {
        mains[pos(i32::from(tianfu) + i32::from(offset))].push(star);
    }

    // Minor stars: each an independent fixed-offset rule.
    let mut minors: [Vec<MinorStar>; 12] = Default::default();
    let lucun = LUCUN[s];
    let mut place = |star: MinorStar, at: u8| minors[at as usize].push(star);
    place(MinorStar::Lucun, lucun);
    place(MinorStar::Qingyang, pos(i32::from(lucun) + 1) as u8);
    place(MinorStar::Tuoluo, pos(i32::from(lucun) - 1) as u8);
    place(MinorStar::Tiankui, TIANKUI[s]);
    place(MinorStar::Tianyue, TIANYUE[s]);
    place(MinorStar::Tianma, TIANMA[b % 4]);
    let hongluan = pos(3 - b as i32) as u8;
    place(MinorStar::Hongluan, hongluan);
    place(MinorStar::Tianxi, pos(i32::from(hongluan) + 6) as u8);
    place(MinorStar::Huagai, HUAGAI[b % 4]);
    place(MinorStar::Xianchi, XIANCHI[b % 4]);
    place(MinorStar::Guchen, GUCHEN[b]);
    place(MinorStar::Guasu, GUASU[b]);
    place(MinorStar::Zuofu, pos(4 + i32::from(month) - 1) as u8);
    place(MinorStar::Youbi, pos(10 - (i32::from(month) - 1)) as u8);
    place(MinorStar::Wenchang, pos(10 - i32::from(hour_slot)) as u8);
    place(MinorStar::Wenqu, pos(4 + i32::from(hour_slot)) as u8);
    place(MinorStar::Dikong, pos(11 - i32::from(hour_slot)) as u8);
    place(MinorStar::Dijie, pos(11 + i32::from(hour_slot)) as u8);

    // Transformations tag the palace holding their target star.
    let mut transforms: [Vec<Transformation>; 12] = Default::default();
    for (transformation, target) in transformations_for(year_stem) {
        let at = (0..12).find(|&p| match target {
            StarRef::Main(star) => mains[p].contains(&star),
            StarRef::Minor(star) => minors[p].contains(&star),
        });
        if let Some(p) = at {
            transforms[p].push(transformation);
        }
    }

    // Assemble in role order: role i sits i positions behind the Life
    // Palace.
    let palaces = std::array::from_fn(|i| {
        let p = pos(i32::from(life) - i as i32);
        let role = ALL_ROLES[i];
        let main_stars = mains[p].clone();
        let minor_stars = minors[p].clone();
        let transformations = transforms[p].clone();
        let note = palace_note(role, &main_stars, &transformations);
        ZiweiPalace {
            role,
            branch: Branch::from_index(p as u8),
            main_stars,
            minor_stars,
            transformations,
            note,
        }
    });

    Ok(ZiweiChart {
        life_palace: Branch::from_index(life),
        body_palace: Branch::from_index(body),
        body_palace_index: pos(i32::from(life) - i32::from(body)) as u8,
        palaces,
    })
}
