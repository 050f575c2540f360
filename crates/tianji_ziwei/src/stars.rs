//! The star catalogue: fourteen main stars in two families and eighteen
//! minor stars.

use serde::{Deserialize, Serialize};

/// The fourteen main stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MainStar {
    Ziwei,
    Tianji,
    Taiyang,
    Wuqu,
    Tiantong,
    Lianzhen,
    Tianfu,
    Taiyin,
    Tanlang,
    Jumen,
    Tianxiang,
    Tianliang,
    Qisha,
    Pojun,
}

/// All fourteen main stars.
pub const ALL_MAIN_STARS: [MainStar; 14] = [
    MainStar::Ziwei,
    MainStar::Tianji,
    MainStar::Taiyang,
    MainStar::Wuqu,
    MainStar::Tiantong,
    MainStar::Lianzhen,
    MainStar::Tianfu,
    MainStar::Taiyin,
    MainStar::Tanlang,
    MainStar::Jumen,
    MainStar::Tianxiang,
    MainStar::Tianliang,
    MainStar::Qisha,
    MainStar::Pojun,
];

impl MainStar {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ziwei => "Ziwei",
            Self::Tianji => "Tianji",
            Self::Taiyang => "Taiyang",
            Self::Wuqu => "Wuqu",
            Self::Tiantong => "Tiantong",
            Self::Lianzhen => "Lianzhen",
            Self::Tianfu => "Tianfu",
            Self::Taiyin => "Taiyin",
            Self::Tanlang => "Tanlang",
            Self::Jumen => "Jumen",
            Self::Tianxiang => "Tianxiang",
            Self::Tianliang => "Tianliang",
            Self::Qisha => "Qisha",
            Self::Pojun => "Pojun",
        }
    }

    /// Hanzi glyphs.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Ziwei => "紫微",
            Self::Tianji => "天机",
            Self::Taiyang => "太阳",
            Self::Wuqu => "武曲",
            Self::Tiantong => "天同",
            Self::Lianzhen => "廉贞",
            Self::Tianfu => "天府",
            Self::Taiyin => "太阴",
            Self::Tanlang => "贪狼",
            Self::Jumen => "巨门",
            Self::Tianxiang => "天相",
            Self::Tianliang => "天梁",
            Self::Qisha => "七杀",
            Self::Pojun => "破军",
        }
    }
}

/// The Ziwei family: palace offsets from the anchor star's palace.
pub const ZIWEI_FAMILY: [(MainStar, u8); 6] = [
    (MainStar::Ziwei, 0),
    (MainStar::Tianji, 11),
    (MainStar::Taiyang, 9),
    (MainStar::Wuqu, 8),
    (MainStar::Tiantong, 7),
    (MainStar::Lianzhen, 4),
];

/// The Tianfu family: palace offsets from Tianfu's palace, which sits
/// six palaces from the anchor.
pub const TIANFU_FAMILY: [(MainStar, u8); 8] = [
    (MainStar::Tianfu, 0),
    (MainStar::Taiyin, 1),
    (MainStar::Tanlang, 2),
    (MainStar::Jumen, 3),
    (MainStar::Tianxiang, 4),
    (MainStar::Tianliang, 5),
    (MainStar::Qisha, 6),
    (MainStar::Pojun, 10),
];

/// The eighteen minor stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MinorStar {
    Lucun,
    Qingyang,
    Tuoluo,
    Tiankui,
    Tianyue,
    Tianma,
    Hongluan,
    Tianxi,
    Huagai,
    Xianchi,
    Guchen,
    Guasu,
    Zuofu,
    Youbi,
    Wenchang,
    Wenqu,
    Dikong,
    Dijie,
}

/// All eighteen minor stars.
pub const ALL_MINOR_STARS: [MinorStar; 18] = [
    MinorStar::Lucun,
    MinorStar::Qingyang,
    MinorStar::Tuoluo,
    MinorStar::Tiankui,
    MinorStar::Tianyue,
    MinorStar::Tianma,
    MinorStar::Hongluan,
    MinorStar::Tianxi,
    MinorStar::Huagai,
    MinorStar::Xianchi,
    MinorStar::Guchen,
    MinorStar::Guasu,
    MinorStar::Zuofu,
    MinorStar::Youbi,
    MinorStar::Wenchang,
    MinorStar::Wenqu,
    MinorStar::Dikong,
    MinorStar::Dijie,
];

impl MinorStar {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lucun => "Lucun",
            Self::Qingyang => "Qingyang",
            Self::Tuoluo => "Tuoluo",
            Self::Tiankui => "Tiankui",
            Self::Tianyue => "Tianyue",
            Self::Tianma => "Tianma",
            Self::Hongluan => "Hongluan",
            Self::Tianxi => "Tianxi",
            Self::Huagai => "Huagai",
            Self::Xianchi => "Xianchi",
            Self::Guchen => "Guchen",
            Self::Guasu => "Guasu",
            Self::Zuofu => "Zuofu",
            Self::Youbi => "Youbi",
            Self::Wenchang => "Wenchang",
            Self::Wenqu => "Wenqu",
            Self::Dikong => "Dikong",
            Self::Dijie => "Dijie",
        }
    }

    /// Hanzi glyphs.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Lucun => "禄存",
            Self::Qingyang => "擎羊",
            Self::Tuoluo => "陀罗",
            Self::Tiankui => "天魁",
            Self::Tianyue => "天钺",
            Self::Tianma => "天马",
            Self::Hongluan => "红鸾",
            Self::Tianxi => "天喜",
            Self::Huagai => "华盖",
            Self::Xianchi => "咸池",
            Self::Guchen => "孤辰",
            Self::Guasu => "寡宿",
            Self::Zuofu => "左辅",
            Self::Youbi => "右弼",
            Self::Wenchang => "文昌",
            Self::Wenqu => "文曲",
            Self::Dikong => "地空",
            Self::Dijie => "地劫",
        }
    }
}

/// Either kind of placed star; transformation targets may be of either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarRef {
    Main(MainStar),
    Minor(MinorStar),
}

impl StarRef {
    /// Pinyin name of the referenced star.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Main(s) => s.name(),
            Self::Minor(s) => s.name(),
        }
    }
}

/// The four transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transformation {
    /// Lu: prosperity.
    Lu,
    /// Quan: authority.
    Quan,
    /// Ke: merit.
    Ke,
    /// Ji: obstruction.
    Ji,
}

/// All four transformations in table order.
pub const ALL_TRANSFORMATIONS: [Transformation; 4] = [
    Transformation::Lu,
    Transformation::Quan,
    Transformation::Ke,
    Transformation::Ji,
];

impl Transformation {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lu => "Prosperity",
            Self::Quan => "Authority",
            Self::Ke => "Merit",
            Self::Ji => "Obstruction",
        }
    }

    /// Hanzi glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Lu => "禄",
            Self::Quan => "权",
            Self::Ke => "科",
            Self::Ji => "忌",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_cover_all_main_stars() {
        let mut seen: Vec<MainStar> = ZIWEI_FAMILY.iter().map(|&(s, _)| s).collect();
        seen.extend(TIANFU_FAMILY.iter().map(|&(s, _)| s));
        assert_eq!(seen.len(), 14);
        for star in ALL_MAIN_STARS {
            assert!(seen.contains(&star), "{}", star.name());
        }
    }

    #[test]
    fn family_offsets_distinct() {
        let mut offsets: Vec<u8> = ZIWEI_FAMILY.iter().map(|&(_, o)| o).collect();
        offsets.sort_unstable();
        offsets.dedup();
        assert_eq!(offsets.len(), 6);

        let mut offsets: Vec<u8> = TIANFU_FAMILY.iter().map(|&(_, o)| o).collect();
        offsets.sort_unstable();
        offsets.dedup();
        assert_eq!(offsets.len(), 8);
    }

    #[test]
    fn minor_star_count() {
        assert_eq!(ALL_MINOR_STARS.len(), 18);
    }

    #[test]
    fn names_nonempty() {
        for s in ALL_MAIN_STARS {
            assert!(!s.name().is_empty());
            assert!(!s.glyph().is_empty());
        }
        for s in ALL_MINOR_STARS {
            assert!(!s.name().is_empty());
            assert!(!s.glyph().is_empty());
        }
    }
}
