//! Canned palace readings keyed by (role, star) pairs.
//!
//! The tables are enum-keyed so a missing combination is a fall-through
//! to the role's base text, never a lookup failure.

use crate::chart::PalaceRole;
use crate::stars::{MainStar, Transformation};

/// Base reading per role, used when no keyed (role, star) line applies.
const fn role_note(role: PalaceRole) -> &'static str {
    match role {
        PalaceRole::Life => "the self: temperament and life arc",
        PalaceRole::Siblings => "bonds with siblings and close peers",
        PalaceRole::Spouse => "marriage and partnership",
        PalaceRole::Children => "children and creative offspring",
        PalaceRole::Wealth => "earning and holding wealth",
        PalaceRole::Health => "constitution and ailments",
        PalaceRole::Travel => "movement, relocation and the outside world",
        PalaceRole::Friends => "allies, staff and supporters",
        PalaceRole::Career => "vocation and standing",
        PalaceRole::Property => "home, land and legacy",
        PalaceRole::Fortune => "inner life and enjoyment",
        PalaceRole::Parents => "elders and patronage",
    }
}

/// Keyed lines for salient (role, main-star) pairs.
const STAR_NOTES: [((PalaceRole, MainStar), &str); 12] = [
    (
        (PalaceRole::Life, MainStar::Ziwei),
        "the emperor star steadies the self; authority comes naturally",
    ),
    (
        (PalaceRole::Life, MainStar::Tianji),
        "a quick, strategic mind; plans outrun circumstances",
    ),
    (
        (PalaceRole::Life, MainStar::Qisha),
        "a general's temperament; decisive, restless, unafraid",
    ),
    (
        (PalaceRole::Life, MainStar::Tanlang),
        "appetite and charm drive the life arc",
    ),
    (
        (PalaceRole::Wealth, MainStar::Wuqu),
        "the wealth star in its own domain; gains through discipline",
    ),
    (
        (PalaceRole::Wealth, MainStar::Tianfu),
        "the treasury star guards accumulation",
    ),
    (
        (PalaceRole::Career, MainStar::Taiyang),
        "public-facing work shines; visibility brings office",
    ),
    (
        (PalaceRole::Career, MainStar::Pojun),
        "careers of demolition and renewal; volatile but forceful",
    ),
    (
        (PalaceRole::Spouse, MainStar::Taiyin),
        "a gentle, nocturnal harmony in partnership",
    ),
    (
        (PalaceRole::Spouse, MainStar::Lianzhen),
        "passion and friction interleave in partnership",
    ),
    (
        (PalaceRole::Travel, MainStar::Jumen),
        "words carry far from home; advocacy opens roads",
    ),
    (
        (PalaceRole::Fortune, MainStar::Tiantong),
        "ease and contentment; blessings arrive unforced",
    ),
];

/// Compose the reading for one palace.
pub(crate) fn palace_note(
    role: PalaceRole,
    main_stars: &[MainStar],
    transformations: &[Transformation],
) -> String {
    let mut note = String::new();
    for &star in main_stars {
        if let Some((_, line)) = STAR_NOTES
            .iter()
            .find(|((r, s), _)| *r == role && *s == star)
        {
            note.push_str(line);
            note.push_str("; ");
        }
    }
    if note.is_empty() {
        note.push_str(role_note(role));
    }
    for &t in transformations {
        note.push_str(" [");
        note.push_str(t.glyph());
        note.push(']');
    }
    note
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_line_used_when_present() {
        let note = palace_note(PalaceRole::Life, &[MainStar::Ziwei], &[]);
        assert!(note.contains("emperor"));
    }

    #[test]
    fn falls_back_to_role_text() {
        let note = palace_note(PalaceRole::Health, &[MainStar::Ziwei], &[]);
        assert_eq!(note, role_note(PalaceRole::Health));
    }

    #[test]
    fn transformations_are_tagged() {
        let note = palace_note(PalaceRole::Wealth, &[], &[Transformation::Lu]);
        assert!(note.contains("[禄]"));
    }

    #[test]
    fn every_role_has_base_text() {
        for role in crate::chart::ALL_ROLES {
            assert!(!role_note(role).is_empty());
        }
    }
}
