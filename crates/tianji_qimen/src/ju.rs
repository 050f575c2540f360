//! Determination of the active configuration (Ju) from the solar terms.
//!
//! Each of the 24 terms carries a fixed Ju number and polarity: Yang
//! escapes run from the winter solstice to the summer solstice, Yin
//! escapes the other half of the year. When the governing term cannot be
//! located the builder falls back to Ju 1 Yang and says so; callers must
//! treat a flagged result as degraded, never as a normal board.

use serde::{Deserialize, Serialize};

use tianji_calendar::{SolarDate, all_solar_terms};

/// Escape polarity of a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DunPolarity {
    /// Yang escape: the ring walks clockwise.
    Yang,
    /// Yin escape: the ring walks counter-clockwise.
    Yin,
}

/// The active configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ju {
    /// Configuration number, 1..=9.
    pub number: u8,
    pub polarity: DunPolarity,
    /// Set when the governing term could not be located and the default
    /// Ju 1 Yang was substituted.
    pub fallback: bool,
}

/// Ju number and polarity per term, indexed from start-of-spring (0) to
/// major-cold (23). The Yang window opens at the winter solstice
/// (index 21) and closes at the summer solstice (index 9).
const TERM_JU: [(u8, DunPolarity); 24] = [
    (8, DunPolarity::Yang), // start of spring
    (9, DunPolarity::Yang), // rain water
    (1, DunPolarity::Yang), // awakening of insects
    (3, DunPolarity::Yang), // spring equinox
    (4, DunPolarity::Yang), // clear and bright
    (5, DunPolarity::Yang), // grain rain
    (4, DunPolarity::Yang), // start of summer
    (5, DunPolarity::Yang), // grain full
    (6, DunPolarity::Yang), // grain in ear
    (9, DunPolarity::Yin),  // summer solstice
    (8, DunPolarity::Yin),  // minor heat
    (7, DunPolarity::Yin),  // major heat
    (2, DunPolarity::Yin),  // start of autumn
    (1, DunPolarity::Yin),  // end of heat
    (9, DunPolarity::Yin),  // white dew
    (7, DunPolarity::Yin),  // autumn equinox
    (6, DunPolarity::Yin),  // cold dew
    (5, DunPolarity::Yin),  // frost descent
    (6, DunPolarity::Yin),  // start of winter
    (5, DunPolarity::Yin),  // minor snow
    (4, DunPolarity::Yin),  // major snow
    (1, DunPolarity::Yang), // winter solstice
    (2, DunPolarity::Yang), // minor cold
    (3, DunPolarity::Yang), // major cold
];

/// Ju for the term governing a date: the last of a cycle's 24 terms not
/// after it, looking back to the prior year's cycle for dates before
/// start-of-spring.
pub fn determine_ju(date: SolarDate) -> Ju {
    let jd = date.jdn();
    let cycle = {
        let this_year = all_solar_terms(date.year);
        if jd >= this_year[0].jdn() {
            this_year
        } else {
            all_solar_terms(date.year - 1)
        }
    };
    match cycle.iter().rposition(|t| t.jdn() <= jd) {
        Some(index) => {
            let (number, polarity) = TERM_JU[index];
            Ju {
                number,
                polarity,
                fallback: false,
            }
        }
        // Unreachable inside the supported range; documented default.
        None => Ju {
            number: 1,
            polarity: DunPolarity::Yang,
            fallback: true,
        },
    }
}
