//! Five-element aggregation over pillar sets.

use serde::{Deserialize, Serialize};

use crate::pillar::Pillar;
use crate::stem_branch::{ALL_ELEMENTS, Element};

/// Per-element counts over a pillar set.
///
/// Each pillar contributes its stem's element and its branch's element,
/// so the total is always twice the number of pillars. Counts are raw;
/// helpers that reduce them iterate elements in the fixed
/// [`ALL_ELEMENTS`] order, so ties resolve to the earlier element there.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
pub struct WuxingCount {
    counts: [u32; 5],
}

impl WuxingCount {
    /// Count for one element.
    pub const fn count(&self, element: Element) -> u32 {
        self.counts[element.index() as usize]
    }

    /// Sum over all elements.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// `(element, count)` pairs in fixed element order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        ALL_ELEMENTS.iter().map(|&e| (e, self.count(e)))
    }

    /// The most represented element (earliest in element order on ties).
    pub fn dominant(&self) -> Option<Element> {
        if self.total() == 0 {
            return None;
        }
        let mut best = Element::Wood;
        for (e, n) in self.iter() {
            if n > self.count(best) {
                best = e;
            }
        }
        Some(best)
    }

    /// Elements entirely absent from the set, in fixed element order.
    pub fn missing(&self) -> Vec<Element> {
        self.iter().filter(|&(_, n)| n == 0).map(|(e, _)| e).collect()
    }
}

/// Tally stem and branch elements across a pillar set.
pub fn wuxing_count(pillars: &[Pillar]) -> WuxingCount {
    let mut counts = [0u32; 5];
    for p in pillars {
        counts[p.stem.element().index() as usize] += 1;
        counts[p.branch.element().index() as usize] += 1;
    }
    WuxingCount { counts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pillar::Pillar;
    use crate::stem_branch::{Branch, Stem};

    #[test]
    fn empty_set() {
        let c = wuxing_count(&[]);
        assert_eq!(c.total(), 0);
        assert_eq!(c.dominant(), None);
        assert_eq!(c.missing().len(), 5);
    }

    #[test]
    fn total_is_twice_pillar_count() {
        for n in 1..=4 {
            let pillars: Vec<Pillar> =
                (0..n).map(|i| Pillar::from_sexagenary_index(i * 7)).collect();
            assert_eq!(wuxing_count(&pillars).total(), 2 * u32::from(n));
        }
    }

    #[test]
    fn jiazi_counts() {
        // Jia is Wood, Zi is Water.
        let c = wuxing_count(&[Pillar::new(Stem::Jia, Branch::Zi)]);
        assert_eq!(c.count(Element::Wood), 1);
        assert_eq!(c.count(Element::Water), 1);
        assert_eq!(c.count(Element::Fire), 0);
    }

    #[test]
    fn dominant_and_missing() {
        // BingWu doubles up on Fire.
        let c = wuxing_count(&[
            Pillar::new(Stem::Bing, Branch::Wu),
            Pillar::new(Stem::Jia, Branch::Zi),
        ]);
        assert_eq!(c.dominant(), Some(Element::Fire));
        assert_eq!(c.missing(), vec![Element::Earth, Element::Metal]);
    }

    #[test]
    fn dominant_tie_takes_element_order() {
        // One Wood, one Water: Wood wins by fixed order.
        let c = wuxing_count(&[Pillar::new(Stem::Jia, Branch::Zi)]);
        assert_eq!(c.dominant(), Some(Element::Wood));
    }
}
