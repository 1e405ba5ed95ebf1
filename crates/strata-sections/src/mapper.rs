//! Location correspondence across section links.
//!
//! A location maps through at most one link. Sections linked both upward and downward pick
//! the link whose mirrored band contains the location, and otherwise the link on the nearer
//! half of the section. Mapping only shifts y; x and z are shared by both sections.

use std::ops::RangeInclusive;

use strata_geom::{Location, SectionId};

use crate::registry::SectionRegistry;
use crate::section::SectionLink;

#[derive(Clone, Copy)]
pub struct CoordinateMapper<'a> {
    sections: &'a SectionRegistry,
}

impl<'a> CoordinateMapper<'a> {
    pub fn new(sections: &'a SectionRegistry) -> Self {
        Self { sections }
    }

    fn link_for(&self, loc: Location) -> Option<&'a SectionLink> {
        let section = self.sections.get(loc.section)?;
        if !section.contains(loc.pos) {
            return None;
        }
        let y = loc.pos.y;
        let in_band = |link: &SectionLink| link.band_of(loc.section).is_some_and(|b| b.contains(y));
        match (
            self.sections.link_above(loc.section),
            self.sections.link_below(loc.section),
        ) {
            (Some(above), Some(below)) => {
                if in_band(above) {
                    Some(above)
                } else if in_band(below) || y < section.mid_y() {
                    Some(below)
                } else {
                    Some(above)
                }
            }
            (Some(only), None) | (None, Some(only)) => Some(only),
            (None, None) => None,
        }
    }

    /// Section `loc` is paired with, whether or not `loc` is inside the shared band.
    pub fn corresponding_section(&self, loc: Location) -> Option<SectionId> {
        self.link_for(loc)?.partner_of(loc.section)
    }

    pub fn correspond(&self, loc: Location) -> Option<Location> {
        let link = self.link_for(loc)?;
        let partner = link.partner_of(loc.section)?;
        let y = link.map_y(loc.section, loc.pos.y)?;
        Some(loc.moved_to(partner, y))
    }

    /// Both `loc` and its corresponding location lie inside their sections.
    pub fn in_overlap(&self, loc: Location) -> bool {
        self.overlap_partner(loc).is_some()
    }

    /// The corresponding location, only when `loc` is inside the overlap zone.
    pub fn overlap_partner(&self, loc: Location) -> Option<Location> {
        let corr = self.correspond(loc)?;
        let partner = self.sections.get(corr.section)?;
        partner.contains(corr.pos).then_some(corr)
    }

    /// Layers of `section` mirrored into `partner`; `None` unless the two are linked.
    pub fn overlap_band(&self, section: SectionId, partner: SectionId) -> Option<RangeInclusive<i32>> {
        let link = self
            .sections
            .links()
            .iter()
            .find(|l| l.partner_of(section) == Some(partner))?;
        let band = link.band_of(section)?;
        Some(band.min..=band.max)
    }
}
