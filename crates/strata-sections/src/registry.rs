use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use strata_geom::SectionId;

use crate::config::{LinkDef, SectionDef, SectionsConfig};
use crate::error::SectionError;
use crate::mapper::CoordinateMapper;
use crate::section::{Footprint, Section, SectionLink, YRange};

/// Immutable set of sections in stacking order (index 0 is the top of the stack) and the
/// links between consecutive sections.
#[derive(Clone, Debug, Default)]
pub struct SectionRegistry {
    sections: Vec<Section>,
    by_name: HashMap<String, SectionId>,
    links: Vec<SectionLink>,
}

impl SectionRegistry {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: SectionsConfig = toml::from_str(toml_str)?;
        Ok(Self::from_config(cfg)?)
    }

    pub fn from_config(cfg: SectionsConfig) -> Result<Self, SectionError> {
        if cfg.sections.len() > u16::MAX as usize {
            return Err(SectionError::TooManySections(cfg.sections.len()));
        }
        let mut reg = SectionRegistry::default();
        let mut pending: Vec<(SectionId, LinkDef)> = Vec::new();
        for (i, def) in cfg.sections.into_iter().enumerate() {
            let id = SectionId(i as u16);
            let SectionDef {
                name,
                min_y,
                max_y,
                footprint,
                link,
            } = def;
            if min_y > max_y {
                return Err(SectionError::InvertedBounds { name, min_y, max_y });
            }
            let footprint = match footprint {
                Some([min_x, min_z, max_x, max_z]) => {
                    if min_x > max_x || min_z > max_z {
                        return Err(SectionError::InvertedFootprint(name));
                    }
                    Some(Footprint {
                        min_x,
                        min_z,
                        max_x,
                        max_z,
                    })
                }
                None => None,
            };
            if reg.by_name.contains_key(&name) {
                return Err(SectionError::DuplicateName(name));
            }
            if let Some(link) = link {
                if i == 0 {
                    return Err(SectionError::LinkWithoutUpper(name));
                }
                pending.push((id, link));
            }
            reg.by_name.insert(name.clone(), id);
            reg.sections.push(Section {
                id,
                name,
                bounds: YRange::new(min_y, max_y),
                footprint,
            });
        }

        for (lower, def) in pending {
            let upper = SectionId(lower.0 - 1);
            let link = reg.build_link(upper, lower, &def)?;
            log::debug!(
                target: "sections",
                "linked {} {:?} <-> {} {:?} (y_offset {})",
                reg.sections[upper.index()].name,
                link.upper_band,
                reg.sections[lower.index()].name,
                link.lower_band,
                link.y_offset
            );
            reg.links.push(link);
        }

        for section in &reg.sections {
            let towards_above = reg.link_above(section.id).and_then(|l| l.band_of(section.id));
            let towards_below = reg.link_below(section.id).and_then(|l| l.band_of(section.id));
            if let (Some(a), Some(b)) = (towards_above, towards_below) {
                if a.intersect(b).is_some() {
                    return Err(SectionError::OverlappingBands(section.name.clone()));
                }
            }
        }
        Ok(reg)
    }

    fn build_link(
        &self,
        upper: SectionId,
        lower: SectionId,
        def: &LinkDef,
    ) -> Result<SectionLink, SectionError> {
        let up = &self.sections[upper.index()];
        let low = &self.sections[lower.index()];
        let y_offset = match (def.y_offset, def.overlap) {
            (Some(offset), None) => offset,
            (None, Some(overlap)) => {
                let height = |s: &Section| s.bounds.max as i64 - s.bounds.min as i64 + 1;
                let invalid = || SectionError::InvalidOverlap {
                    name: low.name.clone(),
                    overlap,
                };
                if overlap < 1 || overlap as i64 > height(up).min(height(low)) {
                    return Err(invalid());
                }
                // The lower section's top `overlap` layers line up with the upper's bottom ones.
                let offset = up.bounds.min as i64 - (low.bounds.max as i64 - overlap as i64 + 1);
                i32::try_from(offset).map_err(|_| invalid())?
            }
            _ => return Err(SectionError::AmbiguousLink(low.name.clone())),
        };
        let no_overlap = || SectionError::NoOverlap {
            upper: up.name.clone(),
            lower: low.name.clone(),
        };
        if let (Some(a), Some(b)) = (&up.footprint, &low.footprint) {
            a.intersect(b).ok_or_else(no_overlap)?;
        }
        let upper_band = low
            .bounds
            .shifted(y_offset)
            .and_then(|mapped| mapped.intersect(up.bounds))
            .ok_or_else(no_overlap)?;
        let lower_band = upper_band
            .unshifted(y_offset)
            .ok_or_else(no_overlap)?;
        Ok(SectionLink {
            upper,
            lower,
            y_offset,
            upper_band,
            lower_band,
        })
    }

    #[inline]
    pub fn get(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(id.index())
    }

    pub fn id_by_name(&self, name: &str) -> Option<SectionId> {
        self.by_name.get(name).copied()
    }

    pub fn name_of(&self, id: SectionId) -> &str {
        self.get(id).map(|s| s.name.as_str()).unwrap_or("?")
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn links(&self) -> &[SectionLink] {
        &self.links
    }

    /// Strict stacking order as configured: `a` is declared before `b`.
    pub fn is_above(&self, a: SectionId, b: SectionId) -> bool {
        a.index() < b.index() && b.index() < self.sections.len()
    }

    /// Link to the section directly above `id`, if configured.
    pub fn link_above(&self, id: SectionId) -> Option<&SectionLink> {
        self.links.iter().find(|l| l.lower == id)
    }

    /// Link to the section directly below `id`, if configured.
    pub fn link_below(&self, id: SectionId) -> Option<&SectionLink> {
        self.links.iter().find(|l| l.upper == id)
    }

    #[inline]
    pub fn mapper(&self) -> CoordinateMapper<'_> {
        CoordinateMapper::new(self)
    }
}
