use strata_geom::{BlockPos, SectionId};

/// Inclusive span of block layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YRange {
    pub min: i32,
    pub max: i32,
}

impl YRange {
    #[inline]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(self, y: i32) -> bool {
        y >= self.min && y <= self.max
    }

    pub fn intersect(self, other: YRange) -> Option<YRange> {
        let r = YRange::new(self.min.max(other.min), self.max.min(other.max));
        (r.min <= r.max).then_some(r)
    }

    pub fn shifted(self, dy: i32) -> Option<YRange> {
        Some(YRange::new(self.min.checked_add(dy)?, self.max.checked_add(dy)?))
    }

    pub fn unshifted(self, dy: i32) -> Option<YRange> {
        Some(YRange::new(self.min.checked_sub(dy)?, self.max.checked_sub(dy)?))
    }
}

/// Horizontal extent of a section, inclusive on both corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footprint {
    pub min_x: i32,
    pub min_z: i32,
    pub max_x: i32,
    pub max_z: i32,
}

impl Footprint {
    #[inline]
    pub fn contains(&self, x: i32, z: i32) -> bool {
        x >= self.min_x && x <= self.max_x && z >= self.min_z && z <= self.max_z
    }

    pub fn intersect(&self, other: &Footprint) -> Option<Footprint> {
        let f = Footprint {
            min_x: self.min_x.max(other.min_x),
            min_z: self.min_z.max(other.min_z),
            max_x: self.max_x.min(other.max_x),
            max_z: self.max_z.min(other.max_z),
        };
        (f.min_x <= f.max_x && f.min_z <= f.max_z).then_some(f)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub name: String,
    pub bounds: YRange,
    pub footprint: Option<Footprint>,
}

impl Section {
    pub fn contains(&self, pos: BlockPos) -> bool {
        self.bounds.contains(pos.y)
            && self
                .footprint
                .as_ref()
                .is_none_or(|f| f.contains(pos.x, pos.z))
    }

    /// Layers at or above this height belong to the upper half.
    #[inline]
    pub fn mid_y(&self) -> i32 {
        (self.bounds.min as i64 + self.bounds.max as i64).div_euclid(2) as i32
    }
}

/// Vertical correspondence between two consecutive sections: `upper_y = lower_y + y_offset`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionLink {
    pub upper: SectionId,
    pub lower: SectionId,
    pub y_offset: i32,
    /// Mirrored layers of the upper section.
    pub upper_band: YRange,
    /// Mirrored layers of the lower section.
    pub lower_band: YRange,
}

impl SectionLink {
    pub fn partner_of(&self, id: SectionId) -> Option<SectionId> {
        if id == self.upper {
            Some(self.lower)
        } else if id == self.lower {
            Some(self.upper)
        } else {
            None
        }
    }

    pub fn band_of(&self, id: SectionId) -> Option<YRange> {
        if id == self.upper {
            Some(self.upper_band)
        } else if id == self.lower {
            Some(self.lower_band)
        } else {
            None
        }
    }

    /// Maps a layer of `from` into the partner section.
    pub fn map_y(&self, from: SectionId, y: i32) -> Option<i32> {
        if from == self.lower {
            y.checked_add(self.y_offset)
        } else if from == self.upper {
            y.checked_sub(self.y_offset)
        } else {
            None
        }
    }
}
