//! Block positions, section-qualified locations and sub-block points.
#![forbid(unsafe_code)]

use core::fmt;
use core::ops::Add;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const UP: Vec3 = Vec3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Integer block coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn with_y(self, y: i32) -> Self {
        Self::new(self.x, y, self.z)
    }

    /// Minimum corner of the block in continuous space.
    #[inline]
    pub fn corner(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Dense index of a configured section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(pub u16);

impl SectionId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A block position qualified by the section it is addressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub section: SectionId,
    pub pos: BlockPos,
}

impl Location {
    #[inline]
    pub const fn new(section: SectionId, pos: BlockPos) -> Self {
        Self { section, pos }
    }

    #[inline]
    pub const fn at(section: SectionId, x: i32, y: i32, z: i32) -> Self {
        Self::new(section, BlockPos::new(x, y, z))
    }

    /// Same position moved into another section at height `y`.
    #[inline]
    pub const fn moved_to(self, section: SectionId, y: i32) -> Self {
        Self::new(section, self.pos.with_y(y))
    }

    /// Sub-block point at `offset` from the block's minimum corner.
    #[inline]
    pub fn point(self, offset: Vec3) -> Point {
        Point {
            section: self.section,
            pos: self.pos.corner() + offset,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.section, self.pos)
    }
}

/// Continuous position inside a section, used for entities such as dropped items.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub section: SectionId,
    pub pos: Vec3,
}
