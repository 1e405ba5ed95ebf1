use thiserror::Error;

/// Section configuration problems, reported once at load time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("duplicate section name `{0}`")]
    DuplicateName(String),

    #[error("section `{name}` has min_y {min_y} above max_y {max_y}")]
    InvertedBounds { name: String, min_y: i32, max_y: i32 },

    #[error("section `{0}` has an inverted footprint")]
    InvertedFootprint(String),

    #[error("section `{0}` is the top of the stack and has nothing to link to")]
    LinkWithoutUpper(String),

    #[error("link of section `{0}` must set exactly one of `y_offset` or `overlap`")]
    AmbiguousLink(String),

    #[error("link of section `{name}` has invalid overlap {overlap}")]
    InvalidOverlap { name: String, overlap: i32 },

    #[error("sections `{upper}` and `{lower}` share no layers")]
    NoOverlap { upper: String, lower: String },

    #[error("section `{0}` mirrors the same layers to both of its neighbours")]
    OverlappingBands(String),

    #[error("too many sections ({0})")]
    TooManySections(usize),
}
