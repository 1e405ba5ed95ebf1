//! Stacked world sections, the links between them and coordinate correspondence.
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod mapper;
pub mod registry;
pub mod section;

pub use error::SectionError;
pub use mapper::CoordinateMapper;
pub use registry::SectionRegistry;
pub use section::{Footprint, Section, SectionLink, YRange};
