//! Keeps the mirrored overlap of linked sections consistent, one host event at a time.
#![forbid(unsafe_code)]

mod adapter;
pub mod engine;
pub mod event;
pub mod outcome;
pub mod rules;

pub use engine::SectionSync;
pub use event::{ClickAction, Delivery, SyncEvent};
pub use outcome::{RuleOutcome, Verdict};
