//! Reconciliation rules, one per mutation category.
//!
//! Every rule resolves the mirrored location through the overlap gate first and does
//! nothing when there is none. Piston blocking is the exception: it only needs the
//! location to be linked at all.

mod container;
mod liquid;
mod piston;
mod pickup;
mod placement;
mod removal;
mod sign;

pub use container::EJECT_MESSAGE;
