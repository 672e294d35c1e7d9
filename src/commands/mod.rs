//! Command implementations

mod checklist;
mod inspect;

pub use checklist::checklist;
pub use inspect::inspect;
