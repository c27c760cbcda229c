//! the traversal driver: walks one [crate::game::State] from wherever it
//! stands to termination, with action selection injected through a
//! [Selector]. the driver owns the legality boundary: a selector is
//! only ever offered the legal/outcome set for the node kind, and an
//! answer from outside that set is rejected before application. episodes
//! are bounded by the game's declared depth so a rules defect cannot
//! spin forever.

mod episode;
mod selector;
mod trace;

pub use episode::*;
pub use selector::*;
pub use trace::*;
