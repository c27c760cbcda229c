//! concrete registered games. together they exercise every node kind
//! the engine distinguishes: [rps] for simultaneous play, [kuhn] for
//! chance and single-player decisions.

pub mod kuhn;
pub mod rps;
