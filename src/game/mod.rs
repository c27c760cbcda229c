//! the per-episode state machine for extensive-form games.
//!
//! a game is described once by a [Spec] and constructed through the
//! [registry] by name. each episode owns a [State], which classifies the
//! current node as one of four mutually exclusive [Turn] variants and
//! enforces the legality contract before any action is applied. the
//! [serial] module snapshots a state as its canonical action history and
//! rebuilds it by deterministic replay.

mod action;
mod error;
mod odds;
mod ply;
mod spec;
mod state;
mod tensor;
mod turn;

pub mod registry;
pub mod serial;

pub use action::*;
pub use error::*;
pub use odds::*;
pub use ply::*;
pub use spec::*;
pub use state::*;
pub use tensor::*;
pub use turn::*;
