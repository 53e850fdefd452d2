//! Roster app: session wiring between the pure core and the IO engine.
//!
//! A presentation layer drives [`RosterSession`] through its methods and
//! renders from [`roster_core::RosterViewModel`] snapshots; no UI code
//! lives in this workspace.
mod effects;
mod session;

pub use effects::EffectRunner;
pub use session::RosterSession;
