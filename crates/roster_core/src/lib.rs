//! Roster core: pure state machine for the character catalog browser.
mod effect;
pub mod filter;
mod msg;
mod record;
mod roster;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::{FilterCriteria, StatusFilter};
pub use msg::Msg;
pub use record::{CatalogPage, CharacterRecord, CharacterStatus, LocationRef};
pub use roster::Roster;
pub use state::{AppState, MergeStats, SessionId};
pub use update::update;
pub use view_model::{CharacterRow, RosterViewModel};
