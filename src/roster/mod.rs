pub mod state;
pub mod action;

pub use state::{DamageDirection, RosterState};
pub use action::{reduce, Rejected, RosterAction};
