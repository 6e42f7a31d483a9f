pub mod error;
pub mod models;
pub mod roster;
pub mod parsing;
pub mod gui;
pub mod utils;

pub use error::{Result, RosterError};
pub use models::{AppSettings, DamageDie, Enemy, EnemyDraft};
pub use roster::{reduce, DamageDirection, Rejected, RosterAction, RosterState};
pub use gui::RosterApp;
