pub mod enemy;
pub mod draft;
pub mod settings;

pub use enemy::{DamageDie, Enemy, UnknownDamageDie};
pub use draft::EnemyDraft;
pub use settings::AppSettings;
