use serde::{Deserialize, Serialize};
use crate::models::enemy::DamageDie;

/// Values held by the add-enemy form between submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyDraft {
    pub name: String,
    pub armor_class: i32,
    pub max_health: i32,
    pub accuracy_bonus: i32,
    pub damage_die: DamageDie,
}

/// Values the form is reset to after each submit.
impl Default for EnemyDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            armor_class: 10,
            max_health: 10,
            accuracy_bonus: 2,
            damage_die: DamageDie::D6,
        }
    }
}

impl EnemyDraft {
    /// Form contents before anything has been submitted.
    pub fn initial() -> Self {
        Self {
            name: String::new(),
            armor_class: 0,
            max_health: 0,
            accuracy_bonus: 0,
            damage_die: DamageDie::D4,
        }
    }
}
