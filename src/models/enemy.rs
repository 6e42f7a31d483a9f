use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::models::draft::EnemyDraft;

/// Die notation shown next to an enemy. Purely informational, nothing is rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageDie {
    #[serde(rename = "1d4")]
    D4,
    #[serde(rename = "1d6")]
    D6,
    #[serde(rename = "1d8")]
    D8,
    #[serde(rename = "1d10")]
    D10,
    #[serde(rename = "1d12")]
    D12,
}

impl DamageDie {
    /// Selector order
    pub const ALL: [DamageDie; 5] = [
        DamageDie::D4,
        DamageDie::D6,
        DamageDie::D8,
        DamageDie::D10,
        DamageDie::D12,
    ];

    pub fn notation(self) -> &'static str {
        match self {
            DamageDie::D4 => "1d4",
            DamageDie::D6 => "1d6",
            DamageDie::D8 => "1d8",
            DamageDie::D10 => "1d10",
            DamageDie::D12 => "1d12",
        }
    }
}

impl fmt::Display for DamageDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDamageDie(pub String);

impl fmt::Display for UnknownDamageDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown damage die '{}'", self.0)
    }
}

impl std::error::Error for UnknownDamageDie {}

impl FromStr for DamageDie {
    type Err = UnknownDamageDie;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DamageDie::ALL
            .into_iter()
            .find(|die| die.notation() == s)
            .ok_or_else(|| UnknownDamageDie(s.to_string()))
    }
}

/// One adversary in the encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    /// May drop to zero or below, the enemy stays in the roster either way
    pub current_health: i32,
    pub max_health: i32,
    pub armor_class: i32,
    pub damage_die: DamageDie,
    pub accuracy_bonus: i32,
}

impl Enemy {
    pub fn from_draft(draft: &EnemyDraft) -> Self {
        Self {
            name: draft.name.clone(),
            current_health: draft.max_health,
            max_health: draft.max_health,
            armor_class: draft.armor_class,
            damage_die: draft.damage_die,
            accuracy_bonus: draft.accuracy_bonus,
        }
    }

    /// Accuracy as shown in the row, always with a leading `+`.
    pub fn accuracy_label(&self) -> String {
        format!("+{}", self.accuracy_bonus)
    }

    pub fn get_display_name(&self, index: usize) -> String {
        format!("{}. {}", index + 1, self.name)
    }
}
