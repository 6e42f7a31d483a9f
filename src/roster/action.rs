use thiserror::Error;
use crate::error::{Result, RosterError};
use crate::roster::state::{DamageDirection, RosterState};

/// A single user interaction with the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterAction {
    StageDamage { index: usize, value: i32 },
    ApplyDamage { index: usize, amount: i32 },
    ApplyStaged { index: usize, direction: DamageDirection },
    AddEnemy,
    RemoveEnemy { index: usize },
}

impl RosterState {
    pub fn dispatch(&mut self, action: RosterAction) -> Result<()> {
        match action {
            RosterAction::StageDamage { index, value } => self.stage_damage(index, value),
            RosterAction::ApplyDamage { index, amount } => self.apply_damage(index, amount),
            RosterAction::ApplyStaged { index, direction } => self.apply_staged(index, direction),
            RosterAction::AddEnemy => {
                self.add_enemy();
                Ok(())
            }
            RosterAction::RemoveEnemy { index } => self.remove_enemy(index).map(|_| ()),
        }
    }
}

/// An action that could not be applied, with the state it was applied to, unchanged.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct Rejected {
    pub state: RosterState,
    #[source]
    pub error: RosterError,
}

/// (state, action) -> new state. A failed action hands the input state back untouched.
pub fn reduce(mut state: RosterState, action: RosterAction) -> std::result::Result<RosterState, Rejected> {
    match state.dispatch(action) {
        Ok(()) => Ok(state),
        Err(error) => Err(Rejected { state, error }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_threads_state_through_actions() {
        let mut state = RosterState::default();
        state.draft.name = "Wolf".to_string();
        state.draft.max_health = 11;

        let state = reduce(state, RosterAction::AddEnemy).unwrap();
        let state = reduce(state, RosterAction::StageDamage { index: 0, value: 4 }).unwrap();
        let state = reduce(
            state,
            RosterAction::ApplyStaged { index: 0, direction: DamageDirection::Decrease },
        )
        .unwrap();

        assert_eq!(state.enemies()[0].current_health, 7);
        assert_eq!(state.staged(0), Some(0));

        let state = reduce(state, RosterAction::RemoveEnemy { index: 0 }).unwrap();
        assert!(state.is_empty());
        assert!(state.pending_damage().is_empty());
    }

    #[test]
    fn rejected_action_returns_roster_intact() {
        let mut state = RosterState::default();
        state.draft.name = "Wolf".to_string();
        state.draft.max_health = 11;
        let state = reduce(state, RosterAction::AddEnemy).unwrap();
        let state = reduce(state, RosterAction::StageDamage { index: 0, value: 6 }).unwrap();
        let before = state.clone();

        let rejected = reduce(state, RosterAction::RemoveEnemy { index: 3 }).unwrap_err();

        assert!(matches!(rejected.error, RosterError::IndexOutOfRange { index: 3, len: 1 }));
        assert_eq!(rejected.state, before);
        assert_eq!(rejected.state.staged(0), Some(6));
    }
}
