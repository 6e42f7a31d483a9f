use tracing::debug;
use crate::error::{Result, RosterError};
use crate::models::{Enemy, EnemyDraft};

/// Which of the two apply buttons was pressed for a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageDirection {
    /// Subtracts the staged value from current health
    Decrease,
    /// Adds the staged value to current health
    Increase,
}

impl DamageDirection {
    pub fn signed(self, amount: i32) -> i32 {
        match self {
            DamageDirection::Decrease => amount.saturating_neg(),
            DamageDirection::Increase => amount,
        }
    }
}

/// The whole encounter: enemies, their staged damage, and the add-enemy form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterState {
    /// Display order; positions are the only identity an enemy has
    enemies: Vec<Enemy>,
    /// Parallel to `enemies`, one staged amount per row
    pending_damage: Vec<i32>,
    pub draft: EnemyDraft,
    /// Roster length as of the last length-change reaction
    observed_len: usize,
}

impl Default for RosterState {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterState {
    pub fn new() -> Self {
        Self {
            enemies: Vec::new(),
            pending_damage: Vec::new(),
            draft: EnemyDraft::initial(),
            observed_len: 0,
        }
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemy(&self, index: usize) -> Option<&Enemy> {
        self.enemies.get(index)
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn pending_damage(&self) -> &[i32] {
        &self.pending_damage
    }

    pub fn staged(&self, index: usize) -> Option<i32> {
        self.pending_damage.get(index).copied()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.enemies.len() && index < self.pending_damage.len() {
            Ok(())
        } else {
            Err(RosterError::IndexOutOfRange { index, len: self.enemies.len() })
        }
    }

    /// Overwrites the staged amount for one row.
    pub fn stage_damage(&mut self, index: usize, value: i32) -> Result<()> {
        self.check_index(index)?;
        self.pending_damage[index] = value;
        debug!(index, value, "Staged damage");
        self.sync_pending_damage();
        Ok(())
    }

    /// Adds `signed_amount` to the enemy's current health, then clears its staged amount.
    /// Health is not clamped in either direction.
    pub fn apply_damage(&mut self, index: usize, signed_amount: i32) -> Result<()> {
        self.check_index(index)?;
        let enemy = &mut self.enemies[index];
        let before = enemy.current_health;
        enemy.current_health = before.saturating_add(signed_amount);
        debug!(index, name = %enemy.name, before, after = enemy.current_health, "Applied damage");
        self.pending_damage[index] = 0;
        self.sync_pending_damage();
        Ok(())
    }

    /// Applies the row's staged amount through one of the two apply buttons.
    pub fn apply_staged(&mut self, index: usize, direction: DamageDirection) -> Result<()> {
        self.check_index(index)?;
        let amount = direction.signed(self.pending_damage[index]);
        self.apply_damage(index, amount)
    }

    /// Submits the form and resets it to `EnemyDraft::default()`.
    /// Never fails: empty names and zero or negative stats are accepted.
    pub fn add_enemy(&mut self) {
        let enemy = Enemy::from_draft(&self.draft);
        debug!(name = %enemy.name, max_health = enemy.max_health, "Added enemy");
        self.enemies.push(enemy);
        self.pending_damage.push(0);
        self.draft = EnemyDraft::default();
        self.sync_pending_damage();
    }

    pub fn remove_enemy(&mut self, index: usize) -> Result<Enemy> {
        self.check_index(index)?;
        let removed = self.enemies.remove(index);
        self.pending_damage.remove(index);
        debug!(index, name = %removed.name, "Removed enemy");
        self.sync_pending_damage();
        Ok(removed)
    }

    /// Reaction to the roster changing length: every staged amount goes back to zero,
    /// not only the one belonging to the added or removed row.
    pub fn sync_pending_damage(&mut self) {
        let len = self.enemies.len();
        if len != self.observed_len || self.pending_damage.len() != len {
            self.pending_damage.clear();
            self.pending_damage.resize(len, 0);
            self.observed_len = len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DamageDie;

    fn draft(name: &str, max_health: i32) -> EnemyDraft {
        EnemyDraft {
            name: name.to_string(),
            armor_class: 12,
            max_health,
            accuracy_bonus: 3,
            damage_die: DamageDie::D8,
        }
    }

    fn roster_of(names: &[(&str, i32)]) -> RosterState {
        let mut state = RosterState::default();
        for (name, hp) in names {
            state.draft = draft(name, *hp);
            state.add_enemy();
        }
        state
    }

    #[test]
    fn new_roster_uses_initial_draft() {
        let state = RosterState::default();
        assert!(state.is_empty());
        assert!(state.pending_damage().is_empty());
        assert_eq!(state.draft, EnemyDraft::initial());
    }

    #[test]
    fn add_resets_draft_to_fixed_defaults() {
        let mut state = RosterState::default();
        state.draft = draft("Bandit", 11);
        state.add_enemy();
        assert_eq!(state.draft, EnemyDraft::default());
        assert_eq!(state.enemies()[0].name, "Bandit");
    }

    #[test]
    fn mismatched_parallel_lengths_are_rejected_not_panicking() {
        let mut state = RosterState::default();
        state.enemies.push(Enemy::from_draft(&EnemyDraft::default()));

        assert!(matches!(state.stage_damage(0, 3), Err(RosterError::IndexOutOfRange { index: 0, .. })));
        assert!(state.apply_staged(0, DamageDirection::Decrease).is_err());
        assert!(state.apply_damage(0, -1).is_err());
        assert!(state.remove_enemy(0).is_err());
        assert_eq!(state.enemies()[0].current_health, 10);

        // The next transition restores the parallel length
        state.sync_pending_damage();
        assert_eq!(state.pending_damage(), &[0]);
        state.stage_damage(0, 3).unwrap();
        state.apply_staged(0, DamageDirection::Decrease).unwrap();
        assert_eq!(state.enemies()[0].current_health, 7);
    }

    #[test]
    fn adding_clears_every_staged_amount() {
        let mut state = roster_of(&[("A", 10), ("B", 10)]);
        state.stage_damage(0, 4).unwrap();
        state.stage_damage(1, 6).unwrap();
        state.add_enemy();
        assert_eq!(state.pending_damage(), &[0, 0, 0]);
    }

    #[test]
    fn staging_does_not_touch_health_or_other_rows() {
        let mut state = roster_of(&[("A", 10), ("B", 10)]);
        state.stage_damage(1, 3).unwrap();
        assert_eq!(state.pending_damage(), &[0, 3]);
        assert_eq!(state.enemies[1].current_health, 10);
    }

    #[test]
    fn apply_only_resets_own_row() {
        let mut state = roster_of(&[("A", 10), ("B", 10)]);
        state.stage_damage(0, 4).unwrap();
        state.stage_damage(1, 6).unwrap();
        state.apply_staged(0, DamageDirection::Decrease).unwrap();
        assert_eq!(state.enemies[0].current_health, 6);
        assert_eq!(state.pending_damage(), &[0, 6]);
    }

    #[test]
    fn removal_shifts_later_enemies_down() {
        let mut state = roster_of(&[("A", 1), ("B", 2), ("C", 3)]);
        let removed = state.remove_enemy(1).unwrap();
        assert_eq!(removed.name, "B");
        let names: Vec<_> = state.enemies.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
        assert_eq!(state.pending_damage().len(), 2);
    }

    #[test]
    fn out_of_range_index_is_rejected_without_change() {
        let mut state = roster_of(&[("A", 10)]);
        state.stage_damage(0, 5).unwrap();
        let before = state.clone();

        assert!(matches!(
            state.stage_damage(1, 3),
            Err(RosterError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(state.apply_damage(3, -1).is_err());
        assert!(state.apply_staged(1, DamageDirection::Increase).is_err());
        assert!(state.remove_enemy(1).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn health_saturates_instead_of_overflowing() {
        let mut state = roster_of(&[("A", i32::MAX)]);
        state.apply_damage(0, 1).unwrap();
        assert_eq!(state.enemies[0].current_health, i32::MAX);

        state.stage_damage(0, i32::MIN).unwrap();
        state.apply_staged(0, DamageDirection::Decrease).unwrap();
        assert_eq!(state.enemies[0].current_health, i32::MAX);
    }

    #[test]
    fn negative_staged_amount_inverts_direction() {
        let mut state = roster_of(&[("A", 10)]);
        state.stage_damage(0, -3).unwrap();
        state.apply_staged(0, DamageDirection::Decrease).unwrap();
        assert_eq!(state.enemies[0].current_health, 13);
    }
}
