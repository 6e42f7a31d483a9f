use eframe::egui;
use tracing::warn;
use crate::models::AppSettings;
use crate::roster::{RosterAction, RosterState};
use crate::utils::{auto_save_app_settings, load_app_settings};

pub struct RosterApp {
    /// Enemies, staged damage and the add-enemy form
    pub state: RosterState,
    /// Persisted configuration
    pub settings: AppSettings,
    /// Whether to show the options window
    pub show_options: bool,
    /// Zoom factor last pushed to the context
    pub applied_text_scale: Option<f32>,
}

impl RosterApp {
    pub fn new() -> Self {
        Self::with_settings(load_app_settings())
    }

    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            state: RosterState::new(),
            settings,
            show_options: false,
            applied_text_scale: None,
        }
    }

    /// Applies interactions collected while drawing a frame, in the order they happened.
    pub fn apply_actions(&mut self, actions: Vec<RosterAction>) {
        for action in actions {
            if let Err(e) = self.state.dispatch(action.clone()) {
                warn!(?action, "Ignoring roster action: {}", e);
            }
        }
    }

    pub fn settings_changed(&mut self) {
        auto_save_app_settings(&self.settings);
    }

    pub fn sync_text_scale(&mut self, ctx: &egui::Context) {
        if self.applied_text_scale != Some(self.settings.text_scale) {
            ctx.set_zoom_factor(self.settings.text_scale);
            self.applied_text_scale = Some(self.settings.text_scale);
        }
    }
}

impl Default for RosterApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::DamageDirection;

    #[test]
    fn frame_actions_apply_in_order() {
        let mut app = RosterApp::with_settings(AppSettings::default());
        app.state.draft.max_health = 9;
        app.apply_actions(vec![
            RosterAction::AddEnemy,
            RosterAction::StageDamage { index: 0, value: 3 },
            RosterAction::ApplyStaged { index: 0, direction: DamageDirection::Decrease },
        ]);
        assert_eq!(app.state.enemies()[0].current_health, 6);
        assert_eq!(app.state.staged(0), Some(0));
    }

    #[test]
    fn bad_action_does_not_stop_the_rest() {
        let mut app = RosterApp::with_settings(AppSettings::default());
        app.apply_actions(vec![
            RosterAction::RemoveEnemy { index: 4 },
            RosterAction::AddEnemy,
        ]);
        assert_eq!(app.state.len(), 1);
    }

    #[test]
    fn form_resets_to_fixed_defaults_whatever_the_settings() {
        let mut settings = AppSettings::default();
        settings.set_text_scale(2.0);
        settings.always_on_top = true;
        let mut app = RosterApp::with_settings(settings);
        app.state.draft.name = "Troll".to_string();
        app.apply_actions(vec![RosterAction::AddEnemy]);

        let draft = &app.state.draft;
        assert_eq!(draft.name, "");
        assert_eq!(draft.armor_class, 10);
        assert_eq!(draft.max_health, 10);
        assert_eq!(draft.accuracy_bonus, 2);
        assert_eq!(draft.damage_die, crate::models::DamageDie::D6);
    }
}
