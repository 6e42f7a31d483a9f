use eframe::egui;
use crate::gui::app::RosterApp;

impl RosterApp {
    pub fn show_options_window(&mut self, ctx: &egui::Context) {
        if !self.show_options {
            return;
        }

        let mut open = self.show_options;
        let mut changed = false;
        let settings = &mut self.settings;

        egui::Window::new("Options")
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                let mut scale = settings.text_scale;
                if ui.add(egui::Slider::new(&mut scale, 0.5..=3.0).text("Text scale")).changed() {
                    settings.set_text_scale(scale);
                    changed = true;
                }

                if ui.checkbox(&mut settings.always_on_top, "Always on top").changed() {
                    let level = if settings.always_on_top {
                        egui::viewport::WindowLevel::AlwaysOnTop
                    } else {
                        egui::viewport::WindowLevel::Normal
                    };
                    ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(level));
                    changed = true;
                }
            });

        self.show_options = open;
        if changed {
            self.settings_changed();
        }
    }
}
