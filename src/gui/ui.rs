use eframe::egui;
use crate::gui::app::RosterApp;
use crate::gui::helpers::{die_selector, numeric_input, stat_item, submitted_with_enter};
use crate::roster::{DamageDirection, RosterAction};

const HEALTH_RED: egui::Color32 = egui::Color32::from_rgb(191, 26, 4);
const MINUS_RED: egui::Color32 = egui::Color32::from_rgb(255, 30, 0);
const PLUS_GREEN: egui::Color32 = egui::Color32::from_rgb(10, 170, 44);

impl RosterApp {
    /// The add-enemy form. Returns true when it was submitted this frame.
    pub fn display_add_form(&mut self, ui: &mut egui::Ui) -> bool {
        let draft = &mut self.state.draft;
        let mut submitted = false;

        ui.horizontal(|ui| {
            let name_response = ui.add(
                egui::TextEdit::singleline(&mut draft.name)
                    .hint_text("Enemy name")
                    .desired_width(240.0),
            );
            submitted |= submitted_with_enter(ui, &name_response);

            // Enter in any field of the form submits it
            ui.label("🛡").on_hover_text("Armor class");
            submitted |= numeric_input(ui, "new_enemy_ac", &mut draft.armor_class, 28.0).submitted;
            ui.label("❤").on_hover_text("Max health");
            submitted |= numeric_input(ui, "new_enemy_hp", &mut draft.max_health, 28.0).submitted;
            ui.label("🎯").on_hover_text("Accuracy");
            submitted |= numeric_input(ui, "new_enemy_acc", &mut draft.accuracy_bonus, 28.0).submitted;
            ui.label("🔨").on_hover_text("Damage");
            die_selector(ui, "new_enemy_die", &mut draft.damage_die);

            if ui.button(egui::RichText::new("+").strong()).clicked() {
                submitted = true;
            }
        });

        submitted
    }

    /// One row per enemy. Interactions are returned rather than applied so the indices
    /// used while drawing stay valid for the whole frame.
    pub fn display_roster(&self, ui: &mut egui::Ui) -> Vec<RosterAction> {
        let mut actions = Vec::new();

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for (index, enemy) in self.state.enemies().iter().enumerate() {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(ui.available_width());

                        ui.horizontal(|ui| {
                            if ui.button(egui::RichText::new("✕").color(MINUS_RED)).clicked() {
                                actions.push(RosterAction::RemoveEnemy { index });
                            }
                            ui.label(egui::RichText::new(enemy.get_display_name(index)).strong());

                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                // right-to-left, so listed in reverse display order
                                stat_item(ui, "❤", "Max health", enemy.max_health, Some(HEALTH_RED));
                                stat_item(ui, "🛡", "Armor class", enemy.armor_class, None);
                                stat_item(ui, "🔨", "Damage", enemy.damage_die, None);
                                stat_item(ui, "🎯", "Accuracy", enemy.accuracy_label(), None);
                            });
                        });

                        ui.horizontal(|ui| {
                            let mut staged = self.state.staged(index).unwrap_or(0);
                            if numeric_input(ui, ("staged_damage", index), &mut staged, 40.0).changed {
                                actions.push(RosterAction::StageDamage { index, value: staged });
                            }
                            if ui.button(egui::RichText::new("−").color(MINUS_RED)).clicked() {
                                actions.push(RosterAction::ApplyStaged {
                                    index,
                                    direction: DamageDirection::Decrease,
                                });
                            }
                            if ui.button(egui::RichText::new("+").color(PLUS_GREEN)).clicked() {
                                actions.push(RosterAction::ApplyStaged {
                                    index,
                                    direction: DamageDirection::Increase,
                                });
                            }

                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                let color = if enemy.current_health <= 0 {
                                    ui.visuals().weak_text_color()
                                } else {
                                    ui.visuals().text_color()
                                };
                                ui.label(
                                    egui::RichText::new(enemy.current_health.to_string())
                                        .strong()
                                        .size(16.0)
                                        .color(color),
                                );
                                ui.label(egui::RichText::new("💔").color(HEALTH_RED))
                                    .on_hover_text("Current health");
                            });
                        });
                    });
                }
            });

        actions
    }
}

impl eframe::App for RosterApp {
    /// This function is called on every frame to update the GUI.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_text_scale(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.set_min_size(egui::Vec2::new(300.0, 200.0));

            // Custom header bar
            let header_rect = ui.allocate_space(egui::Vec2::new(ui.available_width(), 35.0)).1;

            // Make the header draggable except for the buttons
            let draggable_rect = egui::Rect::from_min_size(
                header_rect.min,
                egui::Vec2::new(header_rect.width() - 140.0, header_rect.height())
            );
            let drag_response = ui.allocate_rect(draggable_rect, egui::Sense::click_and_drag());
            if drag_response.drag_started() {
                ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
            }

            ui.scope_builder(egui::UiBuilder::new().max_rect(header_rect), |ui| {
                ui.horizontal(|ui| {
                    let title_pos = egui::Pos2::new(header_rect.min.x + 15.0, header_rect.center().y);
                    ui.painter().text(title_pos, egui::Align2::LEFT_CENTER, "Encounter Roster",
                        egui::FontId::proportional(16.0), ui.visuals().text_color());

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.add(egui::Button::new(egui::RichText::new("✕").size(12.0))
                            .min_size(egui::Vec2::new(25.0, 25.0))).clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }

                        if ui.add(egui::Button::new(egui::RichText::new("−").size(12.0))
                            .min_size(egui::Vec2::new(25.0, 25.0))).clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true));
                        }

                        ui.add_space(10.0);

                        if ui.add(egui::Button::new(egui::RichText::new("⚙").size(12.0))
                            .min_size(egui::Vec2::new(25.0, 25.0))
                            .selected(self.show_options)).clicked() {
                            self.show_options = !self.show_options;
                        }
                    });
                });
            });

            ui.separator();

            let mut actions = Vec::new();
            if self.display_add_form(ui) {
                actions.push(RosterAction::AddEnemy);
            }

            ui.separator();

            actions.extend(self.display_roster(ui));
            self.apply_actions(actions);
        });

        self.show_options_window(ctx);
    }

    /// Keep window background opaque and visible.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let color = visuals.panel_fill;
        [
            color.r() as f32 / 255.0,
            color.g() as f32 / 255.0,
            color.b() as f32 / 255.0,
            color.a() as f32 / 255.0
        ]
    }
}
