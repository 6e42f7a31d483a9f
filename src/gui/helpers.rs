use std::hash::Hash;
use eframe::egui;
use crate::models::DamageDie;
use crate::parsing::coerce_numeric_input;

/// Outcome of drawing a numeric field for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumericInput {
    /// The coerced value differs from what it was before this frame
    pub changed: bool,
    /// Enter was pressed while the field had focus
    pub submitted: bool,
}

/// Text to show in a numeric field. A buffer kept from earlier frames wins only while it
/// still coerces to `value`; once state moved on (say the staged damage was reset after an
/// apply) the field shows the new value instead.
pub fn field_text(stored: Option<String>, value: i32) -> String {
    stored
        .filter(|buffer| coerce_numeric_input(buffer) == value)
        .unwrap_or_else(|| value.to_string())
}

/// Single-line numeric field. The typed text is kept while the field has focus so partial
/// input like "-" survives between frames; `value` always holds the coerced number.
pub fn numeric_input(ui: &mut egui::Ui, id_salt: impl Hash, value: &mut i32, width: f32) -> NumericInput {
    let id = ui.make_persistent_id(id_salt);
    let stored = ui.data_mut(|d| d.get_temp::<String>(id));
    let mut text = field_text(stored, *value);

    let response = ui.add(
        egui::TextEdit::singleline(&mut text)
            .id(id)
            .desired_width(width),
    );

    let mut outcome = NumericInput::default();
    if response.changed() {
        let coerced = coerce_numeric_input(&text);
        if coerced != *value {
            *value = coerced;
            outcome.changed = true;
        }
    }
    outcome.submitted = submitted_with_enter(ui, &response);

    if response.has_focus() {
        ui.data_mut(|d| d.insert_temp(id, text));
    } else {
        ui.data_mut(|d| d.remove::<String>(id));
    }

    outcome
}

/// Single-line text edits give up focus on Enter, which is how a form submit shows up.
pub fn submitted_with_enter(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

pub fn die_selector(ui: &mut egui::Ui, id_salt: impl Hash, die: &mut DamageDie) -> bool {
    let before = *die;
    egui::ComboBox::from_id_salt(id_salt)
        .width(56.0)
        .selected_text(die.notation())
        .show_ui(ui, |ui| {
            for option in DamageDie::ALL {
                ui.selectable_value(die, option, option.notation());
            }
        });
    *die != before
}

/// Icon followed by a bold value, with the icon's meaning as hover text.
pub fn stat_item(ui: &mut egui::Ui, icon: &str, hover: &str, value: impl ToString, color: Option<egui::Color32>) {
    let mut icon_text = egui::RichText::new(icon);
    if let Some(color) = color {
        icon_text = icon_text.color(color);
    }
    ui.label(icon_text).on_hover_text(hover);
    ui.label(egui::RichText::new(value.to_string()).strong().size(16.0));
}
