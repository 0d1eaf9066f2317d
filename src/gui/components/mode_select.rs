// src/gui/components/mode_select.rs
//
// "Search by:" picker. Any pick, even the current one, resets the forms
// and results through the coordinator.

use eframe::egui;

use crate::{gui::app::App, search::SearchMode};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let current = app.search.mode();
    let mut picked: Option<SearchMode> = None;

    ui.horizontal(|ui| {
        ui.label("Search by:");
        egui::ComboBox::from_id_salt("search_mode")
            .selected_text(current.label())
            .show_ui(ui, |ui| {
                for mode in SearchMode::ALL {
                    if ui.selectable_label(mode == current, mode.label()).clicked() {
                        picked = Some(mode);
                    }
                }
            });
    });

    if let Some(mode) = picked {
        app.hint = None;
        app.search.select_mode(mode);
    }
}
