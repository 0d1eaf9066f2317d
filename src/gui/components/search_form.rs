// src/gui/components/search_form.rs
//
// The form for the active mode: two name fields, or the conference picker.
// Buttons only record intent; submit/reset run after the closures release
// their borrows on `app`.

use eframe::egui;

use crate::{
    api::Conference,
    gui::app::App,
    search::SearchMode,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum FormAction {
    Submit,
    Reset,
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let action = match app.search.mode() {
        SearchMode::None => None,
        SearchMode::ByName => name_form(ui, app),
        SearchMode::ByTeam => team_form(ui, app),
    };

    if let Some(hint) = &app.hint {
        ui.colored_label(ui.visuals().warn_fg_color, hint);
    }

    match action {
        Some(FormAction::Submit) => app.submit(),
        Some(FormAction::Reset) => app.reset(),
        None => {}
    }
}

fn name_form(ui: &mut egui::Ui, app: &mut App) -> Option<FormAction> {
    let mut edited = false;
    let mut enter = false;

    ui.horizontal(|ui| {
        let filter = app.search.name_filter_mut();
        for (text, hint) in [
            (&mut filter.first_name, "First Name..."),
            (&mut filter.last_name, "Last Name..."),
        ] {
            let resp = ui.add(
                egui::TextEdit::singleline(text)
                    .hint_text(hint)
                    .desired_width(140.0),
            );
            edited |= resp.changed();
            enter |= resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        }
    });

    if edited {
        app.hint = None;
    }

    let action = buttons(ui);
    if enter { Some(FormAction::Submit) } else { action }
}

fn team_form(ui: &mut egui::Ui, app: &mut App) -> Option<FormAction> {
    let filter = app.search.team_filter_mut();
    let before = filter.conference;

    ui.horizontal(|ui| {
        ui.label("Conference:");
        egui::ComboBox::from_id_salt("conference")
            .selected_text(filter.conference.map_or("Select an option...", Conference::as_str))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filter.conference, None, "Select an option...");
                for conf in Conference::ALL {
                    ui.selectable_value(&mut filter.conference, Some(conf), conf.as_str());
                }
            });
    });

    if filter.conference != before {
        logd!("UI: Conference → {:?}", filter.conference);
        app.hint = None;
    }

    buttons(ui)
}

fn buttons(ui: &mut egui::Ui) -> Option<FormAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        if ui.button("Search").clicked() {
            action = Some(FormAction::Submit);
        }
        if ui.button("Reset").clicked() {
            action = Some(FormAction::Reset);
        }
    });
    action
}
