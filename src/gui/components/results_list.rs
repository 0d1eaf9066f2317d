// src/gui/components/results_list.rs
//
// Purely a view over `display_status()`: spinner, warning text, or a
// two-column table (id | name).

use eframe::egui::{self, widgets::Spinner};
use egui_extras::{Column, TableBuilder};

use crate::{config::consts::FATAL_TEXT, gui::app::App, search::DisplayStatus};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    match app.search.display_status() {
        DisplayStatus::Idle => {}
        status @ (DisplayStatus::Loading | DisplayStatus::NoResults) => {
            ui.horizontal(|ui| {
                if status == DisplayStatus::Loading {
                    ui.add(Spinner::new().size(14.0));
                }
                if let Some(msg) = status.message() {
                    ui.label(msg);
                }
            });
        }
        DisplayStatus::Players(players) => {
            let rows: Vec<(u64, String)> = players
                .iter()
                .map(|p| (p.id, format!("{} {}", p.first_name, p.last_name)))
                .collect();
            table(ui, "Player", &rows);
        }
        DisplayStatus::Teams(teams) => {
            let rows: Vec<(u64, String)> = teams
                .iter()
                .map(|t| (t.id, format!("{} {}", t.full_name, t.abbreviation)))
                .collect();
            table(ui, "Team", &rows);
        }
        // app.rs swaps the whole view out before we get here.
        DisplayStatus::Fatal(_) => draw_fatal(ui),
    }
}

pub fn draw_fatal(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(egui::RichText::new(FATAL_TEXT).strong());
    });
}

fn table(ui: &mut egui::Ui, name_header: &str, rows: &[(u64, String)]) {
    ui.label(format!("{} result(s)", rows.len()));

    TableBuilder::new(ui)
        .id_salt(("results", name_header))
        .striped(true)
        .column(Column::exact(56.0))
        .column(Column::remainder().clip(true))
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("ID");
            });
            header.col(|ui| {
                ui.strong(name_header);
            });
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let (id, name) = &rows[row.index()];
                row.col(|ui| {
                    ui.monospace(id.to_string());
                });
                row.col(|ui| {
                    ui.label(name);
                });
            });
        });
}
