// src/gui/app.rs
use std::{error::Error, sync::Arc};

use eframe::egui;

use crate::{
    api::BallDontLie,
    config::{options::AppOptions, state::AppState},
    search::{DisplayStatus, Outcome, SearchCoordinator},
};

pub fn run(options: eframe::NativeOptions, app_options: AppOptions) -> Result<(), Box<dyn Error>> {
    let client = Arc::new(BallDontLie::new(&app_options.api)?);
    let state = AppState::new(app_options);
    let title = state.gui.title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            let search = SearchCoordinator::new(client)
                .with_waker(Arc::new(move || ctx.request_repaint()));
            Ok(Box::new(App::new(state, search)))
        }),
    )?;
    Ok(())
}

pub struct App {
    pub state: AppState,

    // single owner of mode, filters and results (UI thread only)
    pub search: SearchCoordinator<BallDontLie>,

    // inline hint after a refused submit; cleared on the next edit
    pub hint: Option<String>,
}

impl App {
    pub fn new(state: AppState, search: SearchCoordinator<BallDontLie>) -> Self {
        if !state.options.api.has_key() {
            logf!("Init: No API key configured; first search will fail");
        }
        logf!("Init: {:?}", state.options.api);
        Self { state, search, hint: None }
    }

    /// Fold any settled requests into the store.
    fn pump(&mut self) {
        for outcome in self.search.pump() {
            if outcome == Outcome::Failed {
                if let DisplayStatus::Fatal(cause) = self.search.display_status() {
                    loge!("UI: Fatal view entered: {}", cause);
                }
            }
        }
    }

    pub fn submit(&mut self) {
        match self.search.submit() {
            Ok(token) => {
                self.hint = None;
                logd!("UI: Submit → token={}", token.id());
            }
            Err(e) => self.hint = Some(e.to_string()),
        }
    }

    pub fn reset(&mut self) {
        self.hint = None;
        self.search.reset();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump();

        eframe::egui::CentralPanel::default().show(ctx, |ui| {
            // One failure replaces the whole view.
            if self.search.is_fatal() {
                crate::gui::components::results_list::draw_fatal(ui);
                return;
            }

            ui.heading(&self.state.gui.title);
            ui.add_space(6.0);

            crate::gui::components::mode_select::draw(ui, self);

            ui.separator();

            crate::gui::components::search_form::draw(ui, self);

            ui.separator();

            crate::gui::components::results_list::draw(ui, self);
        });
    }
}
