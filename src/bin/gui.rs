// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use bdl_search::{config::options::AppOptions, config::state::GuiState, gui};
use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};

const ICON_SIZE: u32 = 64;

/// Orange ball with dark seams, drawn at startup so we ship no asset files.
fn app_icon() -> IconData {
    let c = (ICON_SIZE as f32 - 1.0) / 2.0;
    let r = c - 1.0;
    let rgba = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let (dx, dy) = (x as f32 - c, y as f32 - c);
        let d = (dx * dx + dy * dy).sqrt();
        if d > r {
            return Rgba([0, 0, 0, 0]);
        }
        // vertical + horizontal seams, plus the two curved side seams
        let curve = ((d - r * 0.95).abs() < 1.6) || ((dx.abs() - r * 0.55).abs() < 1.4 && dy.abs() < r * 0.8);
        let seam = dx.abs() < 1.2 || dy.abs() < 1.2 || curve;
        if seam { Rgba([40, 20, 10, 255]) } else { Rgba([232, 110, 30, 255]) }
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    let gui_state = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([gui_state.window_w, gui_state.window_h])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, AppOptions::from_env()) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
