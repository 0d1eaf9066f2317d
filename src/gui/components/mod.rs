// src/gui/components/mod.rs
//
// One concern per file; each exposes `draw(ui, app)` and mutates `app`
// directly.

pub mod mode_select;
pub mod results_list;
pub mod search_form;
