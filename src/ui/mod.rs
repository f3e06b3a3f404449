// UI module - egui side panel drawn over the macroquad window

mod state;
mod stats;

pub use state::{UIState, draw_ui, process_egui};
