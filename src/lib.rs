pub mod gateway;
pub mod launcher;
pub mod logging;
pub mod model;
pub mod settings;
pub mod state;
pub mod tui;

mod tui_shell;
