pub use taskdeck_core as core;
pub use taskdeck_core::model;
pub use taskdeck_core::ApiConfig;

pub use taskdeck_tui::cli;
pub use taskdeck_tui::config;
pub use taskdeck_tui::tui;
