//! Business logic use cases
//!
//! One file per user- or system-triggered decision. Screen rendering stays
//! in the shell; these carry everything that happens when the user acts.

pub mod content;

mod acknowledge_requirements;
mod complete_consult;
mod logout;
mod open_settings;
mod select_tab;
mod start_app;
mod start_journey;
mod toggle_theme;

pub use acknowledge_requirements::AcknowledgeRequirements;
pub use complete_consult::CompleteConsult;
pub use logout::Logout;
pub use open_settings::OpenSettings;
pub use select_tab::SelectTab;
pub use start_app::StartApp;
pub use start_journey::StartJourney;
pub use toggle_theme::ToggleTheme;
