//! Resgate Fácil behavioral core.
//!
//! Composition root tying the domain, application and infrastructure crates
//! into the runtime the native mobile shell embeds. The shell owns pixels
//! and gestures; everything that decides *what happens* lives here.

pub mod bootstrap;

pub use bootstrap::{build_app, init_logging};
pub use rf_app::{App, AppDeps, UseCases};
pub use rf_core::config::AppConfig;
pub use rf_core::navigation::{PosConsultTab, Route};
pub use rf_core::theme::Theme;
