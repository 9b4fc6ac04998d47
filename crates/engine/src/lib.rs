//! ShinyBridge Engine library.
//!
//! All server-side code for the artifact bridge:
//!
//! - `infrastructure/` - port traits and their concrete implementations
//! - `api/` - HTTP entry points
//! - `app` - application composition

pub mod api;
pub mod app;
pub mod infrastructure;

pub use app::App;
