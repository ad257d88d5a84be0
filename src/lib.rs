pub mod app;
pub mod config;
pub mod court;
pub mod dashboard;
pub mod errors;
pub mod handlers;
pub mod judgment;
pub mod models;
pub mod progress;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use court::ResolutionCourt;
pub use errors::CourtError;
pub use state::AppState;
