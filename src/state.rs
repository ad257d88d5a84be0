use crate::config::Config;
use crate::court::ResolutionCourt;
use crate::models::{Mode, Settings};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Everything one dashboard session owns. Cloning shares the same session.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub court: Arc<Mutex<ResolutionCourt>>,
    pub settings: Arc<Mutex<Settings>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let settings = Settings {
            mode: Mode::default(),
            age: config.default_age,
        };
        Self {
            config: Arc::new(config),
            court: Arc::new(Mutex::new(ResolutionCourt::new())),
            settings: Arc::new(Mutex::new(settings)),
        }
    }
}
