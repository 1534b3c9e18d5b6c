use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::ui::UiConfig;

pub mod api;
pub mod ui;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            api: ApiConfig::new(),
            ui: UiConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
