pub mod analytics;
pub mod constants;
pub mod outcome_script;
pub mod rotation;
pub mod session;
pub mod shared_roulette_game;
pub mod validation;
pub mod wheel_layout;

use serde::{Serialize, Deserialize};
use crate::outcome_script::OutcomeScript;
use crate::shared_roulette_game::GameConfig;

/// Response of the config endpoint: everything a client needs to start a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub game: GameConfig,
    pub script: OutcomeScript,
    pub redirect_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            script: OutcomeScript::default(),
            redirect_url: constants::DEFAULT_REDIRECT_URL.to_string(),
        }
    }
}
