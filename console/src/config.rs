use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_common::tictactoe::FirstPlayerMode;

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";

const MAX_ROUNDS: u32 = 100;

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameConfig,
    pub analysis: AnalysisConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub first_player: FirstPlayerMode,
    pub rounds: u32,
    pub show_search_stats: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayerMode::Ai,
            rounds: 1,
            show_search_stats: true,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.rounds == 0 {
            return Err("rounds must be greater than 0".to_string());
        }
        if self.rounds > MAX_ROUNDS {
            return Err(format!("rounds must not exceed {}", MAX_ROUNDS));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct AnalysisConfig {
    /// Also run the search without pruning and report both node counts.
    pub compare_unpruned: bool,
}
