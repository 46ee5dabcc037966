use super::traits::ConfigSection;
use crate::error::RectfitError;
use serde::{Deserialize, Serialize};

/// Demo-run parameters: how many candidates to draw and how many
/// mutation rounds to apply. The evolutionary loop proper (selection,
/// crossover) lives in the external engine, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub population_size: usize,
    pub rounds: u64,
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            rounds: 100,
            seed: None,
        }
    }
}

impl ConfigSection for RunConfig {
    fn section_name() -> &'static str {
        "run"
    }

    fn validate(&self) -> Result<(), RectfitError> {
        if self.population_size == 0 {
            return Err(RectfitError::Configuration(
                "population_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
