use super::traits::ConfigSection;
use crate::error::RectfitError;
use crate::types::{Catalog, CatalogEntry, Region};
use serde::{Deserialize, Serialize};

/// The packing problem itself: the shape catalog, the parent region and
/// the fitness scoring hook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemConfig {
    pub region_width: f64,
    pub region_height: f64,
    pub catalog: Vec<CatalogEntry>,
    pub fitness_exponent: f64,
}

impl Default for ProblemConfig {
    fn default() -> Self {
        Self {
            region_width: 10.0,
            region_height: 10.0,
            catalog: vec![
                CatalogEntry {
                    id: 0,
                    width: 4.0,
                    height: 2.0,
                },
                CatalogEntry {
                    id: 1,
                    width: 3.0,
                    height: 3.0,
                },
                CatalogEntry {
                    id: 2,
                    width: 2.0,
                    height: 5.0,
                },
                CatalogEntry {
                    id: 3,
                    width: 1.0,
                    height: 1.0,
                },
            ],
            fitness_exponent: 1.0,
        }
    }
}

impl ProblemConfig {
    pub fn region(&self) -> Region {
        Region {
            width: self.region_width,
            height: self.region_height,
        }
    }

    pub fn build_catalog(&self) -> Result<Catalog, RectfitError> {
        Catalog::new(self.catalog.clone())
    }
}

impl ConfigSection for ProblemConfig {
    fn section_name() -> &'static str {
        "problem"
    }

    fn validate(&self) -> Result<(), RectfitError> {
        if self.region_width <= 0.0 || self.region_height <= 0.0 {
            return Err(RectfitError::Configuration(format!(
                "Parent region {}x{} must have positive dimensions",
                self.region_width, self.region_height
            )));
        }
        if self.fitness_exponent <= 0.0 {
            return Err(RectfitError::Configuration(
                "Fitness exponent must be positive".to_string(),
            ));
        }
        // Catalog construction performs the id/index and dimension checks.
        self.build_catalog().map(|_| ())
    }
}
