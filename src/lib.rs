pub mod config;
pub mod engines;
pub mod error;
pub mod geometry;
pub mod types;

pub use config::{AppConfig, ConfigManager};
pub use engines::evaluation::{PackingEvaluator, PlacementEngine};
pub use engines::generation::{
    Candidate, Genome, Mutator, OrientationFlipMutator, PermutationInitializer,
    SegmentSwapMutator, SlotLayout,
};
pub use error::{RectfitError, Result};
