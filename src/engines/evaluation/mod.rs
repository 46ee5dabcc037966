pub mod evaluator;
pub mod placement;

pub use evaluator::PackingEvaluator;
pub use placement::PlacementEngine;
