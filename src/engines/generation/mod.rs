pub mod codec;
pub mod genome;
pub mod initializer;
pub mod operators;

pub use codec::SlotLayout;
pub use genome::{Candidate, Genome};
pub use initializer::PermutationInitializer;
pub use operators::{Mutator, OrientationFlipMutator, SegmentSwapMutator};
