use super::traits::ConfigSection;
use crate::engines::generation::{
    Mutator, OrientationFlipMutator, SegmentSwapMutator, SlotLayout,
};
use crate::error::RectfitError;
use serde::{Deserialize, Serialize};

/// Which mutation strategies run each generation.
///
/// The observed evaluation pipeline only flips orientation bits; the
/// segment swap exists as an independently selectable strategy and is
/// never activated implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationStrategy {
    OrientationFlip,
    SegmentSwap,
    Both,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationConfig {
    pub strategy: MutationStrategy,
    pub flip_rate: f64,
    pub swap_rate: f64,
    /// Swap window in bits; defaults to one slot.
    pub bin_size: Option<usize>,
    /// Upper bound (inclusive) of the swap offset draw; defaults to the
    /// slot count.
    pub bin_amount: Option<usize>,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            strategy: MutationStrategy::OrientationFlip,
            flip_rate: 0.05,
            swap_rate: 0.05,
            bin_size: None,
            bin_amount: None,
        }
    }
}

impl MutationConfig {
    /// Instantiate the selected strategies for a concrete layout.
    pub fn build_mutators(&self, layout: &SlotLayout) -> Vec<Box<dyn Mutator>> {
        let flip = || -> Box<dyn Mutator> { Box::new(OrientationFlipMutator::new(self.flip_rate, layout)) };
        let swap = || -> Box<dyn Mutator> {
            match (self.bin_size, self.bin_amount) {
                (None, None) => Box::new(SegmentSwapMutator::for_layout(self.swap_rate, layout)),
                (size, amount) => Box::new(SegmentSwapMutator::new(
                    self.swap_rate,
                    size.unwrap_or_else(|| layout.slot_width()),
                    amount.unwrap_or(layout.permutation_count),
                )),
            }
        };

        match self.strategy {
            MutationStrategy::OrientationFlip => vec![flip()],
            MutationStrategy::SegmentSwap => vec![swap()],
            MutationStrategy::Both => vec![flip(), swap()],
        }
    }
}

impl ConfigSection for MutationConfig {
    fn section_name() -> &'static str {
        "mutation"
    }

    fn validate(&self) -> Result<(), RectfitError> {
        if !(0.0..=1.0).contains(&self.flip_rate) {
            return Err(RectfitError::Configuration(
                "flip_rate must be between 0 and 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.swap_rate) {
            return Err(RectfitError::Configuration(
                "swap_rate must be between 0 and 1".to_string(),
            ));
        }
        if self.bin_size == Some(0) {
            return Err(RectfitError::Configuration(
                "bin_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
