use super::traits::ConfigSection;
use crate::engines::generation::SlotLayout;
use crate::error::RectfitError;
use serde::{Deserialize, Serialize};

/// Genome encoding parameters.
///
/// `permutation_bits` defaults to the minimal ceil(log2) width for the
/// catalog; a wider explicit value is accepted, a narrower one is
/// rejected when the layout is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodingConfig {
    pub permutation_bits: Option<usize>,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            permutation_bits: None,
        }
    }
}

impl EncodingConfig {
    pub fn build_layout(&self, catalog_size: usize) -> Result<SlotLayout, RectfitError> {
        match self.permutation_bits {
            Some(bits) => SlotLayout::new(catalog_size, bits),
            None => SlotLayout::for_catalog(catalog_size),
        }
    }
}

impl ConfigSection for EncodingConfig {
    fn section_name() -> &'static str {
        "encoding"
    }

    fn validate(&self) -> Result<(), RectfitError> {
        if self.permutation_bits == Some(0) {
            return Err(RectfitError::Configuration(
                "permutation_bits must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
