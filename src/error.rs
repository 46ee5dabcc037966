use thiserror::Error;

#[derive(Error, Debug)]
pub enum RectfitError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid genome length: got {length} bits, expected {expected} ({slots} slots of {slot_width} bits)")]
    InvalidGenomeLength {
        length: usize,
        expected: usize,
        slots: usize,
        slot_width: usize,
    },

    #[error("Catalog id {id} at slot {position} is outside the catalog (size {catalog_size})")]
    IdOutOfRange {
        id: usize,
        position: usize,
        catalog_size: usize,
    },

    #[error("Catalog id {id} does not fit in {bits} permutation bits")]
    EncodingOverflow { id: usize, bits: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RectfitError>;
