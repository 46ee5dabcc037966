use crate::error::{RectfitError, Result};
use serde::{Deserialize, Serialize};

/// One shape in the fixed rectangle catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: usize,
    pub width: f64,
    pub height: f64,
}

/// The fixed set of shapes available to be packed, referenced by id.
///
/// Ids must equal their index in the backing vector; `new` validates
/// this instead of trusting the caller, so lookups stay O(1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(RectfitError::Configuration(
                "Catalog must contain at least one entry".to_string(),
            ));
        }
        for (index, entry) in entries.iter().enumerate() {
            if entry.id != index {
                return Err(RectfitError::Configuration(format!(
                    "Catalog entry at index {} carries id {}",
                    index, entry.id
                )));
            }
            if entry.width <= 0.0 || entry.height <= 0.0 {
                return Err(RectfitError::Configuration(format!(
                    "Catalog entry {} has non-positive dimensions {}x{}",
                    entry.id, entry.width, entry.height
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, id: usize) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

/// Bounded parent region, origin (0,0); all placements must be fully
/// contained in it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub width: f64,
    pub height: f64,
}

/// One decoded genome slot: which catalog shape goes where in the
/// placement order, and whether it is rotated 90 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectRequest {
    pub position: usize,
    pub catalog_id: usize,
    pub flipped: bool,
}

/// A catalog shape resolved to its placement orientation, carrying its
/// sequence position for ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedRect {
    pub position: usize,
    pub width: f64,
    pub height: f64,
}

impl OrientedRect {
    /// Width and height are swapped when `flipped` is set.
    pub fn resolve(entry: &CatalogEntry, position: usize, flipped: bool) -> Self {
        let (width, height) = if flipped {
            (entry.height, entry.width)
        } else {
            (entry.width, entry.height)
        };
        Self {
            position,
            width,
            height,
        }
    }
}
