use super::genome::Genome;
use crate::error::{RectfitError, Result};
use crate::types::RectRequest;
use serde::{Deserialize, Serialize};

/// Fixed-width slot partitioning of a genome.
///
/// Each of the `permutation_count` slots is `permutation_bits` id bits
/// (MSB first) followed by one orientation bit. Fixed-width slots keep
/// every id aligned with its orientation bit, which is what makes the
/// slot-swap mutation semantically meaningful: a bin is always exactly
/// one rectangle's encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotLayout {
    pub permutation_count: usize,
    pub permutation_bits: usize,
}

impl SlotLayout {
    pub fn new(permutation_count: usize, permutation_bits: usize) -> Result<Self> {
        let minimum = bits_for(permutation_count);
        if permutation_bits < minimum {
            return Err(RectfitError::Configuration(format!(
                "{} permutation bits cannot address {} catalog ids (need {})",
                permutation_bits, permutation_count, minimum
            )));
        }
        Ok(Self {
            permutation_count,
            permutation_bits,
        })
    }

    /// Layout with the minimal id width for a catalog of `count` shapes.
    pub fn for_catalog(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(RectfitError::Configuration(
                "Cannot build a slot layout for an empty catalog".to_string(),
            ));
        }
        Self::new(count, bits_for(count))
    }

    /// Bits per slot: the id field plus the trailing orientation bit.
    pub fn slot_width(&self) -> usize {
        self.permutation_bits + 1
    }

    pub fn genome_len(&self) -> usize {
        self.permutation_count * self.slot_width()
    }

    /// Encode a permutation of catalog ids and a per-slot orientation
    /// vector into a fresh genome.
    pub fn encode(&self, permutation: &[usize], orientation: &[bool]) -> Result<Genome> {
        if permutation.len() != self.permutation_count || orientation.len() != self.permutation_count
        {
            return Err(RectfitError::Configuration(format!(
                "Encode input lengths {}/{} do not match the layout's {} slots",
                permutation.len(),
                orientation.len(),
                self.permutation_count
            )));
        }

        let mut bits = Vec::with_capacity(self.genome_len());
        for (id, &flipped) in permutation.iter().zip(orientation) {
            if *id >= 1 << self.permutation_bits {
                return Err(RectfitError::EncodingOverflow {
                    id: *id,
                    bits: self.permutation_bits,
                });
            }
            for shift in (0..self.permutation_bits).rev() {
                bits.push((id >> shift) & 1 == 1);
            }
            bits.push(flipped);
        }
        Ok(Genome::new(bits))
    }

    /// Parse sequential fixed-width slots back into rectangle requests.
    ///
    /// Fails fast on a genome whose length does not match the layout or
    /// whose decoded ids fall outside the catalog; out-of-range ids are
    /// never clamped or wrapped.
    pub fn decode(&self, genome: &Genome) -> Result<Vec<RectRequest>> {
        if genome.len() != self.genome_len() {
            return Err(RectfitError::InvalidGenomeLength {
                length: genome.len(),
                expected: self.genome_len(),
                slots: self.permutation_count,
                slot_width: self.slot_width(),
            });
        }

        let mut requests = Vec::with_capacity(self.permutation_count);
        for position in 0..self.permutation_count {
            let base = position * self.slot_width();
            let mut id = 0usize;
            for offset in 0..self.permutation_bits {
                id = (id << 1) | genome.get(base + offset) as usize;
            }
            if id >= self.permutation_count {
                return Err(RectfitError::IdOutOfRange {
                    id,
                    position,
                    catalog_size: self.permutation_count,
                });
            }
            requests.push(RectRequest {
                position,
                catalog_id: id,
                flipped: genome.get(base + self.permutation_bits),
            });
        }
        Ok(requests)
    }
}

/// ceil(log2(count)), minimum 1 so a one-entry catalog still gets an id field.
fn bits_for(count: usize) -> usize {
    let mut bits = 0;
    while (1usize << bits) < count {
        bits += 1;
    }
    bits.max(1)
}
