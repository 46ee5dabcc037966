use super::placement::PlacementEngine;
use crate::engines::generation::Candidate;
use crate::error::{RectfitError, Result};
use crate::geometry::Rect;
use crate::types::{Catalog, OrientedRect, Region};
use rayon::prelude::*;

/// Scores a candidate by how much catalog area its encoded arrangement
/// manages to pack into the parent region.
///
/// Evaluation is a pure function of the candidate's genome plus the
/// shared read-only catalog and region, so a single evaluator can be
/// used from many threads at once.
pub struct PackingEvaluator {
    catalog: Catalog,
    engine: PlacementEngine,
    fitness_exponent: f64,
}

impl PackingEvaluator {
    pub fn new(catalog: Catalog, region: Region, fitness_exponent: f64) -> Self {
        Self {
            catalog,
            engine: PlacementEngine::new(region),
            fitness_exponent,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Decode, resolve against the catalog, place in sequence order and
    /// sum the placed area. Unplaceable rectangles contribute nothing;
    /// a malformed genome is a hard error.
    pub fn evaluate(&self, candidate: &Candidate, _generation: u64) -> Result<f64> {
        let requests = candidate.decode()?;

        let mut rects = Vec::with_capacity(requests.len());
        for request in &requests {
            let entry =
                self.catalog
                    .get(request.catalog_id)
                    .ok_or(RectfitError::IdOutOfRange {
                        id: request.catalog_id,
                        position: request.position,
                        catalog_size: self.catalog.len(),
                    })?;
            rects.push(OrientedRect::resolve(entry, request.position, request.flipped));
        }

        let placed = self.engine.pack(&rects);
        let total: f64 = placed.iter().map(Rect::area).sum();

        // Exponent 1 by default; kept as a hook for non-linear scoring.
        Ok(total.powf(self.fitness_exponent))
    }

    /// Evaluate a whole population in parallel. Legal because each
    /// evaluation only reads the shared catalog and region.
    pub fn evaluate_population(
        &self,
        candidates: &[Candidate],
        generation: u64,
    ) -> Result<Vec<f64>> {
        candidates
            .par_iter()
            .map(|candidate| self.evaluate(candidate, generation))
            .collect()
    }
}
