use super::codec::SlotLayout;
use super::genome::Candidate;
use crate::error::Result;
use rand::seq::SliceRandom;
use rand::Rng;

/// Builds fresh candidates: a uniform random permutation of the full
/// catalog plus a uniform random orientation vector, encoded.
///
/// Construction is the only place the permutation invariant is
/// established — decode assumes it but does not re-check it.
pub struct PermutationInitializer {
    layout: SlotLayout,
}

impl PermutationInitializer {
    pub fn new(layout: SlotLayout) -> Self {
        Self { layout }
    }

    pub fn random_candidate<R: Rng>(&self, rng: &mut R) -> Result<Candidate> {
        let mut permutation: Vec<usize> = (0..self.layout.permutation_count).collect();
        permutation.shuffle(rng);

        let orientation: Vec<bool> = (0..self.layout.permutation_count)
            .map(|_| rng.gen_bool(0.5))
            .collect();

        let genome = self.layout.encode(&permutation, &orientation)?;
        Ok(Candidate::new(genome, self.layout))
    }
}
