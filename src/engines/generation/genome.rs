/// Bit-vector genome for the packing problem.
///
/// A genome is a fixed-length sequence of bits, logically partitioned
/// into equal-size slots. Each slot encodes one rectangle: a fixed-width
/// catalog id (most-significant bit first) followed by a single
/// orientation bit. See `SlotLayout` for the partitioning arithmetic.
///
/// # Why bits instead of a `Vec<usize>` permutation?
///
/// Genetic operators work best on flat, uniform structures:
/// - **Orientation flips** are single-bit toggles at fixed strides
/// - **Slot swaps** are window copies, no re-encoding needed
/// - The decode step is the single place where structure is recovered
///
/// Mutators take `&mut Genome`, so exclusive access during mutation is
/// enforced by the borrow checker rather than convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genome {
    bits: Vec<bool>,
}

impl Genome {
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    pub fn zeroed(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    pub fn get(&self, index: usize) -> bool {
        self.bits[index]
    }

    pub fn set(&mut self, index: usize, value: bool) {
        self.bits[index] = value;
    }

    pub fn toggle(&mut self, index: usize) {
        self.bits[index] = !self.bits[index];
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Copy of the `len`-bit window starting at `offset`.
    /// Panics if the window runs past the end; mutation operators are
    /// expected to bounds-check before calling.
    pub fn window(&self, offset: usize, len: usize) -> Vec<bool> {
        self.bits[offset..offset + len].to_vec()
    }

    pub fn write_window(&mut self, offset: usize, window: &[bool]) {
        self.bits[offset..offset + window.len()].copy_from_slice(window);
    }
}

/// One genome plus the slot layout it was encoded under.
///
/// The layout is the decode template: the evaluator reads the genome
/// through it, mutators write through the raw bit accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub genome: Genome,
    pub layout: super::codec::SlotLayout,
}

impl Candidate {
    pub fn new(genome: Genome, layout: super::codec::SlotLayout) -> Self {
        Self { genome, layout }
    }

    /// Decode the genome into ordered rectangle requests. Read-only:
    /// decoding never mutates or regenerates the genome.
    pub fn decode(&self) -> crate::error::Result<Vec<crate::types::RectRequest>> {
        self.layout.decode(&self.genome)
    }
}
