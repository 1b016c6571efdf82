//! RNG module - next-piece selection
//!
//! The engine asks a [`PieceSource`] for each new lookahead piece. The default
//! source draws uniformly from the seven kinds with no bag: repeats and long
//! streaks are possible and expected.
//!
//! Also provides a simple LCG and a fixed-sequence source for deterministic testing.

use crate::types::PieceKind;

/// Supplier of the next piece kind
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Current internal state (usable as a seed to replay from here)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform random piece source
#[derive(Debug, Clone)]
pub struct UniformSource {
    rng: SimpleRng,
}

impl UniformSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for UniformSource {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for UniformSource {
    fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }
}

/// Deterministic source that cycles through a fixed list
///
/// An empty list yields `O` forever.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl SequenceSource {
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        Self {
            kinds: kinds.into(),
            index: 0,
        }
    }

    /// Source that always yields `kind`
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }

    /// Number of kinds drawn so far
    pub fn drawn(&self) -> usize {
        self.index
    }
}

impl PieceSource for SequenceSource {
    fn next_kind(&mut self) -> PieceKind {
        if self.kinds.is_empty() {
            return PieceKind::O;
        }
        let kind = self.kinds[self.index % self.kinds.len()];
        self.index += 1;
        kind
    }
}

impl<T: PieceSource + ?Sized> PieceSource for Box<T> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}
