//! Spawner module - random piece generation
//!
//! Shape and color are drawn independently and uniformly from their 7-entry
//! tables, so repeats are possible (no bag). A seeded spawner replays the same
//! sequence, which the tests and `--seed` rely on.
//!
//! Pieces queued with [`Spawner::push_next`] are handed out first, ahead of
//! random draws.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::piece::Piece;
use crate::shape::ShapeKind;
use crate::types::{Color, PIECE_COLORS};

#[derive(Debug, Clone)]
pub struct Spawner {
    rng: StdRng,
    queued: VecDeque<Piece>,
}

impl Spawner {
    /// Seeded spawner, or one seeded from OS entropy when `seed` is None
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            queued: VecDeque::new(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Queue a specific piece ahead of the random sequence
    pub fn push_next(&mut self, kind: ShapeKind, color: Color) -> &mut Self {
        self.queued.push_back(Piece::new(kind.shape(), color));
        self
    }

    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }

    /// Next piece at its spawn position
    pub fn spawn(&mut self) -> Piece {
        if let Some(piece) = self.queued.pop_front() {
            return piece;
        }
        let kind = ShapeKind::ALL[self.rng.gen_range(0..ShapeKind::ALL.len())];
        let color = PIECE_COLORS[self.rng.gen_range(0..PIECE_COLORS.len())];
        Piece::new(kind.shape(), color)
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(None)
    }
}
