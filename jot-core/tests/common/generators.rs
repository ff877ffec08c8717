//! Stochastic document generators for test variations.
//!
//! Uses seeded RNG for reproducibility. Failures print the seed for replay.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator producing random well-formed documents.
pub struct Gen {
    pub rng: StdRng,
    pub seed: u64,
}

impl Gen {
    /// Create with a specific seed (for reproduction).
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Geometric distribution: count until rand > alpha.
    pub fn geometric(&mut self, alpha: f64) -> usize {
        let mut n = 0;
        while self.rng.gen::<f64>() < alpha {
            n += 1;
        }
        n
    }

    /// Random boolean with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// Random member key: ASCII letters and digits, never empty.
    pub fn key(&mut self) -> String {
        let len = 1 + self.geometric(0.6);
        let chars = b"abcdefghijklmnopqrstuvwxyz0123456789";
        (0..len)
            .map(|_| chars[self.rng.gen_range(0..chars.len())] as char)
            .collect()
    }

    /// A whole document: an object or an array at the top level.
    pub fn document(&mut self) -> String {
        if self.chance(0.5) {
            self.object(2)
        } else {
            self.array(2)
        }
    }

    fn object(&mut self, depth: usize) -> String {
        let count = self.geometric(0.7).min(6);
        let members: Vec<String> = (0..count)
            .map(|_| format!("{:?}: {}", self.key(), self.value(depth)))
            .collect();
        format!("{{{}}}", members.join(", "))
    }

    fn array(&mut self, depth: usize) -> String {
        let count = self.geometric(0.7).min(6);
        let elements: Vec<String> = (0..count).map(|_| self.value(depth)).collect();
        format!("[{}]", elements.join(", "))
    }

    fn value(&mut self, depth: usize) -> String {
        let scalar_only = depth == 0;
        match self.rng.gen_range(0..if scalar_only { 5 } else { 7 }) {
            0 => "null".to_string(),
            1 => if self.chance(0.5) { "true" } else { "false" }.to_string(),
            2 => self.rng.gen_range(-100_000i64..100_000).to_string(),
            3 => format!("{:.2}", self.rng.gen_range(-1000.0..1000.0)),
            4 => format!("{:?}", self.key()),
            5 => self.object(depth - 1),
            _ => self.array(depth - 1),
        }
    }
}
