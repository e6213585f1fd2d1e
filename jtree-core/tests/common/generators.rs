//! Stochastic content generators for test variations
//!
//! Uses seeded RNG for reproducibility. Print seed on failure for replay.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WHITESPACE: &[char] = &[' ', ' ', ' ', '\t', '\n', '\r'];

/// Seeded generator for reproducible stochastic tests
pub struct Gen {
    pub rng: StdRng,
    pub seed: u64,
}

impl Gen {
    /// Create with specific seed (for reproduction)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create from environment or random seed
    pub fn from_env_or_random() -> Self {
        let seed = std::env::var("JTREE_TEST_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(rand::random);
        Self::new(seed)
    }

    /// Geometric distribution: count until rand > alpha
    /// Returns 0, 1, 2, ... with decreasing probability
    pub fn geometric(&mut self, alpha: f64) -> usize {
        let mut n = 0;
        while self.rng.gen::<f64>() < alpha {
            n += 1;
        }
        n
    }

    /// Poisson-like count (simplified)
    pub fn poisson(&mut self, lambda: f64) -> usize {
        let l = (-lambda).exp();
        let mut k = 0;
        let mut p = 1.0;
        loop {
            k += 1;
            p *= self.rng.gen::<f64>();
            if p <= l {
                break;
            }
        }
        k - 1
    }

    /// Random boolean with probability p
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// Non-empty whitespace run
    pub fn whitespace(&mut self) -> String {
        let len = 1 + self.geometric(0.4);
        (0..len)
            .map(|_| WHITESPACE[self.rng.gen_range(0..WHITESPACE.len())])
            .collect()
    }

    /// Whitespace run that is usually empty
    pub fn gap(&mut self) -> String {
        if self.chance(0.3) {
            self.whitespace()
        } else {
            String::new()
        }
    }

    /// Random key: lowercase letters and digits, no escapes
    pub fn key(&mut self) -> String {
        let len = 1 + self.geometric(0.7);
        let chars = b"abcdefghijklmnopqrstuvwxyz0123456789_";
        (0..len)
            .map(|_| chars[self.rng.gen_range(0..chars.len())] as char)
            .collect()
    }

    /// Random number literal in JSON syntax
    pub fn number(&mut self) -> String {
        match self.rng.gen_range(0..3) {
            0 => self.rng.gen_range(-9999i32..9999).to_string(),
            1 => format!("{:.3}", self.rng.gen_range(-1000.0f64..1000.0)),
            _ => format!("{}e{}", self.rng.gen_range(1u32..10), self.rng.gen_range(-5i32..6)),
        }
    }

    /// Random scalar literal
    pub fn scalar(&mut self) -> String {
        match self.rng.gen_range(0..5) {
            0 => "null".to_string(),
            1 => "true".to_string(),
            2 => "false".to_string(),
            3 => format!("\"{}\"", self.key()),
            _ => self.number(),
        }
    }

    /// Random valid document. Object keys are unique within an object.
    pub fn document(&mut self, max_depth: usize) -> String {
        if max_depth == 0 || self.chance(0.3) {
            return self.scalar();
        }
        let count = self.geometric(0.6);
        if self.chance(0.5) {
            let items: Vec<String> = (0..count).map(|_| self.document(max_depth - 1)).collect();
            format!("[{}]", items.join(","))
        } else {
            let mut members = Vec::with_capacity(count);
            for i in 0..count {
                let key = format!("k{}_{}", i, self.key());
                let value = self.document(max_depth - 1);
                members.push(format!("\"{}\":{}", key, value));
            }
            format!("{{{}}}", members.join(","))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducibility() {
        let mut g1 = Gen::new(42);
        let mut g2 = Gen::new(42);

        for _ in 0..10 {
            assert_eq!(g1.document(3), g2.document(3));
            assert_eq!(g1.whitespace(), g2.whitespace());
        }
    }

    #[test]
    fn test_whitespace_is_never_empty() {
        let mut gen = Gen::new(7);
        for _ in 0..100 {
            let ws = gen.whitespace();
            assert!(!ws.is_empty());
            assert!(ws.chars().all(char::is_whitespace));
        }
    }
}
