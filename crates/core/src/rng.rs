//! RNG module - shape selection for piece spawning.
//!
//! The shape source is an injected dependency of the game so tests can
//! substitute a deterministic sequence. The production source draws
//! uniformly from the 7 shapes using a simple LCG seeded from the clock
//! once per process; there is no reproducibility guarantee.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::Shape;

/// Source of shapes for newly spawned pieces.
pub trait ShapeSource {
    fn next_shape(&mut self) -> Shape;
}

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the wall clock.
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(1);
        Self::new(seed)
    }

    /// Generate next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Uniform selection among the 7 shapes.
#[derive(Debug, Clone)]
pub struct UniformShapes {
    rng: SimpleRng,
}

impl UniformShapes {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Time-seeded source for normal play.
    pub fn from_time() -> Self {
        Self {
            rng: SimpleRng::from_time(),
        }
    }
}

impl ShapeSource for UniformShapes {
    fn next_shape(&mut self) -> Shape {
        Shape::ALL[self.rng.next_range(Shape::ALL.len() as u32) as usize]
    }
}

/// Deterministic shape source that replays a fixed sequence, wrapping
/// around at the end. Intended for tests.
#[derive(Debug, Clone)]
pub struct ScriptedShapes {
    sequence: Vec<Shape>,
    next: usize,
}

impl ScriptedShapes {
    /// # Panics
    ///
    /// Panics if `sequence` is empty.
    pub fn new(sequence: Vec<Shape>) -> Self {
        assert!(!sequence.is_empty(), "scripted shape sequence is empty");
        Self { sequence, next: 0 }
    }
}

impl ShapeSource for ScriptedShapes {
    fn next_shape(&mut self) -> Shape {
        let shape = self.sequence[self.next % self.sequence.len()];
        self.next += 1;
        shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds_diverge() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_uniform_shapes_stay_in_catalog() {
        let mut source = UniformShapes::new(7);
        for _ in 0..1000 {
            let shape = source.next_shape();
            assert!(Shape::ALL.contains(&shape));
        }
    }

    #[test]
    fn test_uniform_shapes_hit_every_shape() {
        let mut source = UniformShapes::new(99);
        let mut seen = [false; 7];
        for _ in 0..1000 {
            let shape = source.next_shape();
            seen[Shape::ALL.iter().position(|&s| s == shape).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s), "some shape never drawn: {seen:?}");
    }

    #[test]
    fn test_scripted_shapes_replay_and_wrap() {
        let mut source = ScriptedShapes::new(vec![Shape::I, Shape::O]);
        assert_eq!(source.next_shape(), Shape::I);
        assert_eq!(source.next_shape(), Shape::O);
        assert_eq!(source.next_shape(), Shape::I);
    }
}
