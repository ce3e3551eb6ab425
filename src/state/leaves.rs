//! Falling-leaf background animation
//!
//! The particle set is produced by a pure seeded generator so the
//! animation is deterministic for a given seed and testable without any
//! rendering. Positions at a point in time are likewise a pure function
//! of the particle and the elapsed seconds.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

/// Color palette size; the renderer maps indices to terminal colors
pub const LEAF_PALETTE_LEN: u8 = 3;
/// Glyph variants per particle
pub const LEAF_GLYPH_LEN: u8 = 3;

/// One decorative leaf descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct LeafParticle {
    /// Horizontal position as a fraction of the screen width (0.0..1.0)
    pub column: f32,
    /// Seconds before the first fall starts
    pub delay: f32,
    /// Seconds for one full fall
    pub duration: f32,
    /// Horizontal sway amplitude as a fraction of the width
    pub drift: f32,
    /// Index into the glyph set
    pub glyph: u8,
    /// Index into the color palette
    pub color: u8,
}

impl LeafParticle {
    /// Progress of the current fall (0.0..1.0), looping; None until the
    /// start delay has passed
    pub fn progress(&self, elapsed_secs: f32) -> Option<f32> {
        let active = elapsed_secs - self.delay;
        if active < 0.0 {
            return None;
        }
        Some((active / self.duration).fract())
    }

    /// Screen cell for a given area and elapsed time, if currently visible
    pub fn position(&self, width: u16, height: u16, elapsed_secs: f32) -> Option<(u16, u16)> {
        let progress = self.progress(elapsed_secs)?;
        let sway = (progress * std::f32::consts::TAU).sin() * self.drift;
        let x = ((self.column + sway).clamp(0.0, 0.999) * width as f32) as u16;
        let y = (progress * height as f32) as u16;
        if x < width && y < height {
            Some((x, y))
        } else {
            None
        }
    }
}

/// Generate a finite particle set from a seed.
///
/// Ranges follow the original presentation: falls of 15-40 seconds,
/// start delays of up to 30 seconds, mixed sizes and colors.
pub fn generate_leaves(seed: u64, count: usize) -> Vec<LeafParticle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| LeafParticle {
            column: rng.gen_range(0.0..1.0),
            delay: rng.gen_range(0.0..30.0),
            duration: rng.gen_range(15.0..40.0),
            drift: rng.gen_range(0.0..0.05),
            glyph: rng.gen_range(0..LEAF_GLYPH_LEN),
            color: rng.gen_range(0..LEAF_PALETTE_LEN),
        })
        .collect()
}

/// The animated leaf field shown behind the form
#[derive(Debug)]
pub struct LeafField {
    pub particles: Vec<LeafParticle>,
    started: Instant,
}

impl LeafField {
    /// Default particle count for a typical terminal
    pub const DEFAULT_COUNT: usize = 24;

    pub fn new(count: usize) -> Self {
        Self::with_seed(rand::random(), count)
    }

    pub fn with_seed(seed: u64, count: usize) -> Self {
        Self {
            particles: generate_leaves(seed, count),
            started: Instant::now(),
        }
    }

    /// An empty field renders nothing (animation disabled)
    pub fn disabled() -> Self {
        Self::with_seed(0, 0)
    }

    pub fn is_enabled(&self) -> bool {
        !self.particles.is_empty()
    }

    /// Seconds since the field started animating
    pub fn elapsed_secs(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }
}
