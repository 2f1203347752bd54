//! Random selection seam for the round engine.
//!
//! Category, word, and imposter draws go through [`Chooser`] so tests can
//! script the outcome without touching the transition logic.

use rand::Rng;
use std::fmt::Debug;

/// Uniform index choice. Object safe so the game can own the source.
pub trait Chooser: Debug + Send {
    /// Returns an index in `0..len`. Callers guarantee `len > 0`.
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Production chooser backed by the thread-local generator.
#[derive(Debug, Default)]
pub struct ThreadRngChooser;

impl Chooser for ThreadRngChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}
