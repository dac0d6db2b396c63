//! Configuration for maze generation.

use crate::error::{MazeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maze generation configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MazeConfig {
    /// Grid width in cells
    pub width: usize,

    /// Grid height in cells
    pub height: usize,

    /// Probability of opening each remaining interior wall after carving.
    /// 0.0 yields a perfect maze (pure spanning tree, exactly one route
    /// between any two cells); higher values add cycles and alternate
    /// routes. Must be within [0, 1].
    pub extra_opening_probability: f64,

    /// RNG seed. A fixed seed reproduces the exact wall layout;
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            extra_opening_probability: 0.10, // one extra opening per ~10 walls
            seed: None,
        }
    }
}

impl MazeConfig {
    /// Create a configuration for the given dimensions
    pub fn with_dimensions(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Fix the RNG seed for reproducible layouts
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check that the configuration describes a generatable maze
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MazeError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.extra_opening_probability.is_finite()
            || !(0.0..=1.0).contains(&self.extra_opening_probability)
        {
            return Err(MazeError::Config(format!(
                "extra_opening_probability must be within [0, 1], got {}",
                self.extra_opening_probability
            )));
        }
        Ok(())
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| MazeError::Config(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
