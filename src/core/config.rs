//! Config module - startup configuration and validation
//!
//! A game refuses to start on a board that cannot host every catalog
//! template in spawn orientation; rejecting that up front keeps the
//! spawn-column range well defined for the whole run.

use thiserror::Error;

use crate::core::shape::{Shape, CATALOG};
use crate::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Board configuration, validated before a game starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Configuration rejected at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    ZeroArea { width: usize, height: usize },
    #[error("board {width}x{height} cannot fit a {shape_w}x{shape_h} piece")]
    BoardTooSmall {
        width: usize,
        height: usize,
        shape_w: usize,
        shape_h: usize,
    },
}

impl GameConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Check that the board has positive area and can host every
    /// catalog template at spawn.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroArea {
                width: self.width,
                height: self.height,
            });
        }

        for index in 0..CATALOG.len() {
            let shape = Shape::from_catalog(index);
            if shape.width() as usize > self.width || shape.height() as usize > self.height {
                return Err(ConfigError::BoardTooSmall {
                    width: self.width,
                    height: self.height,
                    shape_w: shape.width() as usize,
                    shape_h: shape.height() as usize,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            GameConfig::new(0, 20).validate(),
            Err(ConfigError::ZeroArea { .. })
        ));
        assert!(matches!(
            GameConfig::new(10, 0).validate(),
            Err(ConfigError::ZeroArea { .. })
        ));
    }

    #[test]
    fn rejects_board_narrower_than_widest_template() {
        // The bar template is four columns wide.
        assert!(matches!(
            GameConfig::new(3, 20).validate(),
            Err(ConfigError::BoardTooSmall { .. })
        ));
    }

    #[test]
    fn rejects_board_shorter_than_tallest_template() {
        assert!(matches!(
            GameConfig::new(10, 1).validate(),
            Err(ConfigError::BoardTooSmall { .. })
        ));
    }

    #[test]
    fn smallest_legal_board_is_accepted() {
        assert_eq!(GameConfig::new(4, 2).validate(), Ok(()));
    }
}
