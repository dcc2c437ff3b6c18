//! Engine configuration, deserializable from a JS object.

use crate::catalog::TOKENS;
use crate::error::{BoardError, ConfigError};
use crate::types::DEFAULT_SIZE;
use serde::{Deserialize, Serialize};

/// Board and guard parameters for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Board side length.
    pub size: usize,
    /// Number of token kinds in play.
    pub kinds: usize,
    /// Rejected draws allowed per cell before the generator picks deterministically.
    pub max_draw_attempts: u32,
    /// Clear-and-refill passes allowed in a single resolve.
    pub max_cascades: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            size: DEFAULT_SIZE,
            kinds: TOKENS.len(),
            max_draw_attempts: 64,
            max_cascades: 1000,
        }
    }
}

impl EngineConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 3 {
            return Err(ConfigError::Validation(format!(
                "size must be >= 3, got {}",
                self.size
            )));
        }
        if self.kinds < 3 || self.kinds > TOKENS.len() {
            return Err(ConfigError::Validation(format!(
                "kinds must be in 3..={}, got {}",
                TOKENS.len(),
                self.kinds
            )));
        }
        if self.max_draw_attempts == 0 {
            return Err(ConfigError::Validation("maxDrawAttempts must be > 0".into()));
        }
        if self.max_cascades == 0 {
            return Err(ConfigError::Validation("maxCascades must be > 0".into()));
        }
        Ok(())
    }
}

/// Check a kind count before generating or refilling with it.
pub(crate) fn check_kinds(kinds: usize) -> Result<(), BoardError> {
    if kinds < 3 {
        return Err(BoardError::TooFewKinds { kinds });
    }
    if kinds >= crate::types::EMPTY as usize {
        return Err(BoardError::TooManyKinds { kinds });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.size, 8);
        assert_eq!(config.kinds, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_small_board() {
        let config = EngineConfig { size: 2, ..EngineConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_kind_counts() {
        let too_few = EngineConfig { kinds: 2, ..EngineConfig::default() };
        assert!(too_few.validate().is_err());
        let too_many = EngineConfig { kinds: 8, ..EngineConfig::default() };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_guards() {
        let config = EngineConfig { max_cascades: 0, ..EngineConfig::default() };
        assert!(config.validate().is_err());
        let config = EngineConfig { max_draw_attempts: 0, ..EngineConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_check_kinds() {
        assert_eq!(check_kinds(2), Err(BoardError::TooFewKinds { kinds: 2 }));
        assert!(check_kinds(7).is_ok());
        assert_eq!(check_kinds(255), Err(BoardError::TooManyKinds { kinds: 255 }));
    }
}
