//! Error types for the board engine.
//!
//! A swap that does not produce a match is a normal outcome, not an error.
//! These variants only cover malformed input and the defensive cascade cap.

/// Errors raised when a board, position, or engine parameter is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board size must be at least 1, got {0}")]
    InvalidSize(usize),

    #[error("board has {actual} cells, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("position {position} is outside a board of {cells} cells")]
    PositionOutOfRange { position: usize, cells: usize },

    #[error("cell {position} holds kind {kind}, outside 0..{kinds}")]
    KindOutOfRange { position: usize, kind: u8, kinds: usize },

    #[error("cell {position} holds the empty marker")]
    EmptyCell { position: usize },

    #[error("at least 3 token kinds are required, got {kinds}")]
    TooFewKinds { kinds: usize },

    #[error("too many token kinds: {kinds}")]
    TooManyKinds { kinds: usize },

    #[error("board still had matches after {cascades} cascades")]
    CascadeLimit { cascades: u32 },
}

/// Errors raised when validating an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors raised by a [`GameSession`](crate::session::GameSession).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("board error: {0}")]
    Board(#[from] BoardError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::LengthMismatch { expected: 64, actual: 63 };
        assert_eq!(err.to_string(), "board has 63 cells, expected 64");

        let err = BoardError::PositionOutOfRange { position: 9, cells: 9 };
        assert_eq!(err.to_string(), "position 9 is outside a board of 9 cells");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("size must be >= 3".to_string());
        assert_eq!(err.to_string(), "config validation error: size must be >= 3");
    }

    #[test]
    fn test_session_error_wraps() {
        let err: SessionError = BoardError::CascadeLimit { cascades: 3 }.into();
        assert_eq!(err.to_string(), "board error: board still had matches after 3 cascades");
    }
}
