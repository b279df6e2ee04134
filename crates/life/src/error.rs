//! Errors surfaced by grid construction and lookup.

use thiserror::Error;

/// `InvalidSize`, `TooLarge` and `OutOfBounds` are caller mistakes in the
/// arguments, `NotFound` is a failed reverse lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid size must be positive")]
    InvalidSize,
    #[error("a {size}x{size} grid does not fit in memory")]
    TooLarge { size: usize },
    #[error("coordinate ({row}, {col}) is outside a {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("element is not part of this grid")]
    NotFound,
}

impl GridError {
    /// True for the errors caused by a bad size or coordinate argument.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidSize | Self::TooLarge { .. } | Self::OutOfBounds { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_classes() {
        assert!(GridError::InvalidSize.is_invalid_argument());
        assert!(GridError::OutOfBounds { row: 4, col: 0, size: 4 }.is_invalid_argument());
        assert!(GridError::TooLarge { size: 1 << 20 }.is_invalid_argument());
        assert!(!GridError::NotFound.is_invalid_argument());
    }

    #[test]
    fn error_messages() {
        let err = GridError::OutOfBounds { row: 4, col: 1, size: 4 };
        assert_eq!(err.to_string(), "coordinate (4, 1) is outside a 4x4 grid");
        assert_eq!(GridError::InvalidSize.to_string(), "grid size must be positive");
        assert_eq!(
            GridError::TooLarge { size: 70_000 }.to_string(),
            "a 70000x70000 grid does not fit in memory"
        );
    }
}
