//! Validated block size.

use thiserror::Error;

/// Errors for block size validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScaleError {
    /// Block size must be at least one pixel.
    #[error("invalid scale {0}: must be a positive integer")]
    NotPositive(i64),
}

/// Edge length of a square averaging block, in pixels.
///
/// Always at least 1. Values beyond `u32::MAX` saturate; no image is wider
/// than that, so the block grid is 1×1 either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockScale(u32);

impl BlockScale {
    /// Block size used when none is given.
    pub const DEFAULT: u32 = 8;

    /// Validate a signed block size.
    pub fn new(value: i64) -> Result<Self, ScaleError> {
        if value <= 0 {
            return Err(ScaleError::NotPositive(value));
        }
        Ok(Self(u32::try_from(value).unwrap_or(u32::MAX)))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Number of blocks needed to cover `len` pixels (ceiling division).
    #[inline]
    pub fn blocks_for(self, len: u32) -> u32 {
        len.div_ceil(self.0)
    }
}

impl Default for BlockScale {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl std::fmt::Display for BlockScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_eight() {
        assert_eq!(BlockScale::default().get(), 8);
    }

    #[test]
    fn test_rejects_zero_and_negative() {
        assert_eq!(BlockScale::new(0), Err(ScaleError::NotPositive(0)));
        assert_eq!(BlockScale::new(-4), Err(ScaleError::NotPositive(-4)));
    }

    #[test]
    fn test_saturates_huge_values() {
        assert_eq!(BlockScale::new(i64::MAX).unwrap().get(), u32::MAX);
        assert_eq!(BlockScale::new(1 << 32).unwrap().get(), u32::MAX);
    }

    #[test]
    fn test_blocks_for_rounds_up() {
        let scale = BlockScale::new(8).unwrap();
        assert_eq!(scale.blocks_for(16), 2);
        assert_eq!(scale.blocks_for(10), 2);
        assert_eq!(scale.blocks_for(7), 1);
        assert_eq!(scale.blocks_for(0), 0);
        assert_eq!(BlockScale::new(i64::MAX).unwrap().blocks_for(u32::MAX), 1);
    }

    #[test]
    fn test_error_display() {
        let err = ScaleError::NotPositive(0);
        assert_eq!(err.to_string(), "invalid scale 0: must be a positive integer");
    }
}
