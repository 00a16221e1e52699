use std::fmt;

use crate::Float;

#[derive(Debug, Clone, PartialEq)]
pub enum CorrelatorError {
    EmptyImage,
    ZeroDimension { width: usize, height: usize },
    InvalidOctaveRange { start: usize, end: usize },
    NegativeThreshold(Float),
    InvalidMatchingThreshold(Float),
    BandSizeMismatch { expected: (usize, usize), found: (usize, usize) },
    MissingGeoTransform,
    ImageLoad(String),
    Config(String),
}

impl fmt::Display for CorrelatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorrelatorError::EmptyImage => write!(f, "image has no pixels"),
            CorrelatorError::ZeroDimension { width, height } => {
                write!(f, "image must have non-zero width and height, got {}x{}", width, height)
            }
            CorrelatorError::InvalidOctaveRange { start, end } => write!(
                f,
                "octave numbers are invalid: start {} end {} (need 1 <= start <= end)",
                start, end
            ),
            CorrelatorError::NegativeThreshold(threshold) => {
                write!(f, "hessian threshold must not be negative, got {}", threshold)
            }
            CorrelatorError::InvalidMatchingThreshold(threshold) => {
                write!(f, "matching threshold must lie in [0,1], got {}", threshold)
            }
            CorrelatorError::BandSizeMismatch { expected, found } => write!(
                f,
                "band size {}x{} does not match {}x{}",
                found.1, found.0, expected.1, expected.0
            ),
            CorrelatorError::MissingGeoTransform => {
                write!(f, "georeferenced output requested without a geotransform")
            }
            CorrelatorError::ImageLoad(msg) => write!(f, "failed to load image: {}", msg),
            CorrelatorError::Config(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for CorrelatorError {}
