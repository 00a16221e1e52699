use serde::Deserialize;

use crate::{Float, CorrelatorError};

/// Largest octave accepted; the filter side doubles with every octave.
pub const MAX_OCTAVE: usize = 30;

#[derive(Debug,Clone,PartialEq,Deserialize)]
#[serde(default)]
pub struct SurfRuntimeParams {
    pub octave_start: usize,
    pub octave_end: usize,
    pub surf_threshold: Float,
    pub matching_threshold: Float,
    pub output_georef: bool
}

impl Default for SurfRuntimeParams {
    fn default() -> SurfRuntimeParams {
        SurfRuntimeParams {
            octave_start: 2,
            octave_end: 2,
            surf_threshold: 0.001,
            matching_threshold: 0.015,
            output_georef: false
        }
    }
}

impl SurfRuntimeParams {
    pub fn from_yaml_str(yaml: &str) -> Result<SurfRuntimeParams, CorrelatorError> {
        let params: SurfRuntimeParams = serde_yaml::from_str(yaml).map_err(|e| CorrelatorError::Config(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), CorrelatorError> {
        validate_octave_range(self.octave_start, self.octave_end)?;
        validate_surf_threshold(self.surf_threshold)?;
        validate_matching_threshold(self.matching_threshold)
    }
}

pub fn validate_octave_range(octave_start: usize, octave_end: usize) -> Result<(), CorrelatorError> {
    match octave_start == 0 || octave_end < octave_start || octave_end > MAX_OCTAVE {
        true => Err(CorrelatorError::InvalidOctaveRange{start: octave_start, end: octave_end}),
        false => Ok(())
    }
}

pub fn validate_surf_threshold(threshold: Float) -> Result<(), CorrelatorError> {
    // NaN fails the comparison as well
    match threshold >= 0.0 {
        true => Ok(()),
        false => Err(CorrelatorError::NegativeThreshold(threshold))
    }
}

pub fn validate_matching_threshold(threshold: Float) -> Result<(), CorrelatorError> {
    match (0.0..=1.0).contains(&threshold) {
        true => Ok(()),
        false => Err(CorrelatorError::InvalidMatchingThreshold(threshold))
    }
}
