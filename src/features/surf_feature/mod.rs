use log::{debug, info, trace, warn};
use std::fmt;

use crate::{Float, CorrelatorError};
use crate::features::Feature;
use crate::image::integral_image::IntegralImage;
use crate::matching::surf_descriptor::SurfDescriptor;
use crate::pyramid::surf::{OctaveMap, INTERVALS, octave_layer::OctaveLayer};
use crate::pyramid::surf::surf_runtime_params::{validate_octave_range, validate_surf_threshold};

#[derive(Debug,Clone,PartialEq)]
pub struct FeaturePoint {
    pub x: usize,
    pub y: usize,
    pub scale: usize,
    pub radius: usize,
    pub sign: i8,
    pub descriptor: SurfDescriptor
}

impl FeaturePoint {
    pub fn new(x: usize, y: usize, scale: usize, radius: usize, sign: i8, descriptor: SurfDescriptor) -> FeaturePoint {
        FeaturePoint{x, y, scale, radius, sign, descriptor}
    }

    fn from_layer(x: usize, y: usize, layer: &OctaveLayer, integral_image: &IntegralImage) -> FeaturePoint {
        let descriptor = SurfDescriptor::new(integral_image, x, y, layer.scale);
        FeaturePoint::new(x, y, layer.scale, layer.radius, layer.signs[(y,x)], descriptor)
    }

    pub fn distance_between(&self, other: &FeaturePoint) -> Float {
        self.descriptor.distance_between(&other.descriptor)
    }
}

impl Feature for FeaturePoint {
    fn get_x_image(&self) -> usize { self.x }
    fn get_y_image(&self) -> usize { self.y }
}

impl fmt::Display for FeaturePoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "x: {}, y: {}, scale: {}, radius: {}, sign: {}", self.x, self.y, self.scale, self.radius, self.sign)
    }
}

/// Detects scale-space extrema over a fixed octave range.
#[derive(Debug,Clone,Copy)]
pub struct FeaturePointExtractor {
    octave_start: usize,
    octave_end: usize
}

impl FeaturePointExtractor {
    pub fn new(octave_start: usize, octave_end: usize) -> Result<FeaturePointExtractor, CorrelatorError> {
        validate_octave_range(octave_start, octave_end)?;
        Ok(FeaturePointExtractor{octave_start, octave_end})
    }

    pub fn octave_start(&self) -> usize { self.octave_start }
    pub fn octave_end(&self) -> usize { self.octave_end }

    /// Points come out octave by octave, then by interval triple, then in row-major scan order.
    pub fn extract_feature_points(&self, integral_image: &IntegralImage, threshold: Float) -> Result<Vec<FeaturePoint>, CorrelatorError> {
        validate_surf_threshold(threshold)?;
        let (width, height) = (integral_image.width(), integral_image.height());
        if width == 0 || height == 0 {
            return Err(CorrelatorError::ZeroDimension{width, height});
        }

        let mut octave_map = OctaveMap::new(self.octave_start, self.octave_end);
        octave_map.compute_map(integral_image);

        let mut feature_points = Vec::<FeaturePoint>::new();
        for octave in self.octave_start..=self.octave_end {
            let octave_count_before = feature_points.len();
            for k in 1..=INTERVALS-2 {
                let bottom = octave_map.layer(octave, k);
                let mid = octave_map.layer(octave, k+1);
                let top = octave_map.layer(octave, k+2);

                for row in 0..mid.height {
                    for col in 0..mid.width {
                        if OctaveMap::point_is_extremum(row, col, bottom, mid, top, threshold) {
                            let feature_point = FeaturePoint::from_layer(col, row, mid, integral_image);
                            trace!("{}", feature_point);
                            feature_points.push(feature_point);
                        }
                    }
                }
            }
            debug!("octave {}: {} feature points", octave, feature_points.len() - octave_count_before);
        }

        match feature_points.len() {
            0 => warn!("no feature points above threshold {} in octaves {}..={}", threshold, self.octave_start, self.octave_end),
            n => info!("extracted {} feature points", n)
        };

        Ok(feature_points)
    }
}
