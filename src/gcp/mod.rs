use log::{debug, info};

use crate::{Float, CorrelatorError};
use crate::image::{Image, integral_image::IntegralImage};
use crate::features::{Feature, surf_feature::{FeaturePoint, FeaturePointExtractor}};
use crate::matching::match_feature_points;
use crate::pyramid::surf::surf_runtime_params::SurfRuntimeParams;

/// `(pixel, line)` on the first image paired with `(x, y)` on the second.
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GroundControlPoint {
    pub pixel: Float,
    pub line: Float,
    pub x: Float,
    pub y: Float,
    pub z: Float
}

/// Affine pixel/line to georeferenced transform in the usual six coefficient layout.
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoTransform(pub [Float; 6]);

impl GeoTransform {
    pub fn apply(&self, pixel: Float, line: Float) -> (Float, Float) {
        let gt = &self.0;
        (gt[0] + pixel*gt[1] + line*gt[2], gt[3] + pixel*gt[4] + line*gt[5])
    }
}

pub fn gather_feature_points(image: &Image, runtime_params: &SurfRuntimeParams) -> Result<Vec<FeaturePoint>, CorrelatorError> {
    let extractor = FeaturePointExtractor::new(runtime_params.octave_start, runtime_params.octave_end)?;
    validate_image(image)?;
    debug!("octaves {}..={} on a {}x{} image", extractor.octave_start(), extractor.octave_end(), image.width(), image.height());

    let integral_image = IntegralImage::new(image);
    extractor.extract_feature_points(&integral_image, runtime_params.surf_threshold)
}

/// Finds corresponding locations of two images.
///
/// With `output_georef` set, the second image's coordinates are passed through `geo_transform`.
pub fn compute_matching_points(first_image: &Image, second_image: &Image, runtime_params: &SurfRuntimeParams, geo_transform: Option<&GeoTransform>) -> Result<Vec<GroundControlPoint>, CorrelatorError> {
    runtime_params.validate()?;
    validate_image(first_image)?;
    validate_image(second_image)?;
    let geo_transform = match (runtime_params.output_georef, geo_transform) {
        (true, None) => return Err(CorrelatorError::MissingGeoTransform),
        (true, Some(transform)) => Some(transform),
        (false, _) => None
    };

    let first_points = gather_feature_points(first_image, runtime_params)?;
    let second_points = gather_feature_points(second_image, runtime_params)?;

    let matches = match_feature_points(&first_points, &second_points, runtime_params.matching_threshold)?;
    info!("{} matching points from {} and {} feature points", matches.len(), first_points.len(), second_points.len());

    let gcps = matches.iter().map(|matched_pair| {
        let (pixel, line) = matched_pair.feature_one.get_pixel_center();
        let (x, y) = matched_pair.feature_two.get_pixel_center();
        let (x, y) = match geo_transform {
            Some(transform) => transform.apply(x, y),
            None => (x, y)
        };
        GroundControlPoint{pixel, line, x, y, z: 0.0}
    }).collect::<Vec<GroundControlPoint>>();

    Ok(gcps)
}

fn validate_image(image: &Image) -> Result<(), CorrelatorError> {
    let (width, height) = (image.width(), image.height());
    match (width, height) {
        (0, 0) => Err(CorrelatorError::EmptyImage),
        (0, _) | (_, 0) => Err(CorrelatorError::ZeroDimension{width, height}),
        _ => Ok(())
    }
}
