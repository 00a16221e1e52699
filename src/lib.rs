pub mod error;
pub mod image;
pub mod pyramid;
pub mod features;
pub mod matching;
pub mod gcp;
pub mod io;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

pub use self::error::CorrelatorError;
pub use self::image::{Image, integral_image::IntegralImage};
pub use self::pyramid::surf::{OctaveMap, INTERVALS, octave_layer::OctaveLayer, surf_runtime_params::SurfRuntimeParams};
pub use self::features::{Feature, surf_feature::{FeaturePoint, FeaturePointExtractor}};
pub use self::matching::{MatchedPair, match_feature_points, surf_descriptor::{DESCRIPTOR_SIZE, SurfDescriptor}};
pub use self::gcp::{GroundControlPoint, GeoTransform, gather_feature_points, compute_matching_points};
