use log::debug;

use crate::Float;
use crate::image::integral_image::IntegralImage;
use self::octave_layer::OctaveLayer;

pub mod octave_layer;
pub mod surf_runtime_params;

/// Intervals per octave.
pub const INTERVALS: usize = 4;

/// Scale space of `OctaveLayer`s indexed by `(octave - octave_start, interval - 1)`.
#[derive(Debug,Clone)]
pub struct OctaveMap {
    pub octave_start: usize,
    pub octave_end: usize,
    pub octaves: Vec<Vec<OctaveLayer>>
}

impl OctaveMap {
    pub fn new(octave_start: usize, octave_end: usize) -> OctaveMap {
        let octaves = (octave_start..=octave_end)
            .map(|octave| (1..=INTERVALS).map(|interval| OctaveLayer::new(octave,interval)).collect::<Vec<OctaveLayer>>())
            .collect::<Vec<Vec<OctaveLayer>>>();

        OctaveMap{octave_start, octave_end, octaves}
    }

    pub fn compute_map(&mut self, integral_image: &IntegralImage) {
        for layers in self.octaves.iter_mut() {
            for layer in layers.iter_mut() {
                layer.compute_layer(integral_image);
            }
        }
        debug!("computed {} octaves x {} intervals on a {}x{} integral image", self.octaves.len(), INTERVALS, integral_image.width(), integral_image.height());
    }

    pub fn layer(&self, octave: usize, interval: usize) -> &OctaveLayer {
        &self.octaves[octave - self.octave_start][interval - 1]
    }

    /// 3x3x3 non-maximum suppression. Ties with any of the 26 neighbours fail.
    pub fn point_is_extremum(row: usize, col: usize, bottom: &OctaveLayer, mid: &OctaveLayer, top: &OctaveLayer, threshold: Float) -> bool {
        // top has the widest filter, so its border covers the other two layers
        if !top.is_inside_border(row, col) {
            return false;
        }

        let current = mid.hessian_determinants[(row,col)];
        if current < threshold {
            return false;
        }

        for r in row-1..row+2 {
            for c in col-1..col+2 {
                if top.hessian_determinants[(r,c)] >= current || bottom.hessian_determinants[(r,c)] >= current {
                    return false;
                }
                if (r != row || c != col) && mid.hessian_determinants[(r,c)] >= current {
                    return false;
                }
            }
        }

        true
    }
}
