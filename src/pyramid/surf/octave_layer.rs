extern crate nalgebra as na;

use na::DMatrix;

use crate::Float;
use crate::image::integral_image::IntegralImage;

/// Correction of the box filter approximation of `Dxy`.
pub const DXY_WEIGHT: Float = 0.9;

/// Approximate Hessian response of one (octave, interval) scale.
///
/// Pixels closer than `radius` to an edge are never populated and keep a
/// determinant of 0 and a sign of 0.
#[derive(Debug,Clone)]
pub struct OctaveLayer {
    pub octave: usize,
    pub interval: usize,
    pub filter_size: usize,
    pub radius: usize,
    pub scale: usize,
    pub width: usize,
    pub height: usize,
    pub hessian_determinants: DMatrix<Float>,
    pub signs: DMatrix<i8>
}

impl OctaveLayer {
    pub fn new(octave: usize, interval: usize) -> OctaveLayer {
        let scale = 1usize << octave;
        let filter_size = 3*scale*interval + 1;
        let radius = (filter_size - 1)/2;

        OctaveLayer {
            octave,
            interval,
            filter_size,
            radius,
            scale,
            width: 0,
            height: 0,
            hessian_determinants: DMatrix::<Float>::zeros(0,0),
            signs: DMatrix::<i8>::zeros(0,0)
        }
    }

    pub fn compute_layer(&mut self, integral_image: &IntegralImage) {
        self.width = integral_image.width();
        self.height = integral_image.height();
        self.hessian_determinants = DMatrix::<Float>::zeros(self.height,self.width);
        self.signs = DMatrix::<i8>::zeros(self.height,self.width);

        let filter_size = self.filter_size;
        let radius = self.radius as isize;
        let lobe = (filter_size/3) as isize;
        let long_part = (2*lobe - 1) as usize;
        let lobe_side = lobe as usize;
        let normalization = (filter_size*filter_size) as Float;

        if self.height < self.radius || self.width < self.radius {
            return;
        }

        // Upper bound is inclusive; radius >= 3 keeps it inside the image.
        for r in self.radius..=self.height - self.radius {
            for c in self.radius..=self.width - self.radius {
                let (row, col) = (r as isize, c as isize);

                let dxx = integral_image.get_rectangle_sum(row - lobe + 1, col - radius, filter_size, long_part)
                    - 3.0*integral_image.get_rectangle_sum(row - lobe + 1, col - (lobe - 1)/2, lobe_side, long_part);
                let dyy = integral_image.get_rectangle_sum(row - radius, col - lobe + 1, long_part, filter_size)
                    - 3.0*integral_image.get_rectangle_sum(row - (lobe - 1)/2, col - lobe + 1, long_part, lobe_side);
                let dxy = integral_image.get_rectangle_sum(row - lobe, col - lobe, lobe_side, lobe_side)
                    + integral_image.get_rectangle_sum(row + 1, col + 1, lobe_side, lobe_side)
                    - integral_image.get_rectangle_sum(row - lobe, col + 1, lobe_side, lobe_side)
                    - integral_image.get_rectangle_sum(row + 1, col - lobe, lobe_side, lobe_side);

                let dxx = dxx/normalization;
                let dyy = dyy/normalization;
                let dxy = dxy/normalization;

                self.hessian_determinants[(r,c)] = dxx*dyy - (DXY_WEIGHT*dxy).powi(2);
                self.signs[(r,c)] = if dxx + dyy >= 0.0 { 1 } else { -1 };
            }
        }
    }

    /// True if `(row, col)` has a full 3x3 neighbourhood of populated pixels.
    pub fn is_inside_border(&self, row: usize, col: usize) -> bool {
        row > self.radius && col > self.radius && row + self.radius < self.height && col + self.radius < self.width
    }
}
