use crate::Float;
use crate::image::integral_image::IntegralImage;

pub const DESCRIPTOR_SIZE: usize = 64;
/// Side of the descriptor window in multiples of the point scale.
pub const HAAR_SCALE: usize = 20;
pub const QUADRANTS_PER_SIDE: usize = 4;
pub const SAMPLES_PER_QUADRANT_SIDE: usize = 5;

/// Haar wavelet statistics `[sum dx, sum dy, sum |dx|, sum |dy|]` of 4x4 quadrants, row-major.
#[derive(Debug,Clone,PartialEq)]
pub struct SurfDescriptor {
    pub data: [Float; DESCRIPTOR_SIZE]
}

impl SurfDescriptor {

    pub fn from_array(data: [Float; DESCRIPTOR_SIZE]) -> SurfDescriptor {
        SurfDescriptor{data}
    }

    pub fn new(integral_image: &IntegralImage, x: usize, y: usize, scale: usize) -> SurfDescriptor {
        let haar_filter_size = 2*scale;
        let desc_side = (HAAR_SCALE*scale) as isize;
        let quad_step = desc_side/QUADRANTS_PER_SIDE as isize;
        let sub_quad_step = quad_step/SAMPLES_PER_QUADRANT_SIDE as isize;
        // wavelets are anchored at their top-left corner
        let haar_offset = (haar_filter_size/2) as isize;

        let left_top_row = y as isize - desc_side/2;
        let left_top_col = x as isize - desc_side/2;

        let mut data = [0.0; DESCRIPTOR_SIZE];
        let mut count = 0;

        for quad_row in 0..QUADRANTS_PER_SIDE as isize {
            for quad_col in 0..QUADRANTS_PER_SIDE as isize {
                let r = left_top_row + quad_row*quad_step;
                let c = left_top_col + quad_col*quad_step;

                let mut dx = 0.0;
                let mut dy = 0.0;
                let mut abs_dx = 0.0;
                let mut abs_dy = 0.0;

                for sub_row in 0..SAMPLES_PER_QUADRANT_SIDE as isize {
                    for sub_col in 0..SAMPLES_PER_QUADRANT_SIDE as isize {
                        let center_row = r + sub_row*sub_quad_step + sub_quad_step/2;
                        let center_col = c + sub_col*sub_quad_step + sub_quad_step/2;

                        let cur_dx = integral_image.haar_wavelet_x(center_row - haar_offset, center_col - haar_offset, haar_filter_size);
                        let cur_dy = integral_image.haar_wavelet_y(center_row - haar_offset, center_col - haar_offset, haar_filter_size);

                        dx += cur_dx;
                        dy += cur_dy;
                        abs_dx += cur_dx.abs();
                        abs_dy += cur_dy.abs();
                    }
                }

                data[count] = dx;
                data[count+1] = dy;
                data[count+2] = abs_dx;
                data[count+3] = abs_dy;
                count += 4;
            }
        }

        SurfDescriptor{data}
    }

    pub fn distance_between(&self, other: &SurfDescriptor) -> Float {
        self.data.iter().zip(other.data.iter()).map(|(a,b)| (a-b).powi(2)).sum::<Float>().sqrt()
    }
}
