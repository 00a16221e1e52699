extern crate nalgebra as na;

use na::DMatrix;

use crate::Float;
use crate::image::Image;

/// Summed-area table: `table[(r,c)]` is the sum of all pixels in rows `0..=r`, columns `0..=c`.
#[derive(Debug,Clone)]
pub struct IntegralImage {
    table: DMatrix<Float>
}

impl IntegralImage {

    pub fn new(image: &Image) -> IntegralImage {
        IntegralImage::from_matrix(&image.buffer)
    }

    pub fn from_matrix(pixels: &DMatrix<Float>) -> IntegralImage {
        let (height, width) = pixels.shape();
        let mut table = DMatrix::<Float>::zeros(height,width);

        for i in 0..height {
            for j in 0..width {
                let a = if i > 0 && j > 0 { table[(i-1,j-1)] } else { 0.0 };
                let b = if j > 0 { table[(i,j-1)] } else { 0.0 };
                let c = if i > 0 { table[(i-1,j)] } else { 0.0 };
                table[(i,j)] = pixels[(i,j)] - a + b + c;
            }
        }

        IntegralImage{ table }
    }

    pub fn width(&self) -> usize {
        self.table.ncols()
    }

    pub fn height(&self) -> usize {
        self.table.nrows()
    }

    /// Out of range indices read as 0.
    pub fn get_value(&self, row: isize, col: isize) -> Float {
        if row < 0 || col < 0 || row as usize >= self.height() || col as usize >= self.width() {
            return 0.0;
        }
        self.table[(row as usize, col as usize)]
    }

    /// Sum over the `width` x `height` rectangle whose top-left pixel is `(row, col)`.
    ///
    /// The bottom/right edge is clamped to the image. A top/left edge outside the
    /// image contributes nothing. The result is never negative.
    pub fn get_rectangle_sum(&self, row: isize, col: isize, width: usize, height: usize) -> Float {
        let image_height = self.height() as isize;
        let image_width = self.width() as isize;
        let w = width as isize - 1;
        let h = height as isize - 1;

        let lt_row = if row <= image_height { row - 1 } else { -1 };
        let lt_col = if col <= image_width { col - 1 } else { -1 };
        let rb_row = if row + h < image_height { row + h } else { image_height - 1 };
        let rb_col = if col + w < image_width { col + w } else { image_width - 1 };

        let a = if lt_row >= 0 && lt_col >= 0 { self.get_value(lt_row, lt_col) } else { 0.0 };
        let b = if lt_row >= 0 && rb_col >= 0 { self.get_value(lt_row, rb_col) } else { 0.0 };
        let c = if rb_row >= 0 && rb_col >= 0 { self.get_value(rb_row, rb_col) } else { 0.0 };
        let d = if rb_row >= 0 && lt_col >= 0 { self.get_value(rb_row, lt_col) } else { 0.0 };

        let sum = a + c - b - d;
        if sum > 0.0 { sum } else { 0.0 }
    }

    /// Right half minus left half of a `size` x `size` window at `(row, col)`.
    pub fn haar_wavelet_x(&self, row: isize, col: isize, size: usize) -> Float {
        let half = size/2;
        self.get_rectangle_sum(row, col + half as isize, half, size) - self.get_rectangle_sum(row, col, half, size)
    }

    /// Bottom half minus top half of a `size` x `size` window at `(row, col)`.
    pub fn haar_wavelet_y(&self, row: isize, col: isize, size: usize) -> Float {
        let half = size/2;
        self.get_rectangle_sum(row + half as isize, col, size, half) - self.get_rectangle_sum(row, col, size, half)
    }
}
