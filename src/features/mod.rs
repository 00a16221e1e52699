use crate::Float;

pub mod surf_feature;

pub trait Feature {
    fn get_x_image(&self) -> usize;
    fn get_y_image(&self) -> usize;
    fn get_x_image_float(&self) -> Float {
        self.get_x_image() as Float
    }
    fn get_y_image_float(&self) -> Float {
        self.get_y_image() as Float
    }
    /// Coordinates of the pixel centre, `(x + 0.5, y + 0.5)`.
    fn get_pixel_center(&self) -> (Float, Float) {
        (self.get_x_image_float() + 0.5, self.get_y_image_float() + 0.5)
    }
}
