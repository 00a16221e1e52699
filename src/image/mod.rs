extern crate image as image_rs;
extern crate nalgebra as na;

use image_rs::{GrayImage, RgbImage, DynamicImage, Pixel};
use na::DMatrix;

use crate::{Float, CorrelatorError};

pub mod integral_image;

pub const RED_WEIGHT: Float = 0.21;
pub const GREEN_WEIGHT: Float = 0.72;
pub const BLUE_WEIGHT: Float = 0.07;
const CHANNEL_MAX: Float = 255.0;

/// Luminosity grid in `[0,1]` consumed by the detector. Indexed `(row, col)`.
#[derive(Debug,Clone)]
pub struct Image {
    pub buffer: DMatrix<Float>
}

impl Image {

    pub fn width(&self) -> usize {
        self.buffer.ncols()
    }

    pub fn height(&self) -> usize {
        self.buffer.nrows()
    }

    pub fn from_matrix(matrix: &DMatrix<Float>) -> Image {
        Image{ buffer: matrix.clone() }
    }

    /// Converts three 8-bit bands with `(0.21 R + 0.72 G + 0.07 B) / 255`.
    pub fn from_rgb_bands(red: &DMatrix<Float>, green: &DMatrix<Float>, blue: &DMatrix<Float>) -> Result<Image, CorrelatorError> {
        let expected = red.shape();
        if expected.0 == 0 || expected.1 == 0 {
            return Err(CorrelatorError::EmptyImage);
        }
        for band in [green, blue].iter() {
            if band.shape() != expected {
                return Err(CorrelatorError::BandSizeMismatch{ expected, found: band.shape() });
            }
        }

        let buffer = DMatrix::<Float>::from_fn(expected.0, expected.1, |r,c| luminosity(red[(r,c)], green[(r,c)], blue[(r,c)]));
        Ok(Image{ buffer })
    }

    /// A single band is used for all three channels.
    pub fn from_gray_image(image: &GrayImage) -> Image {
        let (width, height) = image.dimensions();
        let buffer = DMatrix::<Float>::from_fn(height as usize, width as usize, |r,c| {
            let value = image.get_pixel(c as u32, r as u32).channels()[0] as Float;
            luminosity(value, value, value)
        });
        Image{ buffer }
    }

    pub fn from_rgb_image(image: &RgbImage) -> Image {
        let (width, height) = image.dimensions();
        let buffer = DMatrix::<Float>::from_fn(height as usize, width as usize, |r,c| {
            let channels = image.get_pixel(c as u32, r as u32).channels();
            luminosity(channels[0] as Float, channels[1] as Float, channels[2] as Float)
        });
        Image{ buffer }
    }

    pub fn from_dynamic_image(image: &DynamicImage) -> Image {
        match image.color().channel_count() {
            count if count >= 3 => Image::from_rgb_image(&image.to_rgb8()),
            _ => Image::from_gray_image(&image.to_luma8())
        }
    }
}

fn luminosity(red: Float, green: Float, blue: Float) -> Float {
    (red*RED_WEIGHT + green*GREEN_WEIGHT + blue*BLUE_WEIGHT)/CHANNEL_MAX
}
