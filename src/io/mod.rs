extern crate image as image_rs;

use std::fs::File;
use std::io::{BufReader,Read};
use std::path::Path;

use crate::CorrelatorError;
use crate::image::Image;
use crate::pyramid::surf::surf_runtime_params::SurfRuntimeParams;

pub fn load_image(file_path: &Path) -> Result<Image, CorrelatorError> {
    let dynamic_image = image_rs::open(file_path)
        .map_err(|e| CorrelatorError::ImageLoad(format!("{}: {}", file_path.display(), e)))?;
    Ok(Image::from_dynamic_image(&dynamic_image))
}

pub fn load_runtime_params(file_path: &Path) -> Result<SurfRuntimeParams, CorrelatorError> {
    let file = File::open(file_path)
        .map_err(|e| CorrelatorError::Config(format!("failed to open {}: {}", file_path.display(), e)))?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)
        .map_err(|e| CorrelatorError::Config(format!("failed to read {}: {}", file_path.display(), e)))?;

    SurfRuntimeParams::from_yaml_str(&contents)
}
