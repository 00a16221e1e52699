extern crate correlator;

use color_eyre::eyre::{eyre, Result};
use std::path::Path;

use correlator::{compute_matching_points, Float, GeoTransform, SurfRuntimeParams};
use correlator::io::{load_image, load_runtime_params};

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = std::env::args().collect::<Vec<String>>();
    if args.len() < 3 {
        return Err(eyre!("usage: {} <first image> <second image> [params.yaml] [six geotransform coefficients]", args[0]));
    }

    let runtime_params = match args.get(3) {
        Some(path) => load_runtime_params(Path::new(path))?,
        None => SurfRuntimeParams::default()
    };

    let first_image = load_image(Path::new(&args[1]))?;
    let second_image = load_image(Path::new(&args[2]))?;

    let geo_transform = match args.len() {
        0..=4 => None,
        10 => {
            let mut coefficients = [0.0; 6];
            for (coefficient, arg) in coefficients.iter_mut().zip(args[4..].iter()) {
                *coefficient = arg.parse::<Float>().map_err(|e| eyre!("invalid geotransform coefficient {}: {}", arg, e))?;
            }
            Some(GeoTransform(coefficients))
        },
        n => return Err(eyre!("expected 6 geotransform coefficients, got {}", n - 4))
    };

    let gcps = compute_matching_points(&first_image, &second_image, &runtime_params, geo_transform.as_ref())?;

    println!("number of matched pairs: {}", gcps.len());
    for gcp in gcps.iter() {
        println!("{:.1} {:.1} -> {:.1} {:.1}", gcp.pixel, gcp.line, gcp.x, gcp.y);
    }

    Ok(())
}
