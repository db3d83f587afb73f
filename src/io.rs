//! Image output: ndarray to `GrayImage` conversion and file naming.
//!
//! ndarray indexes `[row, col]` with shape (height, width); the image crate
//! addresses pixels as `(x, y)` with dimensions (width, height).

use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};
use log::info;
use ndarray::Array2;

use crate::error::Result;

const FILE_PREFIX: &str = "custom_kurtosis_image_";
const FILE_EXTENSION: &str = "png";

/// Output file name for a target kurtosis.
///
/// The number is written with shortest round-trip digits and every `.`
/// replaced by `_`: `0.8` gives `custom_kurtosis_image_0_8.png`, `2.0` gives
/// `custom_kurtosis_image_2.png`. See [`format_target`] for when scientific
/// notation is used.
pub fn output_file_name(target_kurtosis: f64) -> String {
    let number = format_target(target_kurtosis).replace('.', "_");
    format!("{}{}.{}", FILE_PREFIX, number, FILE_EXTENSION)
}

/// Shortest round-trip text of `value`.
///
/// Plain decimal notation for decimal exponents in `-4..16`, otherwise
/// `<mantissa>e<sign><exponent>` with at least two exponent digits:
/// `0.00005` gives `5e-05`, `1e20` gives `1e+20`.
pub fn format_target(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }

    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if (-4..16).contains(&exponent) {
        value.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

/// Convert a `(height, width)` array of gray levels to a `GrayImage`.
pub fn array2_to_gray_image(arr: &Array2<u8>) -> GrayImage {
    let (height, width) = arr.dim();
    GrayImage::from_fn(width as u32, height as u32, |x, y| {
        Luma([arr[[y as usize, x as usize]]])
    })
}

/// Convert a `GrayImage` back to a `(height, width)` array.
pub fn gray_image_to_array2(img: &GrayImage) -> Array2<u8> {
    let (width, height) = img.dimensions();
    Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        img.get_pixel(x as u32, y as u32)[0]
    })
}

/// Save a gray-level grid as an 8-bit single-channel PNG.
pub fn save_gray_png(arr: &Array2<u8>, path: &Path) -> Result<()> {
    array2_to_gray_image(arr).save_with_format(path, image::ImageFormat::Png)?;
    info!("Saved {}x{} image to {}", arr.ncols(), arr.nrows(), path.display());
    Ok(())
}

/// Save under the standard name for `target_kurtosis` inside `dir`.
pub fn save_for_target(arr: &Array2<u8>, target_kurtosis: f64, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(output_file_name(target_kurtosis));
    save_gray_png(arr, &path)?;
    Ok(path)
}
