//! Conversion between encoded image files and RGBA pixel arrays

use image::error::{ParameterError, ParameterErrorKind};
use image::{DynamicImage, ImageError, ImageFormat, RgbaImage};
use ndarray::Array3;
use std::path::Path;

use crate::io::error::{MosaicError, Result, invalid_input};

/// Channels in every decoded pixel array
pub const RGBA_CHANNELS: usize = 4;

/// Decode an image file into a (height, width, 4) array
///
/// # Errors
///
/// Returns the underlying image error if the file cannot be opened or decoded
pub fn decode_rgba(path: &Path) -> std::result::Result<Array3<u8>, ImageError> {
    let rgba = image::open(path)?.to_rgba8();
    rgba_to_array(rgba).ok_or_else(|| {
        ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        ))
    })
}

/// Load the source image for block averaging
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_source(path: &Path) -> Result<Array3<u8>> {
    decode_rgba(path).map_err(|e| MosaicError::SourceLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Convert an RGBA buffer into an array
///
/// Returns `None` if the buffer length disagrees with its dimensions.
pub fn rgba_to_array(rgba: RgbaImage) -> Option<Array3<u8>> {
    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    Array3::from_shape_vec((height, width, RGBA_CHANNELS), rgba.into_raw()).ok()
}

/// Convert a (height, width, channels) array into an image
///
/// Three channels become RGB, four become RGBA.
///
/// # Errors
///
/// Returns an error if the channel count is neither 3 nor 4 or the
/// dimensions exceed what an image can hold
pub fn array_to_image(pixels: &Array3<u8>) -> Result<DynamicImage> {
    let (height, width, channels) = pixels.dim();
    let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(invalid_input(&format!(
            "{width}x{height} is too large for an image"
        )));
    };
    let raw: Vec<u8> = pixels.iter().copied().collect();

    let image = match channels {
        3 => image::RgbImage::from_raw(w, h, raw).map(DynamicImage::ImageRgb8),
        RGBA_CHANNELS => RgbaImage::from_raw(w, h, raw).map(DynamicImage::ImageRgba8),
        _ => None,
    };

    image.ok_or_else(|| {
        invalid_input(&format!(
            "cannot encode a {width}x{height} image with {channels} channels"
        ))
    })
}

/// Write a pixel array to disk, format chosen from the extension
///
/// Formats that cannot carry alpha receive an RGB conversion.
///
/// # Errors
///
/// Returns an error if:
/// - The array cannot be turned into an image
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved
pub fn save_pixels(pixels: &Array3<u8>, output_path: &Path) -> Result<()> {
    let mut image = array_to_image(pixels)?;

    if let Ok(format) = ImageFormat::from_path(output_path)
        && !supports_alpha(format)
        && image.color().has_alpha()
    {
        image = DynamicImage::ImageRgb8(image.to_rgb8());
    }

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(output_path).map_err(|e| MosaicError::OutputWrite {
        path: output_path.to_path_buf(),
        source: e,
    })
}

const fn supports_alpha(format: ImageFormat) -> bool {
    !matches!(format, ImageFormat::Jpeg)
}
