use image::{DynamicImage, GrayImage, Luma};
use std::io::Cursor;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("failed to encode processed image: {0}")]
    Encode(String),
}

/// Longest edge the OCR engine handles comfortably; larger pastes are
/// downscaled before recognition.
const MAX_EDGE: u32 = 2600;

/// Decode pasted image bytes and return grayscale, contrast-stretched PNG
/// bytes ready for the OCR engine.
pub fn prepare_image(data: &[u8]) -> Result<Vec<u8>, PreprocessError> {
    let img = clamp_size(image::load_from_memory(data)?);
    let gray = stretch_contrast(img.to_luma8());

    let mut buf = Vec::new();
    DynamicImage::ImageLuma8(gray)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| PreprocessError::Encode(e.to_string()))?;
    Ok(buf)
}

fn clamp_size(img: DynamicImage) -> DynamicImage {
    if img.width().max(img.height()) > MAX_EDGE {
        img.resize(MAX_EDGE, MAX_EDGE, image::imageops::FilterType::Lanczos3)
    } else {
        img
    }
}

/// Linear stretch to the full 0–255 range. Uniform images come back
/// unchanged.
fn stretch_contrast(gray: GrayImage) -> GrayImage {
    let (lo, hi) = gray
        .pixels()
        .fold((255u8, 0u8), |(lo, hi), p| (lo.min(p[0]), hi.max(p[0])));
    if hi <= lo {
        return gray;
    }

    let range = (hi - lo) as u32;
    let (width, height) = gray.dimensions();
    image::ImageBuffer::from_fn(width, height, |x, y| {
        let p = gray.get_pixel(x, y)[0];
        Luma([((p - lo) as u32 * 255 / range) as u8])
    })
}
