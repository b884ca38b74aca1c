//! Decoded texture images

use crate::error::{ResourceKind, SceneError};

/// Decoded image data ready for material binding.
///
/// Pixels are RGBA8, row-major, top-left origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Raw RGBA pixel data
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color channels (4 for RGBA)
    pub channels: u8,
}

impl ImageData {
    /// Decodes an image from encoded bytes (PNG/JPEG).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SceneError> {
        let img = image::load_from_memory(bytes).map_err(|e| {
            log::warn!("texture decode failed: {e}");
            SceneError::missing(ResourceKind::Texture, format!("<undecodable: {e}>"))
        })?;

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        log::debug!("decoded texture {width}x{height}");

        Ok(Self {
            data: rgba.into_raw(),
            width,
            height,
            channels: 4,
        })
    }

    /// Creates a solid-color image, useful for tests and defaults.
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);
        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }

        Self {
            data,
            width,
            height,
            channels: 4,
        }
    }

    /// Size of the pixel data in bytes.
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_color_image() {
        let img = ImageData::solid_color(4, 2, [255, 0, 0, 255]);
        assert_eq!(img.width, 4);
        assert_eq!(img.height, 2);
        assert_eq!(img.channels, 4);
        assert_eq!(img.size_bytes(), 4 * 2 * 4);
        assert_eq!(&img.data[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = ImageData::from_bytes(&[0, 1, 2, 3]).unwrap_err();
        assert!(matches!(
            err,
            SceneError::MissingResource {
                kind: ResourceKind::Texture,
                ..
            }
        ));
    }
}
