use std::io::Cursor;

use base64::Engine;
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::core::models::{CaptureError, CaptureRegion};
use crate::global_constants::LOG_TAG_FRAME;

/// Extraction rectangle in physical pixels, after scaling and clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// A full-frame raster as delivered by the frame grabber: tightly packed
/// RGBA rows at the display's physical resolution.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    raw_rgba_data: Vec<u8>,
}

impl std::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.raw_rgba_data.len())
            .finish()
    }
}

impl FrameBuffer {
    pub fn build_from_raw_data(width_pixels: u32, height_pixels: u32, raw_rgba_data: Vec<u8>) -> Self {
        log::debug!(
            "{} building frame: {}x{}, {} bytes",
            LOG_TAG_FRAME,
            width_pixels,
            height_pixels,
            raw_rgba_data.len()
        );

        Self {
            width: width_pixels,
            height: height_pixels,
            raw_rgba_data,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.raw_rgba_data.is_empty()
    }

    #[allow(dead_code)]
    pub fn raw_data(&self) -> &[u8] {
        &self.raw_rgba_data
    }

    /// Scales a logical selection into physical pixels and clamps it to the
    /// frame.
    ///
    /// Rounding can push the far edge one pixel past the raster when a
    /// selection sits flush against the screen edge; the edge is clamped to
    /// the frame dimensions instead of failing. Only a rectangle whose
    /// origin already lies outside the frame is an error.
    pub fn scaled_crop_rect(
        &self,
        region: &CaptureRegion,
        scale_factor: f64,
    ) -> Result<CropRect, CaptureError> {
        let left = (region.x_position as f64 * scale_factor).round() as u32;
        let top = (region.y_position as f64 * scale_factor).round() as u32;
        let width = (region.width as f64 * scale_factor).round() as u32;
        let height = (region.height as f64 * scale_factor).round() as u32;

        if width == 0 || height == 0 {
            return Err(CaptureError::InvalidRegion(format!(
                "selection {}x{} scales to an empty rectangle at factor {}",
                region.width, region.height, scale_factor
            )));
        }

        if left >= self.width || top >= self.height {
            return Err(CaptureError::CropOutOfBounds {
                requested: (left, top, width, height),
                frame_size: (self.width, self.height),
            });
        }

        let clamped_width = width.min(self.width - left);
        let clamped_height = height.min(self.height - top);

        if clamped_width != width || clamped_height != height {
            log::debug!(
                "{} clamped crop from {}x{} to {}x{} at ({}, {})",
                LOG_TAG_FRAME,
                width,
                height,
                clamped_width,
                clamped_height,
                left,
                top
            );
        }

        Ok(CropRect {
            left,
            top,
            width: clamped_width,
            height: clamped_height,
        })
    }

    /// Copies the rectangle out of the frame, row by row.
    pub fn crop_to_rect(&self, rect: &CropRect) -> Result<FrameBuffer, CaptureError> {
        let mut cropped_data = Vec::with_capacity((rect.width * rect.height * 4) as usize);

        for row in rect.top..(rect.top + rect.height) {
            let row_start = (row * self.width + rect.left) as usize * 4;
            let row_end = row_start + rect.width as usize * 4;

            if row_end > self.raw_rgba_data.len() {
                return Err(CaptureError::CropOutOfBounds {
                    requested: (rect.left, rect.top, rect.width, rect.height),
                    frame_size: (self.width, self.height),
                });
            }

            cropped_data.extend_from_slice(&self.raw_rgba_data[row_start..row_end]);
        }

        Ok(FrameBuffer::build_from_raw_data(
            rect.width,
            rect.height,
            cropped_data,
        ))
    }

    /// Scaled crop in one step: compute the physical rectangle, clamp it,
    /// extract it.
    pub fn crop_scaled_region(
        &self,
        region: &CaptureRegion,
        scale_factor: f64,
    ) -> Result<FrameBuffer, CaptureError> {
        let rect = self.scaled_crop_rect(region, scale_factor)?;
        self.crop_to_rect(&rect)
    }

    /// Serializes the frame to PNG, then base64 for transport.
    pub fn encode_png_base64(&self) -> Result<String, CaptureError> {
        let rgba_image =
            RgbaImage::from_raw(self.width, self.height, self.raw_rgba_data.clone()).ok_or_else(
                || {
                    CaptureError::EncodeFailure(format!(
                        "raw buffer of {} bytes does not match {}x{} RGBA",
                        self.raw_rgba_data.len(),
                        self.width,
                        self.height
                    ))
                },
            )?;

        let mut png_bytes: Vec<u8> = Vec::new();
        DynamicImage::ImageRgba8(rgba_image)
            .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
            .map_err(|e| CaptureError::EncodeFailure(e.to_string()))?;

        Ok(base64::engine::general_purpose::STANDARD.encode(&png_bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_frame(width: u32, height: u32, pixel: [u8; 4]) -> FrameBuffer {
        let raw_data = pixel
            .iter()
            .copied()
            .cycle()
            .take((width * height * 4) as usize)
            .collect();
        FrameBuffer::build_from_raw_data(width, height, raw_data)
    }

    #[test]
    fn test_scaled_crop_rect_doubles_every_component_at_factor_two() {
        let frame = solid_frame(4000, 4000, [0, 0, 0, 255]);
        let region = CaptureRegion {
            x_position: 10,
            y_position: 10,
            width: 100,
            height: 50,
        };

        let rect = frame.scaled_crop_rect(&region, 2.0).unwrap();

        assert_eq!(
            rect,
            CropRect {
                left: 20,
                top: 20,
                width: 200,
                height: 100,
            }
        );
    }

    #[test]
    fn test_scaled_crop_rect_clamps_one_pixel_overshoot_at_frame_edge() {
        let frame = solid_frame(1000, 1000, [0, 0, 0, 255]);
        // Scales to {900, 900, 101, 101}, one pixel past the frame on both
        // axes.
        let region = CaptureRegion {
            x_position: 600,
            y_position: 600,
            width: 67,
            height: 67,
        };
        let scale_factor = 1.5;
        assert_eq!((67f64 * scale_factor).round() as u32, 101);

        let rect = frame.scaled_crop_rect(&region, scale_factor).unwrap();

        assert_eq!(
            rect,
            CropRect {
                left: 900,
                top: 900,
                width: 100,
                height: 100,
            }
        );
    }

    #[test]
    fn test_scaled_crop_rect_rejects_origin_outside_frame() {
        let frame = solid_frame(100, 100, [0, 0, 0, 255]);
        let region = CaptureRegion {
            x_position: 150,
            y_position: 10,
            width: 20,
            height: 20,
        };

        let result = frame.scaled_crop_rect(&region, 1.0);

        assert!(matches!(
            result,
            Err(CaptureError::CropOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_scaled_crop_rect_rejects_region_scaling_to_zero() {
        let frame = solid_frame(100, 100, [0, 0, 0, 255]);
        let region = CaptureRegion {
            x_position: 0,
            y_position: 0,
            width: 1,
            height: 1,
        };

        let result = frame.scaled_crop_rect(&region, 0.25);

        assert!(matches!(result, Err(CaptureError::InvalidRegion(_))));
    }

    #[test]
    fn test_crop_extracts_exact_pixel_rows() {
        // 4x2 frame where every pixel's red channel encodes its column and
        // green channel its row.
        let mut raw_data = Vec::new();
        for row in 0u8..2 {
            for column in 0u8..4 {
                raw_data.extend_from_slice(&[column, row, 0, 255]);
            }
        }
        let frame = FrameBuffer::build_from_raw_data(4, 2, raw_data);

        let cropped = frame
            .crop_to_rect(&CropRect {
                left: 1,
                top: 1,
                width: 2,
                height: 1,
            })
            .unwrap();

        assert_eq!(cropped.width, 2);
        assert_eq!(cropped.height, 1);
        assert_eq!(cropped.raw_data(), &[1, 1, 0, 255, 2, 1, 0, 255]);
    }

    #[test]
    fn test_crop_scaled_region_full_frame_is_identity() {
        let frame = solid_frame(64, 32, [10, 20, 30, 255]);
        let region = CaptureRegion {
            x_position: 0,
            y_position: 0,
            width: 64,
            height: 32,
        };

        let cropped = frame.crop_scaled_region(&region, 1.0).unwrap();

        assert_eq!(cropped.width, frame.width);
        assert_eq!(cropped.height, frame.height);
        assert_eq!(cropped.raw_data(), frame.raw_data());
    }

    #[test]
    fn test_encode_png_base64_round_trips_losslessly() {
        let frame = solid_frame(8, 8, [200, 100, 50, 255]);

        let encoded = frame.encode_png_base64().unwrap();

        let png_bytes = base64::engine::general_purpose::STANDARD
            .decode(&encoded)
            .unwrap();
        assert_eq!(&png_bytes[..4], &[0x89, 0x50, 0x4E, 0x47]);

        let decoded = image::load_from_memory(&png_bytes).unwrap().into_rgba8();
        assert_eq!(decoded.width(), 8);
        assert_eq!(decoded.height(), 8);
        assert_eq!(decoded.into_raw(), frame.raw_data());
    }

    #[test]
    fn test_encode_png_base64_rejects_mismatched_buffer() {
        let frame = FrameBuffer::build_from_raw_data(10, 10, vec![0u8; 16]);

        let result = frame.encode_png_base64();

        assert!(matches!(result, Err(CaptureError::EncodeFailure(_))));
    }
}
