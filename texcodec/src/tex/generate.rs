//! Mipmap chain generation for encoding.

use image::{Rgba, RgbaImage};

use crate::tex::mipmap::{level_dimensions, mip_count};

/// Mipmap generator.
pub struct MipmapGenerator;

impl MipmapGenerator {
    /// Generate the full mipmap chain from a source image.
    ///
    /// Level dimensions follow the container's sizing rule, so non-square
    /// images keep halving the long edge after the short edge reaches 1.
    ///
    /// # Returns
    ///
    /// Vector of images: [source, half-size, quarter-size, ..., 1×1]
    pub fn generate_chain(source: &RgbaImage) -> Vec<RgbaImage> {
        let (width, height) = source.dimensions();
        let count = mip_count(width, height);

        let mut mipmaps = Vec::with_capacity(count as usize);
        mipmaps.push(source.clone());

        for index in 1..count {
            let (w, h) = level_dimensions(width, height, index);
            let next = match mipmaps.last() {
                Some(previous) => Self::downsample_box(previous, w, h),
                None => break,
            };
            mipmaps.push(next);
        }

        mipmaps
    }

    /// Downsample to `width × height` using a 2×2 box filter.
    ///
    /// Source coordinates are clamped, so an edge of 1 averages the same
    /// pixel twice.
    fn downsample_box(source: &RgbaImage, width: u32, height: u32) -> RgbaImage {
        let max_x = source.width().saturating_sub(1);
        let max_y = source.height().saturating_sub(1);

        let mut output = RgbaImage::new(width, height);

        for y in 0..height {
            for x in 0..width {
                let x0 = (x * 2).min(max_x);
                let x1 = (x * 2 + 1).min(max_x);
                let y0 = (y * 2).min(max_y);
                let y1 = (y * 2 + 1).min(max_y);

                let p00 = source.get_pixel(x0, y0);
                let p10 = source.get_pixel(x1, y0);
                let p01 = source.get_pixel(x0, y1);
                let p11 = source.get_pixel(x1, y1);

                let mut avg = [0u8; 4];
                for (c, value) in avg.iter_mut().enumerate() {
                    let sum = p00[c] as u16 + p10[c] as u16 + p01[c] as u16 + p11[c] as u16;
                    *value = (sum / 4) as u8;
                }

                output.put_pixel(x, y, Rgba(avg));
            }
        }

        output
    }
}
