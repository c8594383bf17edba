use anyhow::Context;
use c64mc_core::format::{HEIGHT, WIDTH};
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};

/// Scales arbitrary RGB24 pictures to the 160x200 multicolour grid.
pub struct BitmapResizer {
    resizer: Resizer,
    options: ResizeOptions,
}

impl BitmapResizer {
    pub fn new() -> Self {
        Self {
            resizer: Resizer::new(),
            // Catmull-Rom is the usual bicubic kernel.
            options: ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::CatmullRom)),
        }
    }

    /// Resize an RGB24 image to 160x200. Returns RGB24 data.
    pub fn resize(&mut self, src_data: Vec<u8>, src_width: u32, src_height: u32) -> anyhow::Result<Vec<u8>> {
        let (target_width, target_height) = (WIDTH as u32, HEIGHT as u32);
        if src_width == target_width && src_height == target_height {
            return Ok(src_data);
        }

        let src_image = Image::from_vec_u8(src_width, src_height, src_data, PixelType::U8x3)
            .context("failed to create source image")?;

        let mut dst_image = Image::new(target_width, target_height, PixelType::U8x3);

        self.resizer
            .resize(&src_image, &mut dst_image, &self.options)
            .context("resize failed")?;

        Ok(dst_image.into_vec())
    }
}
