use std::path::Path;

use anyhow::Context;

/// A decoded picture as tightly packed RGB24.
pub struct SourceImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decode any image format the `image` crate understands, dropping alpha.
pub fn load_rgb(path: &Path) -> anyhow::Result<SourceImage> {
    let image = image::ImageReader::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("failed to detect format of {}", path.display()))?
        .decode()
        .with_context(|| format!("failed to decode {}", path.display()))?
        .into_rgb8();

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        anyhow::bail!("{} has no pixels", path.display());
    }

    Ok(SourceImage {
        data: image.into_raw(),
        width,
        height,
    })
}
