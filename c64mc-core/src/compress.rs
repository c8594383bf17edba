use lz4_flex::compress_prepend_size;

use crate::format::MulticolourImage;

/// LZ4 sizes of each stream, a rough measure of how well the image packs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamSizes {
    pub bitmap: usize,
    pub screen: usize,
    pub colour: usize,
}

impl StreamSizes {
    pub fn total(&self) -> usize {
        self.bitmap + self.screen + self.colour
    }
}

pub fn compressed_size(data: &[u8]) -> usize {
    compress_prepend_size(data).len()
}

pub fn stream_sizes(image: &MulticolourImage) -> StreamSizes {
    StreamSizes {
        bitmap: compressed_size(&image.bitmap),
        screen: compressed_size(&image.screen),
        colour: compressed_size(&image.colour),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::*;

    #[test]
    fn uniform_streams_compress_well() {
        let image = MulticolourImage {
            background: 0,
            bitmap: vec![0x55; BITMAP_SIZE],
            screen: vec![0; SCREEN_SIZE],
            colour: vec![0; COLOUR_SIZE],
        };
        let sizes = stream_sizes(&image);
        assert!(sizes.bitmap < BITMAP_SIZE / 10);
        assert!(sizes.screen < SCREEN_SIZE / 10);
        assert_eq!(sizes.total(), sizes.bitmap + sizes.screen + sizes.colour);
    }
}
