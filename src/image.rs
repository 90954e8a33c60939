use image::{DynamicImage, ImageFormat};

/// An in-memory image plus the format it was decoded from,
/// which is the encoding fallback when the output format
/// cannot be determined any other way.
#[derive(Debug, Clone)]
pub struct Image {
    pub format: Option<ImageFormat>,
    pub pixels: DynamicImage,
}
