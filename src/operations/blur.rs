use image::DynamicImage;

use crate::{
    arg_parsers::KernelSize,
    convolve::{self, BlurMode},
    error::BlurError,
    image::Image,
    wb_err, wb_try,
};

pub fn blur(image: &mut Image, kernel_size: KernelSize) -> Result<(), BlurError> {
    apply(image, kernel_size, BlurMode::Separable)
}

pub fn gaussian_blur(image: &mut Image, kernel_size: KernelSize) -> Result<(), BlurError> {
    apply(image, kernel_size, BlurMode::Full)
}

fn apply(image: &mut Image, kernel_size: KernelSize, mode: BlurMode) -> Result<(), BlurError> {
    // decoders never produce zero-sized images, but the engine's contract
    // requires the caller to check, so check
    if image.pixels.width() == 0 || image.pixels.height() == 0 {
        return Err(wb_err!("image is empty"));
    }

    let rgb = image.pixels.to_rgb8();
    let blurred = wb_try!(convolve::blur(&rgb, kernel_size.get(), mode));
    image.pixels = DynamicImage::ImageRgb8(blurred);
    Ok(())
}
